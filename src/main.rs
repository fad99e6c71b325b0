use std::env;

use clap::Parser;
use miette::Result;
use pgmtool::cli::{Cli, Commands};
use pgmtool::output::Printer;
use pgmtool::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    let cwd = env::current_dir().map_err(pgmtool::PgmError::from)?;
    let settings = Settings::resolve(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Show(args) => pgmtool::cli::show::run(args, &settings, &printer)?,
        Commands::View(args) => pgmtool::cli::view::run(args, &settings, &printer)?,
        Commands::Effect(args) => pgmtool::cli::effect::run(args, &settings, &printer)?,
        Commands::Mark(args) => pgmtool::cli::mark::run(args, &settings, &printer)?,
        Commands::Reveal(args) => pgmtool::cli::mark::run_reveal(args, &settings, &printer)?,
        Commands::Create(args) => pgmtool::cli::create::run(args, &printer)?,
        Commands::Check(args) => pgmtool::cli::check::run(args, &settings, &printer)?,
        Commands::Export(args) => pgmtool::cli::export::run(args, &settings, &printer)?,
        Commands::Completions(args) => pgmtool::cli::completions::run(args)?,
    }

    Ok(())
}
