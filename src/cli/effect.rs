//! Effect command implementation.
//!
//! Applies effects in the order given and writes the result.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::codec::encode;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::transform::{FlipMode, Transform};
use crate::types::ImageSlot;

use super::files::{create_output, load};

/// Effects selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectArg {
    Negative,
    #[value(name = "hflip")]
    HorizontalFlip,
    #[value(name = "vflip")]
    VerticalFlip,
    #[value(name = "rotate90")]
    Rotate90,
    #[value(name = "rotate180")]
    Rotate180,
    /// 90 degrees counter-clockwise
    #[value(name = "rotate270")]
    Rotate270,
}

impl EffectArg {
    pub fn to_transform(self, flip_mode: FlipMode) -> Transform {
        match self {
            EffectArg::Negative => Transform::Negative,
            EffectArg::HorizontalFlip => Transform::FlipHorizontal(flip_mode),
            EffectArg::VerticalFlip => Transform::FlipVertical(flip_mode),
            EffectArg::Rotate90 => Transform::Rotate90,
            EffectArg::Rotate180 => Transform::Rotate180,
            EffectArg::Rotate270 => Transform::Rotate270,
        }
    }
}

/// Apply effects and write the result
#[derive(Args, Debug)]
pub struct EffectArgs {
    /// Image to read (`-` for stdin)
    #[arg(required = true)]
    pub file: PathBuf,

    /// Effects to apply, in order
    #[arg(required = true, value_enum)]
    pub effects: Vec<EffectArg>,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,

    /// Flip arithmetic (default from pgm.yaml)
    #[arg(long, value_enum)]
    pub flip_mode: Option<FlipMode>,
}

pub fn run(args: EffectArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let mut slot = ImageSlot::empty();
    printer.status("Reading", &display_path(&args.file));
    load(&mut slot, &args.file, &settings.decode_options())?;

    let flip_mode = args.flip_mode.unwrap_or(settings.flip_mode);

    for effect in &args.effects {
        let transform = effect.to_transform(flip_mode);
        slot.apply(transform)?;
        printer.info("Applied", &transform.to_string());
    }

    let image = slot.get()?;
    let mut out = create_output(args.output.as_deref(), args.force)?;
    encode(image, &mut out, settings.standard_comment)?;

    if let Some(path) = &args.output {
        printer.status(
            "Wrote",
            &format!(
                "{} ({})",
                display_path(path),
                plural(args.effects.len(), "effect", "effects")
            ),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use tempfile::tempdir;

    #[test]
    fn test_effect_arg_mapping() {
        assert_eq!(
            EffectArg::HorizontalFlip.to_transform(FlipMode::Legacy),
            Transform::FlipHorizontal(FlipMode::Legacy)
        );
        assert_eq!(
            EffectArg::Rotate270.to_transform(FlipMode::Mirror),
            Transform::Rotate270
        );
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pgm");
        let output = dir.path().join("out.pgm");
        std::fs::write(&input, "P2\n2 1\n9\n1 2\n").unwrap();

        let args = EffectArgs {
            file: input,
            effects: vec![EffectArg::Negative, EffectArg::HorizontalFlip],
            output: Some(output.clone()),
            force: false,
            flip_mode: None,
        };
        run(args, &Settings::default(), &Printer::plain()).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("P2\n# PGM image output by pgmtool\n"));
        let image = decode(text.as_bytes()).unwrap();
        assert_eq!(image.pixels(), &[7, 8]);
    }

    #[test]
    fn test_run_refuses_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pgm");
        let output = dir.path().join("out.pgm");
        std::fs::write(&input, "P2\n1 1\n9\n1\n").unwrap();
        std::fs::write(&output, "keep me").unwrap();

        let args = EffectArgs {
            file: input,
            effects: vec![EffectArg::Negative],
            output: Some(output.clone()),
            force: false,
            flip_mode: None,
        };
        let err = run(args, &Settings::default(), &Printer::plain()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "keep me");
    }

    #[test]
    fn test_flip_mode_flag_parses_domain_enum() {
        use crate::cli::{Cli, Commands};
        use clap::Parser;

        let argv = ["pgm", "effect", "in.pgm", "hflip", "--flip-mode"];
        let cli = Cli::try_parse_from(argv.iter().copied().chain(["legacy"])).unwrap();
        let Commands::Effect(args) = cli.command else {
            panic!("expected effect command");
        };
        assert_eq!(args.flip_mode, Some(FlipMode::Legacy));
        assert!(Cli::try_parse_from(argv.iter().copied().chain(["sideways"])).is_err());
    }

    #[test]
    fn test_run_legacy_flip_override() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pgm");
        let output = dir.path().join("out.pgm");
        std::fs::write(&input, "P2\n3 2\n9\n1 2 3 4 5 6\n").unwrap();

        let args = EffectArgs {
            file: input,
            effects: vec![EffectArg::HorizontalFlip],
            output: Some(output.clone()),
            force: false,
            flip_mode: Some(FlipMode::Legacy),
        };
        run(args, &Settings::default(), &Printer::plain()).unwrap();

        let image = decode(std::fs::read_to_string(&output).unwrap().as_bytes()).unwrap();
        assert_eq!(image.pixels(), &[4, 3, 2, 0, 6, 5]);
    }
}
