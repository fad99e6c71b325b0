//! The single image slot a session works on.

use std::io::BufRead;

use crate::codec::{decode_with, DecodeOptions};
use crate::error::{PgmError, Result};
use crate::transform::{embed_info, Transform};

use super::Image;

/// Holds at most one image.
///
/// A new slot is empty. Operations that need an image fail with
/// `PgmError::InvalidState` until one is loaded or stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSlot {
    image: Option<Image>,
}

impl ImageSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }

    /// Decode an image from `reader` into the slot.
    ///
    /// The slot is replaced only if the whole document decodes; on error the
    /// previous contents are untouched.
    pub fn load<R: BufRead>(&mut self, reader: R, options: &DecodeOptions) -> Result<&Image> {
        let image = decode_with(reader, options)?;
        Ok(self.store(image))
    }

    /// Replace the slot contents, returning the stored image.
    pub fn store(&mut self, image: Image) -> &Image {
        self.image.insert(image)
    }

    /// Reset to empty, returning what was held.
    pub fn clear(&mut self) -> Option<Image> {
        self.image.take()
    }

    pub fn get(&self) -> Result<&Image> {
        self.image.as_ref().ok_or_else(no_image)
    }

    pub fn get_mut(&mut self) -> Result<&mut Image> {
        self.image.as_mut().ok_or_else(no_image)
    }

    pub fn into_inner(self) -> Option<Image> {
        self.image
    }

    pub fn apply(&mut self, transform: Transform) -> Result<()> {
        transform.apply(self.get_mut()?);
        Ok(())
    }

    pub fn embed(&mut self, info: &str) -> Result<()> {
        embed_info(self.get_mut()?, info)
    }
}

impl From<Image> for ImageSlot {
    fn from(image: Image) -> Self {
        Self { image: Some(image) }
    }
}

fn no_image() -> PgmError {
    PgmError::invalid_state("no image stored").with_help("Load or create an image first")
}
