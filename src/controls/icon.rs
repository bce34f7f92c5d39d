use std::sync::Arc;

use crate::foundation::core::Size;
use crate::foundation::error::LayeredResult;
use crate::surface::pixel::PixelSurface;

/// Icon bitmap plus a backing surface pre-scaled to the control size.
#[derive(Clone, Debug, Default)]
pub struct IconSlot {
    source: Option<Arc<PixelSurface>>,
    buffer: PixelSurface,
}

impl IconSlot {
    pub fn source(&self) -> Option<&Arc<PixelSurface>> {
        self.source.as_ref()
    }

    /// The surface that gets drawn; always the control's size.
    pub fn buffer(&self) -> &PixelSurface {
        &self.buffer
    }

    pub(crate) fn set_source(
        &mut self,
        source: Option<Arc<PixelSurface>>,
        size: Size,
    ) -> LayeredResult<()> {
        self.source = source;
        self.reprovision(size)
    }

    /// Replace the backing surface with one of `size` and re-render the icon into it.
    pub(crate) fn reprovision(&mut self, size: Size) -> LayeredResult<()> {
        self.buffer = match &self.source {
            Some(src) if src.size() == size => PixelSurface::clone(src),
            Some(src) => src.resize_bilinear(size)?,
            None => PixelSurface::with_size(size)?,
        };
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.source = None;
        self.buffer = PixelSurface::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controls/icon.rs"]
mod tests;
