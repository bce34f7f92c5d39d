use crate::foundation::core::{HorizontalAlign, IRect, Padding, Rgba8Premul, Size};
use crate::foundation::error::LayeredResult;
use crate::surface::pixel::{BlendTarget, PixelSurface};

/// Font and placement of a text block.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f32,
    pub color: Rgba8Premul,
    pub align: HorizontalAlign,
    pub padding: Padding,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Segoe UI".to_string(),
            font_size: 12.0,
            color: Rgba8Premul::opaque(0, 0, 0),
            align: HorizontalAlign::Left,
            padding: Padding::ZERO,
        }
    }
}

/// Text measurement and rasterization, supplied by the embedding application.
pub trait TextRenderer {
    /// Width of `text` and the line height of `style`.
    fn measure(&self, text: &str, style: &TextStyle) -> LayeredResult<Size>;

    /// Rasterize `text` into `rect` of `dest`, blended at `opacity`. Pixels outside `rect` must
    /// be left untouched.
    fn draw_text(
        &self,
        dest: &mut PixelSurface,
        text: &str,
        style: &TextStyle,
        rect: IRect,
        opacity: u8,
    ) -> LayeredResult<()>;
}

/// Fixed-advance renderer that paints one solid cell per character.
///
/// Useful wherever real glyphs do not matter: headless rendering and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockTextRenderer {
    pub advance: i32,
}

impl Default for BlockTextRenderer {
    fn default() -> Self {
        Self { advance: 6 }
    }
}

impl TextRenderer for BlockTextRenderer {
    fn measure(&self, text: &str, style: &TextStyle) -> LayeredResult<Size> {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        Ok(Size::new(
            chars.saturating_mul(self.advance),
            style.font_size.ceil() as i32,
        ))
    }

    fn draw_text(
        &self,
        dest: &mut PixelSurface,
        text: &str,
        style: &TextStyle,
        rect: IRect,
        opacity: u8,
    ) -> LayeredResult<()> {
        let measured = self.measure(text, style)?;
        let cells = IRect::new(rect.x, rect.y, measured.width, measured.height);
        let Some(area) = cells.intersect(rect) else {
            return Ok(());
        };
        let ink = PixelSurface::filled(1, 1, style.color)?;
        dest.alpha_blend(area, &ink, ink.bounds(), opacity);
        Ok(())
    }
}

/// A string plus its cached measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    text: String,
    pub style: TextStyle,
    pub visible: bool,
    measured: Size,
}

impl Default for TextBlock {
    fn default() -> Self {
        Self::new(TextStyle::default())
    }
}

impl TextBlock {
    pub fn new(style: TextStyle) -> Self {
        Self {
            text: String::new(),
            style,
            visible: true,
            measured: Size::ZERO,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Measured size of the current text.
    pub fn measured(&self) -> Size {
        self.measured
    }

    pub fn set_text(
        &mut self,
        text: impl Into<String>,
        renderer: &dyn TextRenderer,
    ) -> LayeredResult<()> {
        let text = text.into();
        self.measured = renderer.measure(&text, &self.style)?;
        self.text = text;
        Ok(())
    }

    /// Where the text goes inside `bounds`.
    ///
    /// Right and centre placement apply only while the text is narrower than the room it has;
    /// wider text starts at the left padding and is not clipped or scrolled.
    pub fn layout_rect(&self, bounds: IRect) -> IRect {
        let pad = self.style.padding;
        let tw = self.measured.width;
        let avail = bounds.width - pad.horizontal();
        let x = match self.style.align {
            HorizontalAlign::Right if tw < bounds.width => {
                bounds.x + (bounds.width - (tw + pad.right))
            }
            HorizontalAlign::Center if tw < avail => bounds.x + pad.left + (avail - tw) / 2,
            _ => bounds.x + pad.left,
        };
        IRect::new(
            x,
            bounds.y + pad.top,
            bounds.right() - pad.right - x,
            bounds.height - pad.vertical(),
        )
    }

    pub fn draw(
        &self,
        dest: &mut PixelSurface,
        renderer: &dyn TextRenderer,
        rect: IRect,
        opacity: u8,
    ) -> LayeredResult<()> {
        if !self.visible || self.text.is_empty() || rect.is_empty() {
            return Ok(());
        }
        renderer.draw_text(dest, &self.text, &self.style, rect, opacity)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controls/text.rs"]
mod tests;
