use anyhow::Context;

use crate::foundation::core::Size;
use crate::foundation::error::{LayeredError, LayeredResult};

/// Process-wide options for layered windows.
///
/// Every field has a default, so a JSON document only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayeredOpts {
    /// Size of the shared presentation buffer. Windows larger than this are clamped.
    pub max_buffer_size: Size,
    /// Opacity change applied to a hover/press ramp on every tick.
    pub hover_step: i32,
    /// Period the embedding timer should tick at while an animation loop is running.
    pub tick_interval_ms: u64,
    /// Default manual blur-behind strength for new windows.
    pub blur_strength: u32,
}

impl Default for LayeredOpts {
    fn default() -> Self {
        Self {
            max_buffer_size: Size::new(4096 + 100, 2160 + 100),
            hover_step: 28,
            tick_interval_ms: 1,
            blur_strength: 4,
        }
    }
}

impl LayeredOpts {
    /// Parse options from JSON and validate them.
    pub fn from_json(json: &str) -> LayeredResult<Self> {
        let opts: LayeredOpts = serde_json::from_str(json)
            .context("parse layered options")
            .map_err(|e| LayeredError::serde(format!("{e:#}")))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> LayeredResult<()> {
        if self.max_buffer_size.is_empty() {
            return Err(LayeredError::validation(
                "max_buffer_size must be > 0 in both dimensions",
            ));
        }
        if self.hover_step <= 0 || self.hover_step > 255 {
            return Err(LayeredError::validation("hover_step must be in 1..=255"));
        }
        if self.blur_strength == 0 {
            return Err(LayeredError::validation("blur_strength must be >= 1"));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
