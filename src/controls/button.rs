use std::sync::Arc;

use crate::animation::animation_loop::AnimationLoop;
use crate::animation::ramp::HoverRamp;
use crate::controls::events::EventKind;
use crate::surface::pixel::PixelSurface;

const DEFAULT_HOVER_STEP: i32 = 28;

/// Which skin image a button shows.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVisualState {
    #[default]
    Normal,
    Hover,
    Pressed,
    Disabled,
}

impl ButtonVisualState {
    /// Pure function of the interaction flags. A forced state always wins.
    pub fn derive(
        enabled: bool,
        hovered: bool,
        pressed: bool,
        forced: Option<ButtonVisualState>,
    ) -> Self {
        if let Some(state) = forced {
            return state;
        }
        if !enabled {
            return Self::Disabled;
        }
        match (hovered, pressed) {
            (true, true) => Self::Pressed,
            (true, false) => Self::Hover,
            _ => Self::Normal,
        }
    }
}

/// Images and hover animation of a button. The normal image is the control's background.
#[derive(Clone, Debug)]
pub struct ButtonSkin {
    pub hover: Option<Arc<PixelSurface>>,
    pub pressed: Option<Arc<PixelSurface>>,
    pub disabled: Option<Arc<PixelSurface>>,
    forced: Option<ButtonVisualState>,
    /// Image faded in over the base while a ramp runs: `Hover` or `Pressed`.
    overlay: ButtonVisualState,
    ramp: HoverRamp,
    step: i32,
}

impl Default for ButtonSkin {
    fn default() -> Self {
        Self {
            hover: None,
            pressed: None,
            disabled: None,
            forced: None,
            overlay: ButtonVisualState::Hover,
            ramp: HoverRamp::default(),
            step: DEFAULT_HOVER_STEP,
        }
    }
}

impl ButtonSkin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hover(mut self, image: Arc<PixelSurface>) -> Self {
        self.hover = Some(image);
        self
    }

    pub fn with_pressed(mut self, image: Arc<PixelSurface>) -> Self {
        self.pressed = Some(image);
        self
    }

    pub fn with_disabled(mut self, image: Arc<PixelSurface>) -> Self {
        self.disabled = Some(image);
        self
    }

    /// Opacity change per tick, clamped to `1..=255`; see [`crate::LayeredOpts::hover_step`].
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step.unsigned_abs().clamp(1, 255) as i32;
        self
    }

    pub fn forced_state(&self) -> Option<ButtonVisualState> {
        self.forced
    }

    pub fn set_forced_state(&mut self, state: Option<ButtonVisualState>) {
        self.forced = state;
    }

    pub fn overlay_state(&self) -> ButtonVisualState {
        self.overlay
    }

    pub fn ramp(&self) -> HoverRamp {
        self.ramp
    }

    pub fn is_animating(&self) -> bool {
        self.ramp.is_active()
    }

    /// State of the base image. While a ramp runs the base stays `Normal` and the overlay
    /// carries the feedback.
    pub fn base_state(&self, enabled: bool, hovered: bool, pressed: bool) -> ButtonVisualState {
        if self.forced.is_none() && enabled && self.is_animating() {
            return ButtonVisualState::Normal;
        }
        ButtonVisualState::derive(enabled, hovered, pressed, self.forced)
    }

    /// Image for `state`, falling back to `normal` when the skin has none.
    pub fn image_for<'a>(
        &'a self,
        state: ButtonVisualState,
        normal: Option<&'a Arc<PixelSurface>>,
    ) -> Option<&'a Arc<PixelSurface>> {
        let specific = match state {
            ButtonVisualState::Normal => None,
            ButtonVisualState::Hover => self.hover.as_ref(),
            ButtonVisualState::Pressed => self.pressed.as_ref(),
            ButtonVisualState::Disabled => self.disabled.as_ref(),
        };
        specific.or(normal)
    }

    pub(crate) fn react(
        &mut self,
        kind: EventKind,
        enabled: bool,
        inside: bool,
        animation: &mut AnimationLoop,
    ) {
        if !enabled {
            return;
        }
        match kind {
            EventKind::Enter => self.start(HoverRamp::fade_in(self.step), animation),
            EventKind::Leave => self.start(HoverRamp::fade_out(self.step), animation),
            EventKind::Down => {
                self.overlay = ButtonVisualState::Pressed;
                self.start(self.ramp.resume_in(self.step), animation);
            }
            EventKind::Up => {
                self.overlay = ButtonVisualState::Hover;
                if inside {
                    self.start(self.ramp.resume_in(self.step), animation);
                }
            }
            _ => {}
        }
    }

    /// Advance the ramp one step. Returns true if it was running.
    pub(crate) fn tick(&mut self, animation: &mut AnimationLoop) -> bool {
        if !self.ramp.is_active() {
            return false;
        }
        self.ramp = self.ramp.advance(1);
        if !self.ramp.is_active() {
            animation.end_request();
        }
        true
    }

    /// Stop any running ramp and give back its animation request.
    pub(crate) fn release(&mut self, animation: &mut AnimationLoop) {
        if self.ramp.is_active() {
            self.ramp = HoverRamp::idle(self.ramp.opacity());
            animation.end_request();
        }
    }

    // One request per button, however many ramps are started while it runs.
    fn start(&mut self, ramp: HoverRamp, animation: &mut AnimationLoop) {
        let was_running = self.ramp.is_active();
        self.ramp = ramp;
        if !was_running {
            animation.request();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controls/button.rs"]
mod tests;
