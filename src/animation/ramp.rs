/// Opacity interpolation for hover and press feedback.
///
/// A ramp is plain data; [`HoverRamp::advance`] is the whole state transition, so the platform
/// timer only decides how many ticks have elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverRamp {
    alpha: i32,
    /// Signed per-tick change.
    step: i32,
    target: i32,
    active: bool,
}

impl Default for HoverRamp {
    fn default() -> Self {
        Self::idle(0)
    }
}

impl HoverRamp {
    /// A finished ramp resting at `alpha`.
    pub fn idle(alpha: u8) -> Self {
        Self {
            alpha: i32::from(alpha),
            step: 0,
            target: i32::from(alpha),
            active: false,
        }
    }

    /// 0 -> 255.
    pub fn fade_in(step: i32) -> Self {
        Self {
            alpha: 0,
            step: magnitude(step),
            target: 255,
            active: true,
        }
    }

    /// 255 -> 0.
    pub fn fade_out(step: i32) -> Self {
        Self {
            alpha: 255,
            step: -magnitude(step),
            target: 0,
            active: true,
        }
    }

    /// Continue from the current alpha towards fully opaque.
    pub fn resume_in(self, step: i32) -> Self {
        Self {
            alpha: self.alpha,
            step: magnitude(step),
            target: 255,
            active: true,
        }
    }

    /// Apply `ticks` steps. Overshooting either end snaps to the target, and reaching the target
    /// deactivates the ramp.
    pub fn advance(self, ticks: u32) -> Self {
        let mut next = self;
        for _ in 0..ticks {
            if !next.active {
                break;
            }
            next.alpha += next.step;
            if !(0..=255).contains(&next.alpha) {
                next.alpha = next.target;
            }
            if next.alpha == next.target {
                next.active = false;
            }
        }
        next
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn opacity(&self) -> u8 {
        self.alpha.clamp(0, 255) as u8
    }

    pub fn target(&self) -> u8 {
        self.target.clamp(0, 255) as u8
    }
}

/// Per-tick change, kept within `1..=255` so every ramp reaches its target.
fn magnitude(step: i32) -> i32 {
    step.unsigned_abs().clamp(1, 255) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ramp.rs"]
mod tests;
