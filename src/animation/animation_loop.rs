use tracing::trace;

/// Reference-counted tick source for one top-level window.
///
/// The loop runs while at least one request is outstanding. It only records whether ticks are
/// wanted; the embedding application drives [`crate::LayeredWindow::tick`] at
/// [`crate::LayeredOpts::tick_interval`] while [`AnimationLoop::is_running`] is true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimationLoop {
    requests: u32,
    running: bool,
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request. Returns true when this call started the loop.
    pub fn request(&mut self) -> bool {
        self.requests = self.requests.saturating_add(1);
        if self.running {
            return false;
        }
        self.running = true;
        trace!(requests = self.requests, "animation loop started");
        true
    }

    /// Drop a request; unmatched calls are ignored. Returns true when this call stopped the loop.
    pub fn end_request(&mut self) -> bool {
        self.requests = self.requests.saturating_sub(1);
        if self.requests > 0 || !self.running {
            return false;
        }
        self.running = false;
        trace!("animation loop stopped");
        true
    }

    /// Drop every request and stop.
    pub fn stop(&mut self) {
        self.requests = 0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn requests(&self) -> u32 {
        self.requests
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animation_loop.rs"]
mod tests;
