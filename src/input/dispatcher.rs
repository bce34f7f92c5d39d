use tracing::trace;

use crate::animation::animation_loop::AnimationLoop;
use crate::controls::control::{Control, ControlId};
use crate::controls::events::{ControlEvent, EventKind, PointerEvent};
use crate::foundation::core::{IRect, Point};

/// Process-wide pointer capture: the one control holding an unreleased press, if any.
///
/// Shared by every window of the process and passed into [`dispatch`] explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: Option<ControlId>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pressed(&self) -> Option<ControlId> {
        self.pressed
    }

    fn capture(&mut self, id: ControlId) {
        trace!(control = ?id, "pointer captured");
        self.pressed = Some(id);
    }

    fn clear(&mut self) {
        if let Some(id) = self.pressed.take() {
            trace!(control = ?id, "pointer capture dropped");
        }
    }

    fn release(&mut self, id: ControlId) {
        if self.pressed == Some(id) {
            trace!(control = ?id, "pointer released");
            self.pressed = None;
        }
    }
}

/// Raw pointer input for one window, in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Move(PointerEvent),
    Down(PointerEvent),
    Up(PointerEvent),
    DoubleClick(PointerEvent),
    /// The pointer left the window surface.
    Leave,
}

struct Dispatch<'a> {
    state: &'a mut InputState,
    animation: &'a mut AnimationLoop,
    fired: Vec<ControlEvent>,
}

/// Route one window-level event through the control tree rooted at `root`.
///
/// `root` is resolved against a container of `root_width` at the window origin. Returns the
/// events fired, in order.
pub fn dispatch(
    root: &mut Control,
    root_width: i32,
    state: &mut InputState,
    animation: &mut AnimationLoop,
    event: InputEvent,
) -> Vec<ControlEvent> {
    let mut d = Dispatch {
        state,
        animation,
        fired: Vec::new(),
    };
    match event {
        InputEvent::Move(ev) => {
            let captured = d
                .state
                .pressed
                .and_then(|id| bounds_of(root, id, Point::ZERO, root_width).map(|b| (id, b)));
            match captured {
                Some((id, bounds)) => {
                    if let Some(c) = root.find_mut(id) {
                        d.check_move(c, bounds, ev);
                    }
                }
                None => {
                    traverse(root, Point::ZERO, root_width, &mut |c: &mut Control, b: IRect| {
                        d.check_move(c, b, ev)
                    });
                }
            }
        }
        InputEvent::Down(ev) => {
            let previous = d.state.pressed;
            traverse(root, Point::ZERO, root_width, &mut |c: &mut Control, b: IRect| {
                d.check_down(c, b, ev)
            });
            if let Some(prev) = previous
                && d.state.pressed != previous
                && let Some(stale) = root.find_mut(prev)
            {
                stale.set_pressed(false);
            }
        }
        InputEvent::Up(ev) => {
            traverse(root, Point::ZERO, root_width, &mut |c: &mut Control, b: IRect| {
                d.check_up(c, b, ev)
            });
        }
        InputEvent::DoubleClick(ev) => {
            traverse(root, Point::ZERO, root_width, &mut |c: &mut Control, b: IRect| {
                d.check_double_click(c, b, ev)
            });
        }
        InputEvent::Leave => clear_hover(root),
    }
    d.fired
}

/// Depth-first walk: children topmost first, then the node itself. Stops at the first visitor
/// that reports the event handled. Hidden subtrees are not entered.
fn traverse<F>(c: &mut Control, parent_origin: Point, parent_width: i32, visit: &mut F) -> bool
where
    F: FnMut(&mut Control, IRect) -> bool,
{
    let bounds = c.resolved_bounds(parent_origin, parent_width);
    if c.is_visible() && !c.is_disposed() {
        for child in c.children_mut().iter_mut().rev() {
            if traverse(child, bounds.origin(), bounds.width, visit) {
                return true;
            }
        }
    }
    visit(c, bounds)
}

fn bounds_of(c: &Control, id: ControlId, parent_origin: Point, parent_width: i32) -> Option<IRect> {
    let bounds = c.resolved_bounds(parent_origin, parent_width);
    if c.id() == id {
        return Some(bounds);
    }
    c.children()
        .iter()
        .find_map(|child| bounds_of(child, id, bounds.origin(), bounds.width))
}

fn clear_hover(c: &mut Control) {
    c.set_hovered(false);
    for child in c.children_mut() {
        clear_hover(child);
    }
}

impl Dispatch<'_> {
    fn fire(&mut self, c: &mut Control, kind: EventKind, ev: PointerEvent, inside: bool) {
        c.fire(kind, ev, inside, self.animation, &mut self.fired);
    }

    fn check_move(&mut self, c: &mut Control, bounds: IRect, ev: PointerEvent) -> bool {
        let inside = c.contains_point(bounds, ev.position);
        if inside && !c.is_hovered() {
            c.set_hovered(true);
            self.fire(c, EventKind::Enter, ev, inside);
        } else if !inside && c.is_hovered() {
            c.set_hovered(false);
            self.fire(c, EventKind::Leave, ev, inside);
        } else if c.is_hovered() {
            self.fire(c, EventKind::Move, ev, inside);
        }

        // A move with no button held means the release happened somewhere we did not see.
        if ev.button.is_none() {
            self.check_up(c, bounds, ev);
        }
        false
    }

    fn check_down(&mut self, c: &mut Control, bounds: IRect, ev: PointerEvent) -> bool {
        if !c.contains_point(bounds, ev.position) || c.is_pressed() {
            return false;
        }
        c.set_pressed(true);
        self.fire(c, EventKind::Down, ev, true);
        self.state.capture(c.id());
        true
    }

    fn check_up(&mut self, c: &mut Control, bounds: IRect, ev: PointerEvent) -> bool {
        if !c.is_pressed() {
            return false;
        }
        let inside = c.contains_point(bounds, ev.position);
        c.set_pressed(false);
        self.fire(c, EventKind::Up, ev, inside);
        if inside {
            self.fire(c, EventKind::Click, ev, inside);
        }
        self.state.release(c.id());
        true
    }

    fn check_double_click(&mut self, c: &mut Control, bounds: IRect, ev: PointerEvent) -> bool {
        if !c.contains_point(bounds, ev.position) {
            return false;
        }
        c.set_pressed(false);
        self.state.clear();
        self.fire(c, EventKind::DoubleClick, ev, true);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/dispatcher.rs"]
mod tests;
