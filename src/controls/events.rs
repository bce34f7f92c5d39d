use smallvec::SmallVec;

use crate::controls::control::ControlId;
use crate::foundation::core::Point;

/// Pointer notifications a control can receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Enter,
    Leave,
    Move,
    Down,
    Up,
    Click,
    DoubleClick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer state as delivered by the window system, in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Point,
    /// Button held (for moves) or changed (for presses and releases).
    pub button: Option<MouseButton>,
}

impl PointerEvent {
    pub fn new(position: Point, button: Option<MouseButton>) -> Self {
        Self { position, button }
    }

    pub fn at(x: i32, y: i32) -> Self {
        Self::new(Point::new(x, y), None)
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }
}

/// One event fired at one control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlEvent {
    pub control: ControlId,
    pub kind: EventKind,
    pub pointer: PointerEvent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&ControlEvent)>;

/// Callback list of a single control. Subscribers of the same kind run in an unspecified order.
#[derive(Default)]
pub struct EventHandlers {
    next_id: u64,
    handlers: SmallVec<[(SubscriptionId, EventKind, Handler); 2]>,
}

impl std::fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandlers")
            .field("len", &self.handlers.len())
            .finish()
    }
}

impl EventHandlers {
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, kind, handler));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sid, _, _)| *sid != id);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, event: &ControlEvent) {
        for (_, kind, handler) in self.handlers.iter_mut() {
            if *kind == event.kind {
                handler(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controls/events.rs"]
mod tests;
