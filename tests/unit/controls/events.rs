use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn event(kind: EventKind) -> ControlEvent {
    ControlEvent {
        control: ControlId::next(),
        kind,
        pointer: PointerEvent::at(1, 2),
    }
}

#[test]
fn emit_only_reaches_matching_kind() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut h = EventHandlers::default();
    let s = Rc::clone(&seen);
    h.subscribe(EventKind::Click, Box::new(move |e| s.borrow_mut().push(e.kind)));

    h.emit(&event(EventKind::Down));
    h.emit(&event(EventKind::Click));
    assert_eq!(*seen.borrow(), vec![EventKind::Click]);
}

#[test]
fn unsubscribe_removes_handler() {
    let count = Rc::new(RefCell::new(0));
    let mut h = EventHandlers::default();
    let c = Rc::clone(&count);
    let id = h.subscribe(EventKind::Up, Box::new(move |_| *c.borrow_mut() += 1));

    h.emit(&event(EventKind::Up));
    assert!(h.unsubscribe(id));
    assert!(!h.unsubscribe(id));
    h.emit(&event(EventKind::Up));

    assert_eq!(*count.borrow(), 1);
    assert!(h.is_empty());
}
