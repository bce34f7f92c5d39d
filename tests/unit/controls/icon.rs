use super::*;
use crate::foundation::core::Rgba8Premul;

#[test]
fn reprovision_matches_control_size() {
    let mut slot = IconSlot::default();
    slot.reprovision(Size::new(5, 3)).unwrap();
    assert_eq!(slot.buffer().size(), Size::new(5, 3));
    assert!(slot.buffer().data().iter().all(|&b| b == 0));
}

#[test]
fn source_is_scaled_into_buffer() {
    let red = Arc::new(PixelSurface::filled(4, 4, Rgba8Premul::opaque(255, 0, 0)).unwrap());
    let mut slot = IconSlot::default();
    slot.set_source(Some(red), Size::new(8, 8)).unwrap();
    assert_eq!(slot.buffer().size(), Size::new(8, 8));
    assert_eq!(slot.buffer().pixel(7, 7), Some(Rgba8Premul::opaque(255, 0, 0)));

    slot.clear();
    assert!(slot.source().is_none());
    assert!(slot.buffer().is_empty());
}
