use super::*;

fn info(id: u64, visible: bool, minimized: bool, layered: bool) -> WindowInfo {
    WindowInfo {
        handle: WindowHandle(id),
        bounds: IRect::new(0, 0, 10, 10),
        visible,
        minimized,
        layered,
    }
}

#[test]
fn snapshot_keeps_only_plain_visible_windows_in_order() {
    let snap = VisibleWindowSnapshot::from_windows(vec![
        info(1, true, false, false),
        info(2, false, false, false),
        info(3, true, true, false),
        info(4, true, false, true),
        info(5, true, false, false),
    ]);
    let ids: Vec<u64> = snap.windows().iter().map(|w| w.handle.0).collect();
    assert_eq!(ids, vec![1, 5]);
}
