use super::*;

#[test]
fn forced_state_always_wins() {
    for enabled in [false, true] {
        for hovered in [false, true] {
            for pressed in [false, true] {
                assert_eq!(
                    ButtonVisualState::derive(
                        enabled,
                        hovered,
                        pressed,
                        Some(ButtonVisualState::Hover)
                    ),
                    ButtonVisualState::Hover
                );
            }
        }
    }
}

#[test]
fn derive_without_override() {
    use ButtonVisualState::*;
    assert_eq!(ButtonVisualState::derive(false, true, true, None), Disabled);
    assert_eq!(ButtonVisualState::derive(true, true, true, None), Pressed);
    assert_eq!(ButtonVisualState::derive(true, true, false, None), Hover);
    assert_eq!(ButtonVisualState::derive(true, false, true, None), Normal);
    assert_eq!(ButtonVisualState::derive(true, false, false, None), Normal);
}

#[test]
fn enter_starts_one_request_and_tick_releases_it() {
    let mut anim = AnimationLoop::new();
    let mut skin = ButtonSkin::new().with_step(128);

    skin.react(EventKind::Enter, true, true, &mut anim);
    skin.react(EventKind::Down, true, true, &mut anim);
    assert_eq!(anim.requests(), 1);
    assert_eq!(skin.overlay_state(), ButtonVisualState::Pressed);

    // 0 -> 128 -> 255 (snap).
    assert!(skin.tick(&mut anim));
    assert!(skin.tick(&mut anim));
    assert!(!skin.is_animating());
    assert!(!anim.is_running());
    assert!(!skin.tick(&mut anim));
}

#[test]
fn disabled_button_ignores_reactions() {
    let mut anim = AnimationLoop::new();
    let mut skin = ButtonSkin::new();
    skin.react(EventKind::Enter, false, true, &mut anim);
    assert!(!skin.is_animating());
    assert_eq!(anim.requests(), 0);
}

#[test]
fn up_outside_resets_overlay_without_ramp() {
    let mut anim = AnimationLoop::new();
    let mut skin = ButtonSkin::new();
    skin.react(EventKind::Down, true, true, &mut anim);
    skin.release(&mut anim);
    assert_eq!(anim.requests(), 0);

    skin.react(EventKind::Up, true, false, &mut anim);
    assert_eq!(skin.overlay_state(), ButtonVisualState::Hover);
    assert!(!skin.is_animating());
}

#[test]
fn base_state_is_normal_while_animating() {
    let mut anim = AnimationLoop::new();
    let mut skin = ButtonSkin::new();
    skin.react(EventKind::Enter, true, true, &mut anim);
    assert_eq!(skin.base_state(true, true, false), ButtonVisualState::Normal);
    assert_eq!(skin.base_state(false, true, false), ButtonVisualState::Disabled);
}

#[test]
fn image_for_falls_back_to_normal() {
    let normal = Arc::new(PixelSurface::new(1, 1).unwrap());
    let hover = Arc::new(PixelSurface::new(2, 2).unwrap());
    let skin = ButtonSkin::new().with_hover(Arc::clone(&hover));

    let got = skin.image_for(ButtonVisualState::Hover, Some(&normal)).unwrap();
    assert!(Arc::ptr_eq(got, &hover));
    let got = skin.image_for(ButtonVisualState::Pressed, Some(&normal)).unwrap();
    assert!(Arc::ptr_eq(got, &normal));
    assert!(skin.image_for(ButtonVisualState::Disabled, None).is_none());
}

#[test]
fn zero_step_ramp_releases_its_request() {
    let mut anim = AnimationLoop::new();
    let mut skin = ButtonSkin::new().with_step(0);

    skin.react(EventKind::Enter, true, true, &mut anim);
    assert_eq!(anim.requests(), 1);
    for _ in 0..255 {
        skin.tick(&mut anim);
    }
    assert!(!skin.is_animating());
    assert!(!anim.is_running());
    assert_eq!(skin.ramp().opacity(), 255);
}
