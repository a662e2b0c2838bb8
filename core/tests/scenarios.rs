use surprise_core::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[test]
fn flowers_open_and_close() {
    let mut surprise = Surprise::new();
    assert_eq!(surprise.eggs(), &[false, false, false]);
    assert_eq!(surprise.active_scene(), None);

    assert_eq!(
        surprise.crack_egg(0),
        Ok(CrackOutcome::Cracked(Scene::Flowers))
    );
    assert_eq!(surprise.eggs(), &[true, false, false]);
    assert_eq!(surprise.active_scene(), Some(Scene::Flowers));
    assert!(surprise.can_close());

    assert_eq!(surprise.close_overlay(), CloseOutcome::Closed(Scene::Flowers));
    assert_eq!(surprise.active_scene(), None);
    assert_eq!(surprise.eggs(), &[true, false, false]);
}

#[test]
fn genie_counts_down_then_grants_the_wish() {
    let mut surprise = Surprise::new();
    surprise.crack_egg(1).unwrap();
    assert_eq!(surprise.active_scene(), Some(Scene::Genie));
    assert_eq!(surprise.countdown().remaining(), 30);
    assert!(!surprise.countdown().is_complete());

    let mut previous = surprise.countdown().remaining();
    for _ in 0..30 {
        assert!(surprise.countdown_armed());
        assert!(surprise.tick().has_update());
        let now = surprise.countdown().remaining();
        assert_eq!(now + 1, previous);
        previous = now;
    }

    assert_eq!(surprise.countdown().remaining(), 0);
    assert!(surprise.countdown().is_complete());
    assert!(!surprise.countdown_armed());
    assert!(surprise.can_close());

    // nothing more happens, no matter how long it stays open
    for _ in 0..5 {
        assert_eq!(surprise.tick(), TickOutcome::Ignored);
    }
    assert_eq!(surprise.countdown().remaining(), 0);

    surprise.close_overlay();
    assert_eq!(surprise.active_scene(), None);
}

#[test]
fn genie_cannot_be_dismissed_early() {
    let mut surprise = Surprise::new();
    surprise.crack_egg(1).unwrap();
    for _ in 0..10 {
        surprise.tick();
    }
    assert!(!surprise.countdown().is_complete());
    assert!(!surprise.can_close());
    assert_eq!(surprise.active_scene(), Some(Scene::Genie));
}

#[test]
fn video_gets_dense_burst_over_the_viewport() {
    let mut surprise = Surprise::new();
    assert_eq!(
        surprise.crack_egg(2),
        Ok(CrackOutcome::Cracked(Scene::Video))
    );
    let scene = surprise.active_scene().unwrap();
    let viewport = ViewportSize::new(390, 844);
    let burst = BurstLayout::for_scene(scene, viewport);
    assert_eq!(burst.pieces, 500);
    assert_eq!(burst.viewport, viewport);

    let ornaments = SceneOrnaments::generate(scene, 99);
    assert_eq!(ornaments.confetti.len(), burst.pieces);
    for piece in &ornaments.confetti {
        let left = burst.left_px(piece);
        assert!((0.0..390.0).contains(&left));
    }
}

#[test]
fn resize_while_open_moves_the_burst() {
    let mut surprise = Surprise::new();
    surprise.crack_egg(0).unwrap();
    let scene = surprise.active_scene().unwrap();
    let ornaments = SceneOrnaments::generate(scene, 5);

    let before = BurstLayout::for_scene(scene, ViewportSize::new(800, 600));
    let after = BurstLayout::for_scene(scene, ViewportSize::new(1600, 600));
    assert_eq!(surprise.active_scene(), Some(scene));
    for piece in &ornaments.confetti {
        let expected = before.left_px(piece) * 2.0;
        assert!((-1e-6..1e-6).contains(&(after.left_px(piece) - expected)));
    }
}

#[test]
fn every_egg_cracked_once() {
    let mut surprise = Surprise::new();
    for egg in 0..EGG_COUNT {
        assert!(surprise.crack_egg(egg).unwrap().has_update());
        if surprise.active_scene() == Some(Scene::Genie) {
            while surprise.countdown_armed() {
                surprise.tick();
            }
        }
        assert!(surprise.close_overlay().has_update());
    }
    assert_eq!(surprise.eggs(), &[true; EGG_COUNT]);
    for egg in 0..EGG_COUNT {
        assert!(!surprise.crack_egg(egg).unwrap().has_update());
    }
    assert_eq!(surprise.active_scene(), None);
}
