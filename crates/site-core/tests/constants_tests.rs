use site_core::constants::*;

#[test]
fn animation_windows_are_sane() {
    assert!(FADE_WINDOW_PCT > 0.0 && FADE_WINDOW_PCT < 50.0);
    assert!(OFFSET_WINDOW_PCT > 0.0 && OFFSET_WINDOW_PCT < 50.0);
    assert!(UNDERLINE_START_PCT > 0.0 && UNDERLINE_START_PCT < 100.0);
}

#[test]
fn hysteresis_thresholds_are_distinct() {
    assert_ne!(IN_VIEW_DOWN_PCT, IN_VIEW_UP_PCT);
    assert!(IN_VIEW_DOWN_PCT < IN_VIEW_UP_PCT);
}

#[test]
fn tracked_sections_are_the_three_page_anchors() {
    assert_eq!(TRACKED_SECTION_IDS, ["about", "portfolio", "contact"]);
}

#[test]
fn scene_tunings_are_positive() {
    assert!(STAR_AREA_PER_STAR > 0.0);
    assert!(UNDERWATER_PARTICLES > 0);
    assert!(UNDERWATER_BUBBLES > 0);
    assert!(MODEL_LOAD_TIMEOUT_SEC > 0.0);
    assert!(HERO_FIT_WIDTH > HERO_FIT_WIDTH_MOBILE);
    assert!((0.0..=1.0).contains(&HERO_CAMERA_TRACK));
}
