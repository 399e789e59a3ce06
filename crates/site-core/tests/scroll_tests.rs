use site_core::scroll::*;

fn ctx(scroll_y: f32, viewport_h: f32, direction: ScrollDirection) -> ScrollContext {
    ScrollContext {
        scroll_y,
        viewport_h,
        direction,
    }
}

const SECTION: SectionBounds = SectionBounds {
    top: 1000.0,
    height: 500.0,
};

#[test]
fn progress_spans_the_visibility_range() {
    // start = 1000 - 800 = 200, end = 1500, range = 1300
    let c = ctx(850.0, 800.0, ScrollDirection::Down);
    let p = section_progress(&c, &SECTION);
    assert!((p - 50.0).abs() < 0.01, "got {p}");
}

#[test]
fn progress_is_clamped_to_0_100() {
    for y in [-500.0, 0.0, 100.0, 199.0] {
        let p = section_progress(&ctx(y, 800.0, ScrollDirection::Down), &SECTION);
        assert_eq!(p, 0.0, "before the range at y={y}");
    }
    for y in [1500.0, 2000.0, 100_000.0] {
        let p = section_progress(&ctx(y, 800.0, ScrollDirection::Down), &SECTION);
        assert_eq!(p, 100.0, "past the range at y={y}");
    }
}

#[test]
fn progress_is_monotonic_in_scroll_offset() {
    let mut last = -1.0;
    let mut y = 0.0;
    while y <= 2000.0 {
        let p = section_progress(&ctx(y, 800.0, ScrollDirection::Down), &SECTION);
        assert!(p >= last, "p({y}) = {p} < {last}");
        last = p;
        y += 7.0;
    }
}

#[test]
fn collapsed_range_counts_as_fully_passed() {
    // Degenerate layout: zero-height section in a zero-height viewport
    let degenerate = SectionBounds {
        top: 300.0,
        height: 0.0,
    };
    for y in [0.0, 300.0, 5000.0] {
        let p = section_progress(&ctx(y, 0.0, ScrollDirection::Down), &degenerate);
        assert_eq!(p, 100.0);
        let v = visual_for(p, ScrollDirection::Down, AnimationKind::UpFade);
        assert_eq!(v.opacity, 1.0);
        assert_eq!((v.offset_x, v.offset_y), (0.0, 0.0));
    }
}

#[test]
fn downward_entry_matches_worked_example() {
    // scrollOffset=300 => progress = (300-200)/1300*100 ≈ 7.69
    let p = section_progress(&ctx(300.0, 800.0, ScrollDirection::Down), &SECTION);
    assert!((p - 7.692).abs() < 0.01, "got {p}");

    let v = visual_for(p, ScrollDirection::Down, AnimationKind::UpFade);
    assert!((v.opacity - 0.3846).abs() < 0.01, "opacity {}", v.opacity);
    assert!((v.offset_y - 37.18).abs() < 0.1, "offset_y {}", v.offset_y);
    assert_eq!(v.offset_x, 0.0);
}

#[test]
fn downward_mid_section_is_fully_settled() {
    let v = visual_for(50.0, ScrollDirection::Down, AnimationKind::UpFade);
    assert_eq!(v.opacity, 1.0);
    assert_eq!((v.offset_x, v.offset_y), (0.0, 0.0));
}

#[test]
fn opacity_stays_in_unit_range_everywhere() {
    for dir in [ScrollDirection::Down, ScrollDirection::Up] {
        for kind in [
            AnimationKind::UpFade,
            AnimationKind::LeftFade,
            AnimationKind::RightFade,
            AnimationKind::Default,
        ] {
            let mut p = 0.0;
            while p <= 100.0 {
                let v = visual_for(p, dir, kind);
                assert!((0.0..=1.0).contains(&v.opacity), "{dir:?} {kind:?} p={p}");
                p += 0.5;
            }
        }
    }
}

#[test]
fn per_kind_entry_offsets() {
    let v = visual_for(0.0, ScrollDirection::Down, AnimationKind::UpFade);
    assert_eq!((v.offset_x, v.offset_y), (0.0, 50.0));
    let v = visual_for(0.0, ScrollDirection::Down, AnimationKind::LeftFade);
    assert_eq!((v.offset_x, v.offset_y), (-50.0, 0.0));
    let v = visual_for(0.0, ScrollDirection::Down, AnimationKind::RightFade);
    assert_eq!((v.offset_x, v.offset_y), (50.0, 0.0));
    let v = visual_for(0.0, ScrollDirection::Down, AnimationKind::Default);
    assert_eq!((v.offset_x, v.offset_y), (0.0, 30.0));

    // Half way through the entry window the offset has half decayed
    let v = visual_for(15.0, ScrollDirection::Down, AnimationKind::UpFade);
    assert!((v.offset_y - 25.0).abs() < 1e-4);
}

#[test]
fn per_kind_exit_offsets() {
    let v = visual_for(100.0, ScrollDirection::Up, AnimationKind::UpFade);
    assert_eq!((v.offset_x, v.offset_y), (0.0, 50.0));
    let v = visual_for(100.0, ScrollDirection::Up, AnimationKind::LeftFade);
    assert_eq!((v.offset_x, v.offset_y), (-50.0, 0.0));
    let v = visual_for(100.0, ScrollDirection::Up, AnimationKind::RightFade);
    assert_eq!((v.offset_x, v.offset_y), (50.0, 0.0));
    let v = visual_for(100.0, ScrollDirection::Up, AnimationKind::Default);
    assert_eq!((v.offset_x, v.offset_y), (0.0, 30.0));

    // Below the exit window the element sits at rest
    let v = visual_for(69.9, ScrollDirection::Up, AnimationKind::RightFade);
    assert_eq!((v.offset_x, v.offset_y), (0.0, 0.0));
}

#[test]
fn schedules_are_asymmetric_between_directions() {
    // Going down at 25% the element is fully opaque; going up at the mirror
    // point (75%) it is too, but at 90% up it is half faded while 90% down
    // stays opaque. The asymmetry is intentional.
    assert_eq!(
        visual_for(25.0, ScrollDirection::Down, AnimationKind::Default).opacity,
        1.0
    );
    assert_eq!(
        visual_for(90.0, ScrollDirection::Down, AnimationKind::Default).opacity,
        1.0
    );
    let up = visual_for(90.0, ScrollDirection::Up, AnimationKind::Default);
    assert!((up.opacity - 0.5).abs() < 1e-4);
}

#[test]
fn mapping_is_idempotent() {
    for (p, dir, kind) in [
        (7.7, ScrollDirection::Down, AnimationKind::UpFade),
        (55.0, ScrollDirection::Up, AnimationKind::LeftFade),
        (95.0, ScrollDirection::Up, AnimationKind::Default),
    ] {
        assert_eq!(visual_for(p, dir, kind), visual_for(p, dir, kind));
    }
}

#[test]
fn underline_ramps_down_and_resets_up() {
    assert_eq!(underline_width(50.0, ScrollDirection::Down), None);
    assert_eq!(underline_width(75.0, ScrollDirection::Down), Some(50.0));
    assert_eq!(underline_width(100.0, ScrollDirection::Down), Some(100.0));
    assert_eq!(underline_width(49.0, ScrollDirection::Up), Some(0.0));
    assert_eq!(underline_width(60.0, ScrollDirection::Up), None);
}

#[test]
fn text_in_view_has_hysteresis() {
    // Down threshold and up threshold must never coincide
    assert!(site_core::constants::IN_VIEW_DOWN_PCT < site_core::constants::IN_VIEW_UP_PCT);

    assert!(!text_in_view(10.0, ScrollDirection::Down));
    assert!(text_in_view(10.1, ScrollDirection::Down));
    assert!(text_in_view(50.0, ScrollDirection::Down));

    // Having been in view, the block stays in view on the way up until 90%
    assert!(text_in_view(50.0, ScrollDirection::Up));
    assert!(text_in_view(89.9, ScrollDirection::Up));
    assert!(!text_in_view(90.0, ScrollDirection::Up));
}

#[test]
fn direction_updates_only_on_movement() {
    let d = ScrollDirection::Down;
    assert_eq!(d.update(100.0, 150.0), ScrollDirection::Down);
    assert_eq!(d.update(150.0, 100.0), ScrollDirection::Up);
    assert_eq!(ScrollDirection::Up.update(100.0, 100.0), ScrollDirection::Up);
    assert_eq!(
        ScrollDirection::Down.update(100.0, 100.0),
        ScrollDirection::Down
    );
}

#[test]
fn animation_kind_marker_parsing_is_closed() {
    assert_eq!(AnimationKind::from_marker("fadeInUp"), AnimationKind::UpFade);
    assert_eq!(
        AnimationKind::from_marker("fadeInLeft"),
        AnimationKind::LeftFade
    );
    assert_eq!(
        AnimationKind::from_marker("fadeInRight"),
        AnimationKind::RightFade
    );
    assert_eq!(AnimationKind::from_marker(""), AnimationKind::Default);
    assert_eq!(
        AnimationKind::from_marker("spinWildly"),
        AnimationKind::Default
    );
}

#[derive(Default)]
struct RecordingTarget {
    opacity: Option<f32>,
    offset: Option<(f32, f32)>,
    custom: Vec<(String, f32)>,
    classes: Vec<(String, bool)>,
}

impl RenderTarget for RecordingTarget {
    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = Some(opacity);
    }
    fn set_offset(&mut self, x_px: f32, y_px: f32) {
        self.offset = Some((x_px, y_px));
    }
    fn set_custom_property(&mut self, name: &str, value_px: f32) {
        self.custom.push((name.to_string(), value_px));
    }
    fn set_class(&mut self, name: &str, member: bool) {
        self.classes.push((name.to_string(), member));
    }
}

#[test]
fn apply_element_writes_all_channels() {
    let mut target = RecordingTarget::default();
    let v = apply_element(
        &mut target,
        80.0,
        ScrollDirection::Down,
        AnimationKind::UpFade,
        true,
    );
    assert_eq!(target.opacity, Some(1.0));
    assert_eq!(target.offset, Some((0.0, 0.0)));
    assert_eq!(target.classes, vec![("scroll-active".to_string(), true)]);
    assert_eq!(target.custom, vec![("--underline-width".to_string(), 60.0)]);
    assert!(v.is_active());
}

#[test]
fn apply_text_block_toggles_paired_classes() {
    let mut target = RecordingTarget::default();
    apply_text_block(&mut target, 5.0, ScrollDirection::Down);
    assert_eq!(
        target.classes,
        vec![
            ("in-view".to_string(), false),
            ("out-view".to_string(), true)
        ]
    );
}
