use site_core::scroll::ScrollDirection;
use site_core::visibility::{fallback_view_state, ViewState};

#[test]
fn entering_the_viewport_sets_in_view() {
    for dir in [ScrollDirection::Down, ScrollDirection::Up] {
        assert_eq!(fallback_view_state(0.5, true, dir), Some(ViewState::In));
        assert_eq!(fallback_view_state(0.11, true, dir), Some(ViewState::In));
    }
}

#[test]
fn leaving_upward_marks_out_leaving_downward_clears() {
    assert_eq!(
        fallback_view_state(0.05, false, ScrollDirection::Up),
        Some(ViewState::Out)
    );
    assert_eq!(
        fallback_view_state(0.05, false, ScrollDirection::Down),
        Some(ViewState::Cleared)
    );
}

#[test]
fn boundary_ratio_makes_no_change() {
    // Exactly at the cutoff neither branch fires
    for dir in [ScrollDirection::Down, ScrollDirection::Up] {
        assert_eq!(fallback_view_state(0.1, false, dir), None);
        assert_eq!(fallback_view_state(0.1, true, dir), None);
    }
}

#[test]
fn intersecting_below_cutoff_still_counts_as_leaving() {
    assert_eq!(
        fallback_view_state(0.05, true, ScrollDirection::Up),
        Some(ViewState::Out)
    );
}

#[test]
fn observer_thresholds_bracket_the_cutoff() {
    let t = site_core::constants::OBSERVER_THRESHOLDS;
    assert_eq!(t.len(), 4);
    assert!(t.windows(2).all(|w| w[0] < w[1]));
    assert!(t.contains(&site_core::constants::OBSERVER_IN_VIEW_RATIO));
}
