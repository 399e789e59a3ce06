//! Fallback visibility detector for elements above the tracked sections.
//!
//! Driven by IntersectionObserver ratio notifications rather than section
//! progress; this state machine never overlaps with the scroll-progress
//! animator's elements.

use crate::constants::OBSERVER_IN_VIEW_RATIO;
use crate::scroll::ScrollDirection;

/// Class state for an observed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// `in-view` set, `out-view` removed.
    In,
    /// `out-view` set, `in-view` removed.
    Out,
    /// Both classes removed.
    Cleared,
}

/// Decide the class state from an intersection notification.
///
/// Leaving the viewport downward only clears the entry state; leaving it
/// upward marks the element fully out so its exit styling applies.
pub fn fallback_view_state(
    ratio: f64,
    intersecting: bool,
    direction: ScrollDirection,
) -> Option<ViewState> {
    if intersecting && ratio > OBSERVER_IN_VIEW_RATIO {
        Some(ViewState::In)
    } else if ratio < OBSERVER_IN_VIEW_RATIO {
        match direction {
            ScrollDirection::Up => Some(ViewState::Out),
            ScrollDirection::Down => Some(ViewState::Cleared),
        }
    } else {
        None
    }
}
