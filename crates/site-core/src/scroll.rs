//! Scroll-progress animation: maps a page scroll offset to per-element
//! visual parameters.
//!
//! The mapping is a pure function of (progress, direction, kind); the DOM
//! side only reads layout and writes styles. The down/up schedules are
//! intentionally asymmetric (fade-in over the first 20% going down, fade-out
//! over the last 20% going up) so reversing direction does not simply rewind
//! the forward animation; keep them distinct.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    Down,
    Up,
}

impl ScrollDirection {
    /// Derive the direction from consecutive scroll offsets; an unchanged
    /// offset keeps the previous direction.
    pub fn update(self, last_y: f32, current_y: f32) -> Self {
        if current_y > last_y {
            ScrollDirection::Down
        } else if current_y < last_y {
            ScrollDirection::Up
        } else {
            self
        }
    }
}

/// Live layout of a tracked section, recomputed on every scroll/resize event.
#[derive(Clone, Copy, Debug)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

/// Per-event scroll state threaded through each animator invocation.
#[derive(Clone, Copy, Debug)]
pub struct ScrollContext {
    pub scroll_y: f32,
    pub viewport_h: f32,
    pub direction: ScrollDirection,
}

/// Progress in [0,100] of the viewport through a section's visibility range.
///
/// The range opens when the section top enters the viewport from below and
/// closes when the section has fully scrolled past, so the same scale applies
/// to sections of any height. A collapsed range counts as fully passed.
pub fn section_progress(ctx: &ScrollContext, bounds: &SectionBounds) -> f32 {
    let start = bounds.top - ctx.viewport_h;
    let end = bounds.top + bounds.height;
    let range = end - start;
    if range <= 0.0 {
        return 100.0;
    }
    ((ctx.scroll_y - start) / range).clamp(0.0, 1.0) * 100.0
}

/// Closed set of entry animations selected by the `data-scroll-call` marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationKind {
    UpFade,
    LeftFade,
    RightFade,
    #[default]
    Default,
}

impl AnimationKind {
    pub fn from_marker(value: &str) -> Self {
        match value {
            "fadeInUp" => AnimationKind::UpFade,
            "fadeInLeft" => AnimationKind::LeftFade,
            "fadeInRight" => AnimationKind::RightFade,
            _ => AnimationKind::Default,
        }
    }
}

/// Computed visual parameters for one animated element.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ElementVisual {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ElementVisual {
    /// An element counts as active once it is meaningfully visible.
    pub fn is_active(&self) -> bool {
        self.opacity > SCROLL_ACTIVE_MIN_OPACITY
    }
}

fn kind_offset(kind: AnimationKind, ramp: f32) -> (f32, f32) {
    match kind {
        AnimationKind::UpFade => (0.0, ramp * OFFSET_PX),
        AnimationKind::LeftFade => (ramp * -OFFSET_PX, 0.0),
        AnimationKind::RightFade => (ramp * OFFSET_PX, 0.0),
        AnimationKind::Default => (0.0, ramp * OFFSET_DEFAULT_PX),
    }
}

/// The direction-dependent piecewise schedule.
pub fn visual_for(progress: f32, direction: ScrollDirection, kind: AnimationKind) -> ElementVisual {
    let p = progress.clamp(0.0, 100.0);
    let (opacity, ramp) = match direction {
        ScrollDirection::Down => {
            let opacity = (p / FADE_WINDOW_PCT).min(1.0);
            // Entry offset decays to zero over the first 30%
            let ramp = if p <= OFFSET_WINDOW_PCT {
                1.0 - p / OFFSET_WINDOW_PCT
            } else {
                0.0
            };
            (opacity, ramp)
        }
        ScrollDirection::Up => {
            let opacity = ((100.0 - p) / FADE_WINDOW_PCT).min(1.0);
            // Exit offset grows from zero over the last 30%
            let ramp = if p >= 100.0 - OFFSET_WINDOW_PCT {
                (p - (100.0 - OFFSET_WINDOW_PCT)) / OFFSET_WINDOW_PCT
            } else {
                0.0
            };
            (opacity, ramp)
        }
    };
    let (offset_x, offset_y) = kind_offset(kind, ramp);
    ElementVisual {
        opacity: opacity.clamp(0.0, 1.0),
        offset_x,
        offset_y,
    }
}

/// Decorative underline width for section titles.
///
/// Ramps 0..100 px across the second half of the section going down; going up
/// it resets once progress drops below the midpoint. `None` leaves the custom
/// property untouched.
pub fn underline_width(progress: f32, direction: ScrollDirection) -> Option<f32> {
    match direction {
        ScrollDirection::Down if progress > UNDERLINE_START_PCT => {
            let ramp = (progress - UNDERLINE_START_PCT) / (100.0 - UNDERLINE_START_PCT);
            Some(ramp.clamp(0.0, 1.0) * UNDERLINE_MAX_PX)
        }
        ScrollDirection::Up if progress < UNDERLINE_START_PCT => Some(0.0),
        _ => None,
    }
}

/// In-view toggle for paragraph containers, with hysteresis: the down and up
/// thresholds differ so the class does not flicker around a single midpoint.
pub fn text_in_view(progress: f32, direction: ScrollDirection) -> bool {
    match direction {
        ScrollDirection::Down => progress > IN_VIEW_DOWN_PCT,
        ScrollDirection::Up => progress < IN_VIEW_UP_PCT,
    }
}

/// Host-independent sink for computed visuals; the web crate implements this
/// over DOM element styles so the mapping itself needs no browser to test.
pub trait RenderTarget {
    fn set_opacity(&mut self, opacity: f32);
    fn set_offset(&mut self, x_px: f32, y_px: f32);
    fn set_custom_property(&mut self, name: &str, value_px: f32);
    fn set_class(&mut self, name: &str, member: bool);
}

/// Apply the full schedule for one element to a render target.
pub fn apply_element(
    target: &mut impl RenderTarget,
    progress: f32,
    direction: ScrollDirection,
    kind: AnimationKind,
    is_title: bool,
) -> ElementVisual {
    let visual = visual_for(progress, direction, kind);
    target.set_opacity(visual.opacity);
    target.set_offset(visual.offset_x, visual.offset_y);
    target.set_class("scroll-active", visual.is_active());
    if is_title {
        if let Some(width) = underline_width(progress, direction) {
            target.set_custom_property("--underline-width", width);
        }
    }
    visual
}

/// Apply the paragraph-container in-view classes to a render target.
pub fn apply_text_block(target: &mut impl RenderTarget, progress: f32, direction: ScrollDirection) {
    let in_view = text_in_view(progress, direction);
    target.set_class("in-view", in_view);
    target.set_class("out-view", !in_view);
}
