pub mod constants;
pub mod mesh;
pub mod model;
pub mod scroll;
pub mod starfield;
pub mod underwater;
pub mod visibility;

pub use mesh::{Mesh, MeshError};
pub use model::{hero_pose, HeroModel, HeroPose, LoadEvent};
pub use scroll::{
    section_progress, text_in_view, underline_width, visual_for, AnimationKind, ElementVisual,
    RenderTarget, ScrollContext, ScrollDirection, SectionBounds,
};
pub use starfield::{StarField, StarInstance};
pub use underwater::{SpriteInstance, UnderwaterSim};
pub use visibility::{fallback_view_state, ViewState};
