//! Marquee is a layout and animation engine for seamless, infinitely
//! looping content strips.
//!
//! The engine turns one measurement of a rendered slide strip into a
//! static set of animation descriptors that a host (DOM, canvas, TUI)
//! can hand to its own animation runtime.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `Direction -> ResolvedFrame` (scroll axis, travel
//!    sign, static frame rotation)
//! 2. **Measure**: `container + slide rects -> MeasuredStrip` (content
//!    extent, per-slide ending edges)
//! 3. **Plan**: `MeasuredStrip + slides -> ReplicationPlan` (how many
//!    copies of the sequence keep the strip gap-free through a loop)
//! 4. **Schedule**: `slide edges + speed -> SlideAnimation` per slide
//!    (a finite alignment phase chained into an infinite steady-state
//!    cycle, all slides in lockstep)
//! 5. **Emit** (optional): CSS keyframe and binding rules for hosts
//!    that speak stylesheets
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Measure once**: all computation happens eagerly at mount; the
//!   engine performs no per-frame work and holds no timers.
//! - **Deterministic**: planning and scheduling are pure and stable for
//!   a given measurement.
//! - **Degradation over failure**: missing geometry, empty content and
//!   degenerate extents produce well-defined no-op results, never
//!   errors.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod emit;
mod foundation;
mod geometry;
mod layout;
mod runtime;

pub use animation::schedule::{AnimationPhase, IterationCount, SlideAnimation, schedule};
pub use config::options::MarqueeOptions;
pub use emit::style::{
    hover_pause_rule, play_state_rule, play_state_variable, rotation_css, slide_rules,
    translate_prop, wrapper_class_name,
};
pub use foundation::core::{
    Axis, Direction, FrameRotation, MarqueeId, Point, Rect, ResolvedFrame, RotationAxis, Speed,
    Travel, Vec2,
};
pub use foundation::error::{MarqueeError, MarqueeResult};
pub use geometry::measure::{MeasuredStrip, SlideGeometry, measure};
pub use layout::replicate::{ReplicationPlan, plan, rotate_initial};
pub use runtime::instance::{Marquee, MarqueeState, SlideBinding};
pub use runtime::play_state::{PlayState, play_state_of};
