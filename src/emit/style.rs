//! CSS materialization of scheduler output.
//!
//! Hosts that speak stylesheets can take these rule strings verbatim;
//! nothing here re-derives a numeric value, it only formats what the
//! planner and scheduler produced. Inserting the rules into a document
//! (and removing them on teardown) is the host's job.

use std::fmt::Write as _;

use crate::animation::schedule::{IterationCount, SlideAnimation};
use crate::foundation::core::{Axis, FrameRotation, MarqueeId, ResolvedFrame, RotationAxis};
use crate::runtime::play_state::PlayState;

/// Class name grouping all slides of one marquee instance.
pub fn wrapper_class_name(id: &MarqueeId) -> String {
    format!("{id}_wrapper")
}

/// CSS custom property carrying the instance's play state.
pub fn play_state_variable(id: &MarqueeId) -> String {
    format!("--{id}_play_state")
}

/// CSS transform function for the resolved axis.
pub fn translate_prop(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "translateX",
        Axis::Vertical => "translateY",
    }
}

/// Static rotation fragment, empty for the canonical directions.
pub fn rotation_css(rotation: Option<FrameRotation>) -> String {
    match rotation {
        None => String::new(),
        Some(FrameRotation { axis, degrees }) => {
            let prop = match axis {
                RotationAxis::X => "rotateX",
                RotationAxis::Y => "rotateY",
            };
            format!("{prop}({degrees}deg)")
        }
    }
}

/// `:root` rule seeding the play-state custom property.
pub fn play_state_rule(id: &MarqueeId, state: PlayState) -> String {
    format!(
        ":root {{ {}: {}; }}",
        play_state_variable(id),
        state.css_value()
    )
}

/// Hover rule flipping the play-state property to `paused`.
pub fn hover_pause_rule(id: &MarqueeId) -> String {
    format!(
        ".{}:hover {{ {}: paused; }}",
        wrapper_class_name(id),
        play_state_variable(id)
    )
}

fn transform_value(frame: &ResolvedFrame, offset: f64) -> String {
    let translate = translate_prop(frame.axis);
    let rotation = rotation_css(frame.rotation);
    if rotation.is_empty() {
        format!("{translate}({offset}px)")
    } else {
        format!("{translate}({offset}px) {rotation}")
    }
}

fn iteration_css(iteration: IterationCount) -> &'static str {
    match iteration {
        IterationCount::Once => "1",
        IterationCount::Infinite => "infinite",
    }
}

/// Keyframe and binding rules for one expanded slide.
///
/// Emits one `@keyframes` rule per phase plus a single binding rule
/// attaching both phases (chained by delay) and the play-state variable
/// to the `slide_index`-th child of the wrapper.
pub fn slide_rules(
    id: &MarqueeId,
    slide_index: usize,
    frame: &ResolvedFrame,
    animation: &SlideAnimation,
) -> Vec<String> {
    let mut rules = Vec::with_capacity(3);
    let mut shorthand = String::new();

    for (phase_index, phase) in animation.phases().iter().enumerate() {
        let keyframe_id = format!("{id}_keyframe_slide{slide_index}_{phase_index}");

        rules.push(format!(
            "@keyframes {keyframe_id} {{ 0% {{ transform: {}; }} 100% {{ transform: {}; }} }}",
            transform_value(frame, phase.start_offset),
            transform_value(frame, phase.end_offset),
        ));

        if phase_index > 0 {
            shorthand.push_str(", ");
        }
        // Infallible: writing into a String cannot fail.
        let _ = write!(
            shorthand,
            "{}ms linear {}ms {} {keyframe_id}",
            phase.duration_ms,
            phase.delay_ms,
            iteration_css(phase.iteration),
        );
    }

    rules.push(format!(
        ".{} > :nth-child({}) {{ animation: {shorthand}; animation-play-state: var({}); }}",
        wrapper_class_name(id),
        slide_index + 1,
        play_state_variable(id),
    ));

    rules
}

#[cfg(test)]
#[path = "../../tests/unit/emit/style.rs"]
mod tests;
