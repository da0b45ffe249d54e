use crate::foundation::core::Speed;

/// How many times an [`AnimationPhase`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IterationCount {
    /// Exactly one pass.
    Once,
    /// Repeats until the owning instance is torn down.
    Infinite,
}

/// One declarative animation segment along the resolved axis.
///
/// Offsets are translation endpoints in pixels, in the canonical
/// (pre-rotation) frame. The engine never executes phases itself; it
/// hands them to the platform's animation runtime, which keeps
/// transition timing sample-accurate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationPhase {
    /// Translation at 0% progress.
    pub start_offset: f64,
    /// Translation at 100% progress.
    pub end_offset: f64,
    /// Delay before the phase starts, in milliseconds.
    pub delay_ms: u64,
    /// Duration of one pass, in milliseconds.
    pub duration_ms: u64,
    /// Number of passes.
    pub iteration: IterationCount,
}

/// The two-phase animation of one expanded slide.
///
/// The alignment phase runs once, moving the slide from its natural
/// resting position to its loop point; the steady phase then repeats a
/// translation of exactly one effective-content-extent span forever,
/// starting where alignment ended. The alignment end position and the
/// steady start position render identically, so the loop never jumps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideAnimation {
    /// Finite run-in segment from rest to the loop point.
    pub align: AnimationPhase,
    /// Infinite full-cycle segment, identical duration for all slides.
    pub steady: AnimationPhase,
}

impl SlideAnimation {
    /// Both phases in playback order.
    pub fn phases(&self) -> [AnimationPhase; 2] {
        [self.align, self.steady]
    }
}

/// Milliseconds to travel `distance` pixels at `speed`.
fn travel_ms(distance: f64, speed: Speed) -> u64 {
    (distance / speed.px_per_sec * 1000.0).round().max(0.0) as u64
}

/// Derive the two-phase animation for every expanded slide.
///
/// All slides share the same steady-state duration (one traversal of
/// `effective_content_extent` at `speed`), so they never drift out of
/// relative sync. Each slide's alignment duration is proportional to
/// its own ending edge: slides reach the loop point at different
/// absolute times, then enter an identical, already-synchronized cycle.
///
/// Pure and deterministic: identical inputs yield bit-identical output.
pub fn schedule(
    slide_edges: &[f64],
    effective_content_extent: f64,
    speed: Speed,
) -> Vec<SlideAnimation> {
    let steady_duration_ms = travel_ms(effective_content_extent, speed);

    slide_edges
        .iter()
        .map(|&ending_edge| {
            let align_duration_ms = travel_ms(ending_edge, speed);
            SlideAnimation {
                align: AnimationPhase {
                    start_offset: 0.0,
                    end_offset: -ending_edge,
                    delay_ms: 0,
                    duration_ms: align_duration_ms,
                    iteration: IterationCount::Once,
                },
                steady: AnimationPhase {
                    start_offset: effective_content_extent - ending_edge,
                    end_offset: -ending_edge,
                    delay_ms: align_duration_ms,
                    duration_ms: steady_duration_ms,
                    iteration: IterationCount::Infinite,
                },
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
