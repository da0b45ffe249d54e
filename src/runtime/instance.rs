use crate::animation::schedule::{SlideAnimation, schedule};
use crate::config::options::MarqueeOptions;
use crate::emit::style;
use crate::foundation::core::{Axis, FrameRotation, MarqueeId, Rect, ResolvedFrame};
use crate::foundation::error::MarqueeResult;
use crate::geometry::measure::measure;
use crate::layout::replicate::{ReplicationPlan, plan};
use crate::runtime::play_state::{PlayState, PlayStateHandle};

/// Outcome of a mount. None of these are errors; the host decides what
/// to render for each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MarqueeState {
    /// Geometry was ready; the strip is replicated and scheduled.
    Animated,
    /// Geometry unavailable or degenerate; slides render unanimated
    /// until a remount with usable geometry.
    Static,
    /// No slides were supplied; render nothing.
    Empty,
}

/// Everything the style-emitter collaborator needs for one expanded
/// slide: index, translation axis, static rotation, and the scheduled
/// two-phase animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideBinding {
    /// Index into the expanded slide sequence.
    pub slide_index: usize,
    /// Translation axis resolved from the direction.
    pub axis: Axis,
    /// Static frame rotation, applied once, never animated.
    pub rotation: Option<FrameRotation>,
    /// Scheduled animation for this slide.
    pub animation: SlideAnimation,
}

/// One mounted marquee: the immutable result of running the pipeline
/// (resolve, measure, plan, schedule) exactly once.
///
/// The instance owns its play-state registry entry; dropping the
/// instance releases it. Re-measuring requires a fresh mount, the
/// engine never re-runs layout mid-loop.
#[derive(Debug)]
pub struct Marquee<T> {
    id: MarqueeId,
    options: MarqueeOptions,
    frame: ResolvedFrame,
    state: MarqueeState,
    plan: ReplicationPlan<T>,
    animations: Vec<SlideAnimation>,
    play: PlayStateHandle,
}

impl<T: Clone> Marquee<T> {
    /// Run the pipeline once over a rendered strip.
    ///
    /// `slides` and `slide_rects` must be in the same (already rotated,
    /// see [`crate::rotate_initial`]) render order. Fails only on
    /// contract violations in `options`; missing or degenerate geometry
    /// mounts as [`MarqueeState::Static`], zero slides as
    /// [`MarqueeState::Empty`].
    #[tracing::instrument(skip(slides, slide_rects), fields(slide_count = slides.len()))]
    pub fn mount(
        options: MarqueeOptions,
        slides: Vec<T>,
        container: Rect,
        slide_rects: &[Rect],
    ) -> MarqueeResult<Self> {
        options.validate()?;

        let id = MarqueeId::generate();
        let frame = options.direction.resolve();
        let play = PlayStateHandle::acquire(&id, PlayState::from_playing(options.play));

        let (state, plan, animations) = if slides.is_empty() {
            (MarqueeState::Empty, ReplicationPlan::empty(), Vec::new())
        } else {
            let measured = measure(container, slide_rects, options.direction);
            if measured.is_ready() {
                let plan = plan(&measured, &slides);
                let animations = schedule(
                    &plan.slide_edges,
                    plan.effective_content_extent,
                    options.speed,
                );
                (MarqueeState::Animated, plan, animations)
            } else {
                let static_plan = ReplicationPlan {
                    slides,
                    slide_edges: Vec::new(),
                    effective_content_extent: measured.content_extent,
                };
                (MarqueeState::Static, static_plan, Vec::new())
            }
        };

        Ok(Self {
            id,
            options,
            frame,
            state,
            plan,
            animations,
            play,
        })
    }
}

impl<T> Marquee<T> {
    /// Unique id of this instance.
    pub fn id(&self) -> &MarqueeId {
        &self.id
    }

    /// Options the instance was mounted with.
    pub fn options(&self) -> &MarqueeOptions {
        &self.options
    }

    /// Resolved direction frame.
    pub fn frame(&self) -> &ResolvedFrame {
        &self.frame
    }

    /// How the mount turned out.
    pub fn state(&self) -> MarqueeState {
        self.state
    }

    /// Slides to render, in expanded order (originals plus replicas).
    pub fn slides(&self) -> &[T] {
        &self.plan.slides
    }

    /// The replication plan behind this instance.
    pub fn plan(&self) -> &ReplicationPlan<T> {
        &self.plan
    }

    /// Scheduled animations, one per expanded slide. Empty unless the
    /// instance is [`MarqueeState::Animated`].
    pub fn animations(&self) -> &[SlideAnimation] {
        &self.animations
    }

    /// Per-slide tuples for the style-emitter collaborator.
    pub fn bindings(&self) -> Vec<SlideBinding> {
        self.animations
            .iter()
            .enumerate()
            .map(|(slide_index, animation)| SlideBinding {
                slide_index,
                axis: self.frame.axis,
                rotation: self.frame.rotation,
                animation: *animation,
            })
            .collect()
    }

    /// Class name grouping this instance's slides.
    pub fn wrapper_class(&self) -> String {
        style::wrapper_class_name(&self.id)
    }

    /// Materialize the full rule list for a stylesheet host: the
    /// play-state seed rule, the optional hover-pause rule, and the
    /// keyframe/binding rules for every scheduled slide. Empty when
    /// there is nothing to render.
    pub fn stylesheet(&self) -> Vec<String> {
        if self.state == MarqueeState::Empty {
            return Vec::new();
        }

        let mut rules = vec![style::play_state_rule(&self.id, self.play.get())];
        if self.options.pause_on_hover {
            rules.push(style::hover_pause_rule(&self.id));
        }
        for (slide_index, animation) in self.animations.iter().enumerate() {
            rules.extend(style::slide_rules(
                &self.id,
                slide_index,
                &self.frame,
                animation,
            ));
        }
        rules
    }

    /// Whether the instance is currently running.
    pub fn is_playing(&self) -> bool {
        self.play.get() == PlayState::Running
    }

    /// Toggle play state: one idempotent registry write, no
    /// re-measurement, no re-planning.
    pub fn set_playing(&self, playing: bool) {
        self.play.set(PlayState::from_playing(playing));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/instance.rs"]
mod tests;
