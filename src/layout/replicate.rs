use crate::geometry::measure::MeasuredStrip;

/// The planner's output: the expanded slide sequence and the cumulative
/// ending edge of every slide instance (originals and replicas).
///
/// Slides are opaque to the engine; identity is position in the
/// expanded sequence, and `slide_edges[i]` belongs to `slides[i]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReplicationPlan<T> {
    /// Original slides followed by zero or more full copies of the
    /// sequence.
    pub slides: Vec<T>,
    /// Ending edge per expanded slide; replicas inherit the original
    /// relative spacing shifted by whole content-extent multiples.
    pub slide_edges: Vec<f64>,
    /// Total extent of the expanded strip. Always >= the container
    /// extent once planning has run on ready geometry.
    pub effective_content_extent: f64,
}

impl<T> ReplicationPlan<T> {
    /// An empty plan: zero slides, nothing to render or animate.
    pub fn empty() -> Self {
        Self {
            slides: Vec::new(),
            slide_edges: Vec::new(),
            effective_content_extent: 0.0,
        }
    }
}

/// Rotate the slide sequence so rendering starts at `initial_index`.
///
/// A 4-slide sequence with `initial_index` 2 becomes `[2, 3, 0, 1]`.
/// An index of 0 or one past the end leaves the order unchanged (an
/// out-of-range start has nothing to rotate to). Applied before
/// measurement, so all downstream geometry sees the rotated order.
pub fn rotate_initial<T>(initial_index: usize, mut slides: Vec<T>) -> Vec<T> {
    if initial_index == 0 || initial_index >= slides.len() {
        return slides;
    }
    slides.rotate_left(initial_index);
    slides
}

/// Decide how many full copies of the slide sequence keep the strip
/// gap-free through a loop, and compute every instance's ending edge.
///
/// Replication triggers when removing any single slide's extent would
/// leave less than a container's worth of coverage: while that slide is
/// mid-exit the remaining content must still fill the viewport. When a
/// single pass is shorter than the container, enough whole passes are
/// appended to cover it, plus one extra for loop safety.
///
/// `slides.len()` must equal `measured.slides.len()`; extra entries on
/// either side are ignored. Degenerate input (zero content extent, no
/// slides) returns the sequence unreplicated.
pub fn plan<T: Clone>(measured: &MeasuredStrip, slides: &[T]) -> ReplicationPlan<T> {
    if slides.is_empty() {
        return ReplicationPlan::empty();
    }

    let content_extent = measured.content_extent;
    let mut expanded: Vec<T> = slides.to_vec();
    let mut slide_edges: Vec<f64> = Vec::with_capacity(measured.slides.len());
    let mut needs_replication = false;

    for geometry in &measured.slides {
        slide_edges.push(geometry.ending_edge);
        needs_replication |= content_extent - geometry.extent < measured.container_extent;
    }

    let mut effective_content_extent = content_extent;
    if needs_replication && content_extent > 0.0 {
        let replication_count = if content_extent > measured.container_extent {
            1
        } else {
            (measured.container_extent / content_extent).floor() as usize + 1
        };

        let original_count = measured.slides.len().min(slides.len());
        for i in 1..=replication_count {
            expanded.extend_from_slice(slides);

            let offset = content_extent * i as f64;
            for j in 0..original_count {
                slide_edges.push(slide_edges[j] + offset);
            }
        }

        effective_content_extent = (replication_count + 1) as f64 * content_extent;
    }

    ReplicationPlan {
        slides: expanded,
        slide_edges,
        effective_content_extent,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/replicate.rs"]
mod tests;
