use crate::foundation::core::{Axis, Direction, Rect};

/// Measured size and position of one rendered slide, along the scroll
/// axis of a [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideGeometry {
    /// Slide size along the scroll axis, in pixels.
    pub extent: f64,
    /// Distance from the container's leading edge to this slide's
    /// trailing edge, in the direction of travel.
    pub ending_edge: f64,
}

/// One measurement pass over a rendered strip.
///
/// Produced once per mount (or explicit re-measure); planning and
/// scheduling derive everything else from this snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeasuredStrip {
    /// Container size along the scroll axis.
    pub container_extent: f64,
    /// Span from the first slide's leading edge to the last slide's
    /// trailing edge. A single span, not a sum of slide extents, so
    /// gaps and margins between slides are included.
    pub content_extent: f64,
    /// Per-slide geometry, in render order.
    pub slides: Vec<SlideGeometry>,
}

impl MeasuredStrip {
    /// Zero-valued measurement used when geometry is not yet available.
    pub fn unavailable() -> Self {
        Self {
            container_extent: 0.0,
            content_extent: 0.0,
            slides: Vec::new(),
        }
    }

    /// Whether this measurement can drive animation setup.
    ///
    /// Callers skip planning and scheduling while this is false and try
    /// again after a later measurement succeeds.
    pub fn is_ready(&self) -> bool {
        !self.slides.is_empty() && self.content_extent > 0.0 && self.container_extent > 0.0
    }
}

/// Distance from `start`'s leading edge to `end`'s trailing edge, where
/// "leading" and "trailing" are taken in the direction of travel.
fn span_between_edges(direction: Direction, start: Rect, end: Rect) -> f64 {
    match direction {
        Direction::Left => end.x1 - start.x0,
        Direction::Right => start.x1 - end.x0,
        Direction::Up => end.y1 - start.y0,
        Direction::Down => start.y1 - end.y0,
    }
}

fn extent_along(axis: Axis, rect: Rect) -> f64 {
    match axis {
        Axis::Horizontal => rect.width(),
        Axis::Vertical => rect.height(),
    }
}

/// Measure a rendered strip: container extent, single-span content
/// extent, and each slide's ending edge along the travel direction.
///
/// Pure measurement, no policy. If `slides` is empty (container or
/// children not laid out yet) the result is zero-valued rather than an
/// error; see [`MeasuredStrip::is_ready`].
pub fn measure(container: Rect, slides: &[Rect], direction: Direction) -> MeasuredStrip {
    let (Some(first), Some(last)) = (slides.first(), slides.last()) else {
        return MeasuredStrip::unavailable();
    };

    let axis = direction.axis();
    let content_extent = span_between_edges(direction, *first, *last);
    let slide_geometry = slides
        .iter()
        .map(|rect| SlideGeometry {
            extent: extent_along(axis, *rect),
            ending_edge: span_between_edges(direction, container, *rect),
        })
        .collect();

    MeasuredStrip {
        container_extent: extent_along(axis, container),
        content_extent,
        slides: slide_geometry,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/measure.rs"]
mod tests;
