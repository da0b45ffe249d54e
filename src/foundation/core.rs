use crate::foundation::error::{MarqueeError, MarqueeResult};

pub use kurbo::{Point, Rect, Vec2};

/// Scroll direction of the marquee strip.
///
/// `Left` and `Right` scroll along the horizontal axis, `Up` and `Down`
/// along the vertical axis. The default is `Left`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Content travels toward the leading (left) edge.
    #[default]
    Left,
    /// Content travels toward the trailing (right) edge.
    Right,
    /// Content travels toward the top edge.
    Up,
    /// Content travels toward the bottom edge.
    Down,
}

/// Translation axis selected by a [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    /// Translate along x.
    Horizontal,
    /// Translate along y.
    Vertical,
}

/// Sign of travel along the resolved axis.
///
/// `Forward` is the canonical "leftward" motion the scheduler is written
/// in terms of; `Reverse` directions render the same motion under a
/// static 180-degree frame rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Travel {
    /// Canonical direction (left / up).
    Forward,
    /// Mirrored direction (right / down), realized via [`FrameRotation`].
    Reverse,
}

/// In-plane axis a [`FrameRotation`] rotates about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RotationAxis {
    /// Rotation about the horizontal in-plane axis (flips vertically).
    X,
    /// Rotation about the vertical in-plane axis (flips horizontally).
    Y,
}

/// Static coordinate-frame rotation applied once at style time.
///
/// The rotation is a constant transform, never animated; it lets every
/// downstream computation use a single canonical translation formula
/// regardless of direction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameRotation {
    /// Axis of rotation.
    pub axis: RotationAxis,
    /// Rotation angle in degrees.
    pub degrees: f64,
}

/// The result of resolving a [`Direction`]: which axis to translate
/// along, the travel sign, and the static frame rotation (if any).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedFrame {
    /// Translation axis.
    pub axis: Axis,
    /// Travel sign along the axis.
    pub travel: Travel,
    /// Static pre-rotation of the coordinate frame, `None` for the
    /// canonical directions.
    pub rotation: Option<FrameRotation>,
}

impl Direction {
    /// Resolve this direction into axis, travel sign and frame rotation.
    ///
    /// Reverse directions get a 180-degree rotation about the in-plane
    /// axis perpendicular to travel, so that the canonical "leftward"
    /// animation renders as rightward (or downward) motion.
    pub fn resolve(self) -> ResolvedFrame {
        match self {
            Self::Left => ResolvedFrame {
                axis: Axis::Horizontal,
                travel: Travel::Forward,
                rotation: None,
            },
            Self::Right => ResolvedFrame {
                axis: Axis::Horizontal,
                travel: Travel::Reverse,
                rotation: Some(FrameRotation {
                    axis: RotationAxis::Y,
                    degrees: 180.0,
                }),
            },
            Self::Up => ResolvedFrame {
                axis: Axis::Vertical,
                travel: Travel::Forward,
                rotation: None,
            },
            Self::Down => ResolvedFrame {
                axis: Axis::Vertical,
                travel: Travel::Reverse,
                rotation: Some(FrameRotation {
                    axis: RotationAxis::X,
                    degrees: 180.0,
                }),
            },
        }
    }

    /// Axis of this direction without resolving the full frame.
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }
}

/// Travel speed in pixels per second.
///
/// Serializes as a bare number so hosts can write `"speed": 80`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Speed {
    /// Pixels per second, must be finite and > 0.
    pub px_per_sec: f64,
}

impl Speed {
    /// Default travel speed, 50 px/s.
    pub const DEFAULT_PX_PER_SEC: f64 = 50.0;

    /// Build a validated speed.
    pub fn new(px_per_sec: f64) -> MarqueeResult<Self> {
        if !px_per_sec.is_finite() || px_per_sec <= 0.0 {
            return Err(MarqueeError::validation(
                "Speed must be a finite number > 0 px/s",
            ));
        }
        Ok(Self { px_per_sec })
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self {
            px_per_sec: Self::DEFAULT_PX_PER_SEC,
        }
    }
}

/// Unique identifier for one mounted marquee instance.
///
/// Ids seed generated CSS identifiers (wrapper class, custom property,
/// keyframe names) and key the global play-state registry, so they must
/// not collide across instances mounted in the same tick. Generation is
/// random (UUID v4), not a counter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MarqueeId(String);

impl MarqueeId {
    /// Generate a fresh collision-resistant id.
    pub fn generate() -> Self {
        Self(format!("marquee_{}", uuid::Uuid::new_v4().simple()))
    }

    /// Build an id from a caller-supplied name. The caller is then
    /// responsible for keeping names unique across live instances.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self(format!("marquee_{}", name.into()))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarqueeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
