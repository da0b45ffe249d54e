//! Process-wide play-state registry.
//!
//! Each mounted instance owns exactly one entry, keyed by its id.
//! Toggling play is a single idempotent write; it never re-runs
//! measurement, planning or scheduling. Entries are removed when the
//! owning handle drops, on every exit path.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::foundation::core::MarqueeId;

/// Whether an instance's animations are running or paused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlayState {
    /// Animations advance.
    Running,
    /// Animations hold their current sample.
    Paused,
}

impl PlayState {
    /// Map a boolean "playing" flag to a state.
    pub fn from_playing(playing: bool) -> Self {
        if playing { Self::Running } else { Self::Paused }
    }

    /// Value for the `animation-play-state` CSS property.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

static REGISTRY: OnceLock<Mutex<HashMap<String, PlayState>>> = OnceLock::new();

fn registry() -> MutexGuard<'static, HashMap<String, PlayState>> {
    REGISTRY
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Current play state of the instance with the given id, if mounted.
pub fn play_state_of(id: &str) -> Option<PlayState> {
    registry().get(id).copied()
}

/// Owned registry entry for one instance.
///
/// Acquired at mount, released on drop. The owning instance is the only
/// writer; readers go through [`play_state_of`].
#[derive(Debug)]
pub(crate) struct PlayStateHandle {
    id: String,
}

impl PlayStateHandle {
    pub(crate) fn acquire(id: &MarqueeId, initial: PlayState) -> Self {
        registry().insert(id.as_str().to_owned(), initial);
        Self {
            id: id.as_str().to_owned(),
        }
    }

    pub(crate) fn set(&self, state: PlayState) {
        registry().insert(self.id.clone(), state);
    }

    pub(crate) fn get(&self) -> PlayState {
        registry().get(&self.id).copied().unwrap_or(PlayState::Paused)
    }
}

impl Drop for PlayStateHandle {
    fn drop(&mut self) {
        registry().remove(&self.id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/play_state.rs"]
mod tests;
