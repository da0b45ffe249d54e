use crate::foundation::core::{Direction, Speed};
use crate::foundation::error::{MarqueeError, MarqueeResult};

/// Configuration bundle for one marquee instance.
///
/// Every field has a default, so hosts can supply partial JSON (camelCase
/// keys, matching the wire shape hosts already use):
///
/// ```
/// use marquee::MarqueeOptions;
///
/// let options = MarqueeOptions::from_json_str(r#"{ "direction": "up", "speed": 80 }"#).unwrap();
/// assert!(options.play);
/// assert_eq!(options.initial_slide_index, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarqueeOptions {
    /// Scroll direction, defaults to [`Direction::Left`].
    #[serde(default)]
    pub direction: Direction,
    /// Travel speed, defaults to 50 px/s.
    #[serde(default)]
    pub speed: Speed,
    /// Initial play state written to the registry at mount.
    #[serde(default = "default_play")]
    pub play: bool,
    /// Emit a hover rule that pauses the instance while hovered.
    #[serde(default)]
    pub pause_on_hover: bool,
    /// Rotation offset into the slide sequence applied before
    /// measurement; see [`crate::rotate_initial`].
    #[serde(default)]
    pub initial_slide_index: usize,
}

fn default_play() -> bool {
    true
}

impl Default for MarqueeOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            speed: Speed::default(),
            play: true,
            pause_on_hover: false,
            initial_slide_index: 0,
        }
    }
}

impl MarqueeOptions {
    /// Check the illegal-argument contract (speed must be finite and
    /// positive). Recoverable runtime conditions are not validated
    /// here; they degrade at mount instead.
    pub fn validate(&self) -> MarqueeResult<()> {
        Speed::new(self.speed.px_per_sec)?;
        Ok(())
    }

    /// Parse and validate options from a JSON document.
    pub fn from_json_str(json: &str) -> MarqueeResult<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| MarqueeError::serde(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
