//! Display configuration for a rating widget.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RatingError, RatingResult};

/// Number of stars shown when none is configured.
pub const DEFAULT_MAX_STARS: u32 = 5;

/// Icon edge length in logical pixels when none is configured.
pub const DEFAULT_ICON_SIZE: f64 = 24.0;

/// Auxiliary text shown after the rating, such as a review count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Annotation {
    Number(f64),
    Text(String),
}

impl Annotation {
    /// Whether the annotation should be rendered at all.
    ///
    /// Zero, NaN and empty strings are treated as absent.
    pub fn is_shown(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Annotation {
    fn from(count: u64) -> Self {
        Self::Number(count as f64)
    }
}

impl From<f64> for Annotation {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Annotation {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Annotation {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// How ratings outside `[0, max_stars]` are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Partition the rating as given. Out-of-range values may produce more
    /// or fewer than `max_stars` units.
    #[default]
    Permissive,
    /// Clamp the rating into `[0, max_stars]` before partitioning.
    Clamp,
}

/// Configuration for a rating widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Total number of star units
    pub max_stars: u32,
    /// Icon edge length in logical pixels
    pub icon_size: f64,
    /// Whether stars react to activation
    pub interactive: bool,
    /// Optional trailing annotation (e.g. review count)
    pub annotation: Option<Annotation>,
    /// Optional prefix for the display-only caption
    pub caption: Option<String>,
    /// Out-of-range rating handling
    pub range_policy: RangePolicy,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            max_stars: DEFAULT_MAX_STARS,
            icon_size: DEFAULT_ICON_SIZE,
            interactive: false,
            annotation: None,
            caption: None,
            range_policy: RangePolicy::Permissive,
        }
    }
}

impl RatingConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of stars.
    pub fn with_max_stars(mut self, max_stars: u32) -> Self {
        self.max_stars = max_stars;
        self
    }

    /// Set the icon size.
    pub fn with_icon_size(mut self, icon_size: f64) -> Self {
        self.icon_size = icon_size;
        self
    }

    /// Set whether the stars are clickable.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Set the trailing annotation.
    pub fn with_annotation(mut self, annotation: impl Into<Annotation>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Set the caption prefix.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the range policy.
    pub fn with_range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    /// Check the configuration for values that cannot be rendered.
    pub fn validate(&self) -> RatingResult<()> {
        if !self.icon_size.is_finite() || self.icon_size <= 0.0 {
            return Err(RatingError::InvalidIconSize(self.icon_size));
        }
        Ok(())
    }

    /// The rating actually partitioned, after applying the range policy.
    pub fn effective_rating(&self, rating: f64) -> f64 {
        match self.range_policy {
            RangePolicy::Permissive => rating,
            RangePolicy::Clamp => rating.clamp(0.0, self.max_stars as f64),
        }
    }

    /// The annotation, if it should be displayed.
    pub fn visible_annotation(&self) -> Option<&Annotation> {
        self.annotation.as_ref().filter(|a| a.is_shown())
    }
}
