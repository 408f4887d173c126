//! The rating widget: a validated configuration plus a change callback.

use std::fmt;

use crate::config::RatingConfig;
use crate::error::RatingResult;
use crate::view::{render, RatingView};

type ChangeCallback = Box<dyn FnMut(u32)>;

/// Stateless star rating component.
///
/// The host owns the current rating. It calls [`RatingWidget::render`] with
/// that value each frame and routes clicks on star icons through
/// [`RatingWidget::activate`], which reports the chosen value back.
pub struct RatingWidget {
    config: RatingConfig,
    on_change: Option<ChangeCallback>,
}

impl RatingWidget {
    /// Create a widget, rejecting configurations that cannot be rendered.
    pub fn new(config: RatingConfig) -> RatingResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            on_change: None,
        })
    }

    /// Set the callback invoked with the activated star value.
    pub fn on_change(mut self, callback: impl FnMut(u32) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Build the render tree for `rating`.
    pub fn render(&self, rating: f64) -> RatingResult<RatingView> {
        render(rating, &self.config)
    }

    /// Handle activation of the star tagged `ordinal`.
    ///
    /// Returns the new rating when the widget is interactive and `ordinal`
    /// names one of its stars, invoking the change callback once if set.
    /// Display-only widgets ignore activations.
    pub fn activate(&mut self, ordinal: i64) -> Option<u32> {
        if !self.config.interactive {
            return None;
        }
        let value = match u32::try_from(ordinal) {
            Ok(v) if (1..=self.config.max_stars).contains(&v) => v,
            _ => {
                log::warn!(
                    "Ignoring activation of star {} outside 1..={}",
                    ordinal,
                    self.config.max_stars
                );
                return None;
            }
        };

        log::debug!("Star {} activated", value);
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
        Some(value)
    }
}

impl fmt::Debug for RatingWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingWidget")
            .field("config", &self.config)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
