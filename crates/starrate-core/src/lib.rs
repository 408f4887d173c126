//! Starrate Core Library
//!
//! Toolkit-agnostic model for the star rating widget: configuration,
//! partitioning of a score into star units, the render tree description
//! and the geometry needed to paint it.

pub mod config;
pub mod error;
pub mod geometry;
pub mod partition;
pub mod view;
pub mod widget;

pub use config::{Annotation, RangePolicy, RatingConfig, DEFAULT_ICON_SIZE, DEFAULT_MAX_STARS};
pub use error::{RatingError, RatingResult};
pub use geometry::{clip_bounds, star_outline, RowLayout};
pub use partition::{partition, run_limit, StarFill, StarUnit};
pub use view::{render, ClipRect, Node, RatingView, StarNode, TextRole, Tone};
pub use widget::RatingWidget;
