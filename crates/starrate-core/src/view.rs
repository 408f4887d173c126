//! Render tree for a rating widget.
//!
//! [`render`] turns a rating and its configuration into a [`RatingView`]: a
//! plain description of the nodes to draw. Painting and event dispatch are
//! left to the UI layer.

use peniko::Color;
use serde::Serialize;

use crate::config::RatingConfig;
use crate::error::{RatingError, RatingResult};
use crate::partition::{partition, StarFill, StarUnit};

/// Color tone of a star icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Gold, for filled stars.
    Active,
    /// Light gray, for empty stars.
    Inactive,
}

impl Tone {
    /// RGBA8 components of the tone.
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Active => [0xff, 0xc1, 0x07, 0xff],
            Self::Inactive => [0xe4, 0xe5, 0xe9, 0xff],
        }
    }

    /// The tone as a peniko color.
    pub fn color(self) -> Color {
        let [r, g, b, a] = self.rgba();
        Color::from_rgba8(r, g, b, a)
    }
}

/// Clip rectangle in unit fractions of the icon box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClipRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl ClipRect {
    /// Keep the left `fraction` of the icon, full height.
    pub fn left_fraction(fraction: f64) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: fraction,
            y1: 1.0,
        }
    }
}

/// A single star icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarNode {
    /// Value reported when the icon is activated
    pub ordinal: i64,
    pub tone: Tone,
    /// Icon edge length in logical pixels
    pub size: f64,
    /// Visible part of the icon, `None` when fully visible
    pub clip: Option<ClipRect>,
    /// Whether the icon is a click target
    pub activatable: bool,
}

impl StarNode {
    fn new(ordinal: i64, tone: Tone, size: f64) -> Self {
        Self {
            ordinal,
            tone,
            size,
            clip: None,
            activatable: true,
        }
    }
}

/// Purpose of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    /// Leading "score/max" label in display-only mode.
    Caption,
    /// Trailing score in interactive mode.
    Score,
    /// Trailing auxiliary text.
    Annotation,
}

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Container {
        children: Vec<Node>,
    },
    /// Horizontal row, vertically centered.
    Row {
        children: Vec<Node>,
    },
    Text {
        role: TextRole,
        text: String,
    },
    Star(StarNode),
    /// Active star clipped to `fraction` stacked over an inactive star.
    PartialStar {
        ordinal: i64,
        fraction: f64,
        filled: StarNode,
        empty: StarNode,
    },
}

impl Node {
    /// Child nodes of a container or row.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Container { children } | Self::Row { children } => children,
            _ => &[],
        }
    }

    fn text(role: TextRole, text: impl Into<String>) -> Self {
        Self::Text {
            role,
            text: text.into(),
        }
    }

    fn star(unit: &StarUnit, size: f64) -> Self {
        match unit.fill {
            StarFill::Full => Self::Star(StarNode::new(unit.ordinal, Tone::Active, size)),
            StarFill::Empty => Self::Star(StarNode::new(unit.ordinal, Tone::Inactive, size)),
            StarFill::Partial(fraction) => {
                let mut filled = StarNode::new(unit.ordinal, Tone::Active, size);
                filled.clip = Some(ClipRect::left_fraction(fraction));
                let mut empty = StarNode::new(unit.ordinal, Tone::Inactive, size);
                empty.activatable = false;
                Self::PartialStar {
                    ordinal: unit.ordinal,
                    fraction,
                    filled,
                    empty,
                }
            }
        }
    }

    fn as_unit(&self) -> Option<StarUnit> {
        match self {
            Self::Star(star) => {
                let fill = match star.tone {
                    Tone::Active => StarFill::Full,
                    Tone::Inactive => StarFill::Empty,
                };
                Some(StarUnit::new(star.ordinal, fill))
            }
            Self::PartialStar {
                ordinal, fraction, ..
            } => Some(StarUnit::new(*ordinal, StarFill::Partial(*fraction))),
            _ => None,
        }
    }
}

/// Rendered description of a rating widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingView {
    pub root: Node,
}

impl RatingView {
    fn row(&self) -> Option<&Node> {
        self.root
            .children()
            .iter()
            .find(|n| matches!(n, Node::Row { .. }))
    }

    /// The star nodes of the row, in display order.
    pub fn stars(&self) -> impl Iterator<Item = &Node> {
        self.row()
            .map(Node::children)
            .unwrap_or_default()
            .iter()
            .filter(|n| matches!(n, Node::Star(_) | Node::PartialStar { .. }))
    }

    /// Flat `(ordinal, fill)` list of the rendered units.
    pub fn units(&self) -> Vec<StarUnit> {
        self.stars().filter_map(Node::as_unit).collect()
    }

    /// Number of star units in the row.
    pub fn star_count(&self) -> usize {
        self.stars().count()
    }

    /// Text shown before the star row, if any.
    pub fn leading_text(&self) -> Option<&str> {
        self.root.children().iter().find_map(|n| match n {
            Node::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Texts shown after the stars, in order.
    pub fn trailing_texts(&self) -> Vec<&str> {
        self.row()
            .map(Node::children)
            .unwrap_or_default()
            .iter()
            .filter_map(|n| match n {
                Node::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Serialize the tree to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the render tree for `rating` under `config`.
///
/// The rating is formatted with one decimal place. Display-only widgets
/// lead with a `score/max` caption; interactive ones show the score after
/// the stars instead. A visible annotation always trails the row.
///
/// The number shown is the effective rating: under [`RangePolicy::Clamp`]
/// that is the clamped value, not the one passed in.
///
/// [`RangePolicy::Clamp`]: crate::config::RangePolicy::Clamp
pub fn render(rating: f64, config: &RatingConfig) -> RatingResult<RatingView> {
    config.validate()?;
    if !rating.is_finite() {
        return Err(RatingError::NonFiniteRating(rating));
    }

    let rating = config.effective_rating(rating);
    let units = partition(rating, config.max_stars);
    log::debug!(
        "Rendering rating {:.1}/{} as {} units",
        rating,
        config.max_stars,
        units.len()
    );

    let mut row: Vec<Node> = units
        .iter()
        .map(|unit| Node::star(unit, config.icon_size))
        .collect();

    if config.interactive {
        row.push(Node::text(TextRole::Score, format!("{:.1}", rating)));
    }
    if let Some(annotation) = config.visible_annotation() {
        row.push(Node::text(TextRole::Annotation, annotation.to_string()));
    }

    let mut children = Vec::with_capacity(2);
    if !config.interactive {
        let caption = config.caption.as_deref().unwrap_or_default();
        children.push(Node::text(
            TextRole::Caption,
            format!("{}{:.1}/{}", caption, rating, config.max_stars),
        ));
    }
    children.push(Node::Row { children: row });

    Ok(RatingView {
        root: Node::Container { children },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RangePolicy;

    #[test]
    fn test_display_only_layout() {
        let view = render(1.5, &RatingConfig::new()).unwrap();
        assert_eq!(view.leading_text(), Some("1.5/5"));
        assert!(view.trailing_texts().is_empty());
        assert_eq!(view.star_count(), 5);
    }

    #[test]
    fn test_interactive_layout() {
        let config = RatingConfig::new().with_interactive(true);
        let view = render(3.0, &config).unwrap();
        assert_eq!(view.leading_text(), None);
        assert_eq!(view.trailing_texts(), vec!["3.0"]);
    }

    #[test]
    fn test_annotation_trails_in_both_modes() {
        let display = RatingConfig::new().with_annotation(1234u64);
        let view = render(1.5, &display).unwrap();
        assert_eq!(view.trailing_texts(), vec!["1234"]);

        let interactive = display.with_interactive(true);
        let view = render(1.5, &interactive).unwrap();
        assert_eq!(view.trailing_texts(), vec!["1.5", "1234"]);
    }

    #[test]
    fn test_falsy_annotation_hidden() {
        let config = RatingConfig::new().with_annotation("");
        let view = render(2.0, &config).unwrap();
        assert!(view.trailing_texts().is_empty());
    }

    #[test]
    fn test_caption_prefix() {
        let config = RatingConfig::new().with_caption("Overall: ").with_max_stars(10);
        let view = render(7.0, &config).unwrap();
        assert_eq!(view.leading_text(), Some("Overall: 7.0/10"));
    }

    #[test]
    fn test_partial_star_layers() {
        let view = render(1.5, &RatingConfig::new()).unwrap();
        let partial = view.stars().nth(1).unwrap();
        match partial {
            Node::PartialStar {
                ordinal,
                fraction,
                filled,
                empty,
            } => {
                assert_eq!(*ordinal, 2);
                assert!((fraction - 0.5).abs() < 1e-9);
                assert_eq!(filled.tone, Tone::Active);
                assert!(filled.activatable);
                assert_eq!(filled.clip, Some(ClipRect::left_fraction(0.5)));
                assert_eq!(empty.tone, Tone::Inactive);
                assert!(!empty.activatable);
                assert_eq!(empty.clip, None);
                assert!((empty.size - filled.size).abs() < f64::EPSILON);
            }
            other => panic!("expected partial star, got {:?}", other),
        }
    }

    #[test]
    fn test_units_round_trip_from_tree() {
        let view = render(1.5, &RatingConfig::new()).unwrap();
        assert_eq!(view.units(), partition(1.5, 5));
    }

    #[test]
    fn test_star_tones() {
        let view = render(2.0, &RatingConfig::new().with_icon_size(30.0)).unwrap();
        let tones: Vec<Tone> = view
            .stars()
            .map(|n| match n {
                Node::Star(star) => {
                    assert!((star.size - 30.0).abs() < f64::EPSILON);
                    star.tone
                }
                other => panic!("unexpected node {:?}", other),
            })
            .collect();
        assert_eq!(
            tones,
            vec![Tone::Active, Tone::Active, Tone::Inactive, Tone::Inactive, Tone::Inactive]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = RatingConfig::new().with_annotation(1234u64);
        let a = render(3.7, &config).unwrap();
        let b = render(3.7, &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    #[test]
    fn test_non_finite_rating_is_an_error() {
        let config = RatingConfig::new();
        assert_eq!(
            render(f64::INFINITY, &config),
            Err(RatingError::NonFiniteRating(f64::INFINITY))
        );
        assert!(matches!(
            render(f64::NAN, &config),
            Err(RatingError::NonFiniteRating(_))
        ));
    }

    #[test]
    fn test_invalid_icon_size_is_an_error() {
        let config = RatingConfig::new().with_icon_size(0.0);
        assert_eq!(render(1.0, &config), Err(RatingError::InvalidIconSize(0.0)));
    }

    #[test]
    fn test_huge_finite_rating_renders_bounded_row() {
        let view = render(1e19, &RatingConfig::new()).unwrap();
        assert_eq!(view.star_count(), 10);
        let view = render(-1e300, &RatingConfig::new().with_interactive(true)).unwrap();
        assert_eq!(view.star_count(), 10);
    }

    #[test]
    fn test_clamp_policy_keeps_count() {
        let config = RatingConfig::new().with_range_policy(RangePolicy::Clamp);
        let view = render(9.0, &config).unwrap();
        assert_eq!(view.star_count(), 5);
        assert_eq!(view.leading_text(), Some("5.0/5"));

        let view = render(-1.0, &config).unwrap();
        assert_eq!(view.star_count(), 5);
    }

    #[test]
    fn test_json_snapshot_shape() {
        let view = render(0.5, &RatingConfig::new().with_max_stars(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
        assert_eq!(value["root"]["type"], "container");
        assert_eq!(value["root"]["children"][0]["role"], "caption");
        let star = &value["root"]["children"][1]["children"][0];
        assert_eq!(star["type"], "partial_star");
        assert_eq!(star["filled"]["tone"], "active");
        assert_eq!(star["filled"]["clip"]["x1"], 0.5);
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(Tone::Active.rgba(), [255, 193, 7, 255]);
        assert_eq!(Tone::Inactive.rgba(), [228, 229, 233, 255]);
        let rgba = Tone::Active.color().to_rgba8();
        assert_eq!((rgba.r, rgba.g, rgba.b), (255, 193, 7));
    }
}
