//! Star rating widget.

use egui::{
    pos2, vec2, Color32, CursorIcon, Mesh, Painter, Pos2, Rect, Sense, Shape, Ui,
};
use kurbo::Point;
use starrate_core::{
    clip_bounds, star_outline, Annotation, Node, RangePolicy, RatingConfig, RatingResult,
    RatingWidget, RowLayout, StarNode, Tone,
};

use crate::layout::rating_label;
use crate::{sizing, theme};

fn to_kurbo(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

fn to_egui(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        pos2(rect.x0 as f32, rect.y0 as f32),
        pos2(rect.x1 as f32, rect.y1 as f32),
    )
}

/// egui color for a star tone.
pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Active => theme::STAR_ACTIVE,
        Tone::Inactive => theme::STAR_INACTIVE,
    }
}

/// Filled star inscribed in `rect`, as a triangle fan around its center.
pub fn star_mesh(rect: Rect, color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.center(), color);
    for point in star_outline(to_kurbo(rect)) {
        mesh.colored_vertex(pos2(point.x as f32, point.y as f32), color);
    }
    for i in 0..10u32 {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % 10);
    }
    mesh
}

/// Paint one star layer, honoring its clip.
pub fn paint_star(painter: &Painter, rect: Rect, star: &StarNode) {
    let mesh = star_mesh(rect, tone_color(star.tone));
    match &star.clip {
        Some(clip) => {
            let clip_rect = to_egui(clip_bounds(to_kurbo(rect), clip));
            painter.with_clip_rect(clip_rect).add(Shape::mesh(mesh));
        }
        None => {
            painter.add(Shape::mesh(mesh));
        }
    }
}

/// Area of a layer that responds to clicks.
fn hit_rect(rect: Rect, star: &StarNode) -> Option<Rect> {
    if !star.activatable {
        return None;
    }
    Some(match &star.clip {
        Some(clip) => to_egui(clip_bounds(to_kurbo(rect), clip)),
        None => rect,
    })
}

/// A row of stars showing a rating, optionally clickable.
///
/// The widget does not store the rating: pass the current value every frame
/// and apply the value returned by [`StarRating::show`].
pub struct StarRating {
    rating: f64,
    config: RatingConfig,
    spacing: f32,
    on_change: Option<Box<dyn FnMut(u32)>>,
}

impl StarRating {
    /// Create a display-only rating with default configuration.
    pub fn new(rating: f64) -> Self {
        Self {
            rating,
            config: RatingConfig::default(),
            spacing: sizing::STAR_SPACING,
            on_change: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: RatingConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of stars.
    pub fn max_stars(mut self, max_stars: u32) -> Self {
        self.config.max_stars = max_stars;
        self
    }

    /// Set the star icon size.
    pub fn size(mut self, size: f32) -> Self {
        self.config.icon_size = size as f64;
        self
    }

    /// Make the stars clickable.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.config.interactive = interactive;
        self
    }

    /// Show auxiliary text (e.g. a review count) after the rating.
    pub fn annotation(mut self, annotation: impl Into<Annotation>) -> Self {
        self.config.annotation = Some(annotation.into());
        self
    }

    /// Prefix the display-only caption.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.config.caption = Some(caption.into());
        self
    }

    /// Clamp out-of-range ratings instead of drawing them as given.
    pub fn clamped(mut self) -> Self {
        self.config.range_policy = RangePolicy::Clamp;
        self
    }

    /// Set the gap between stars.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Call `callback` with the chosen value when a star is clicked.
    pub fn on_change(mut self, callback: impl FnMut(u32) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Show the widget and return the chosen value if a star was clicked.
    ///
    /// Fails without drawing anything when the rating is not finite or the
    /// icon size is invalid.
    pub fn show(self, ui: &mut Ui) -> RatingResult<Option<u32>> {
        let Self {
            rating,
            config,
            spacing,
            on_change,
        } = self;
        let interactive = config.interactive;
        let icon_size = config.icon_size;

        let mut widget = RatingWidget::new(config)?;
        if let Some(callback) = on_change {
            widget = widget.on_change(callback);
        }
        let view = widget.render(rating)?;

        let mut clicked = None;
        ui.vertical(|ui| {
            for node in view.root.children() {
                match node {
                    Node::Text { role, text } => rating_label(ui, *role, text),
                    Node::Row { children } => {
                        ui.horizontal(|ui| {
                            let stars: Vec<&Node> = children
                                .iter()
                                .filter(|n| !matches!(n, Node::Text { .. }))
                                .collect();
                            let layout = RowLayout::new(
                                Point::ZERO,
                                icon_size,
                                f64::from(spacing),
                                stars.len(),
                            );
                            clicked = show_stars(ui, layout, &stars, interactive);

                            for child in children {
                                if let Node::Text { role, text } = child {
                                    rating_label(ui, *role, text);
                                }
                            }
                        });
                    }
                    _ => {}
                }
            }
        });

        Ok(clicked.and_then(|ordinal| widget.activate(ordinal)))
    }
}

/// Paint layers of a star unit, bottom first.
fn star_layers(node: &Node) -> Vec<&StarNode> {
    match node {
        Node::Star(star) => vec![star],
        Node::PartialStar { filled, empty, .. } => vec![empty, filled],
        _ => Vec::new(),
    }
}

fn star_ordinal(node: &Node) -> Option<i64> {
    match node {
        Node::Star(star) => Some(star.ordinal),
        Node::PartialStar { ordinal, .. } => Some(*ordinal),
        _ => None,
    }
}

/// Ordinal of the star whose activatable area contains `pos`.
fn hit_star(layout: &RowLayout, stars: &[&Node], pos: Pos2) -> Option<i64> {
    let index = layout.hit_test(Point::new(pos.x as f64, pos.y as f64))?;
    let node = stars.get(index)?;
    let bounds = to_egui(layout.unit_bounds(index));
    star_layers(node)
        .into_iter()
        .filter_map(|layer| hit_rect(bounds, layer))
        .any(|r| r.contains(pos))
        .then(|| star_ordinal(node))
        .flatten()
}

/// Allocate the star row, paint it and return the ordinal of a clicked star.
fn show_stars(
    ui: &mut Ui,
    mut layout: RowLayout,
    stars: &[&Node],
    interactive: bool,
) -> Option<i64> {
    let sense = if interactive {
        Sense::click()
    } else {
        Sense::hover()
    };
    let size = layout.size();
    let (rect, response) =
        ui.allocate_exact_size(vec2(size.width as f32, size.height as f32), sense);
    layout.origin = Point::new(rect.min.x as f64, rect.min.y as f64);

    if ui.is_rect_visible(rect) {
        for (index, node) in stars.iter().enumerate() {
            let bounds = to_egui(layout.unit_bounds(index));
            for layer in star_layers(node) {
                paint_star(ui.painter(), bounds, layer);
            }
        }
    }

    if !interactive {
        return None;
    }

    if response
        .hover_pos()
        .is_some_and(|pos| hit_star(&layout, stars, pos).is_some())
    {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }

    if !response.clicked() {
        return None;
    }
    response
        .interact_pointer_pos()
        .and_then(|pos| hit_star(&layout, stars, pos))
}
