//! egui widgets for star ratings.
//!
//! - **Stars**: the [`StarRating`] widget, painting a `starrate-core` render tree
//! - **Layout**: caption, score and annotation labels, card frames

pub mod layout;
pub mod stars;

pub use layout::{card_frame, rating_label, section_heading};
pub use stars::{paint_star, star_mesh, tone_color, StarRating};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Horizontal gap between star icons
    pub const STAR_SPACING: f32 = 2.0;
    /// Gap between the star row and trailing text
    pub const TEXT_GAP: f32 = 4.0;
    /// Card corner radius
    pub const CARD_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;
    use starrate_core::Tone;

    /// Filled star (gold)
    pub const STAR_ACTIVE: Color32 = {
        let [r, g, b, _] = Tone::Active.rgba();
        Color32::from_rgb(r, g, b)
    };
    /// Empty star (light gray)
    pub const STAR_INACTIVE: Color32 = {
        let [r, g, b, _] = Tone::Inactive.rgba();
        Color32::from_rgb(r, g, b)
    };
    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Card background
    pub const CARD_BG: Color32 = Color32::WHITE;
}
