//! Labels and frames around a star row.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};
use starrate_core::TextRole;

use crate::{sizing, theme};

/// Draw a text node of the rating tree.
///
/// Captions use the regular text style; the trailing score sits a little
/// away from the stars and annotations are smaller and muted.
pub fn rating_label(ui: &mut Ui, role: TextRole, text: &str) {
    match role {
        TextRole::Caption => {
            ui.label(RichText::new(text).color(theme::TEXT));
        }
        TextRole::Score => {
            ui.add_space(sizing::TEXT_GAP);
            ui.label(RichText::new(text).color(theme::TEXT));
        }
        TextRole::Annotation => {
            ui.add_space(sizing::TEXT_GAP);
            ui.label(RichText::new(text).size(11.0).color(theme::TEXT_MUTED));
        }
    }
}

/// Draw a section heading.
pub fn section_heading(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(18.0).strong().color(theme::TEXT));
}

/// Create a card frame for a group of widgets.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(theme::CARD_BG)
        .corner_radius(CornerRadius::same(sizing::CARD_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(16))
}
