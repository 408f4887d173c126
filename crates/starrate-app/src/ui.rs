//! Demo page: a rating the user sets and a read-only summary.

use egui::{Context, Frame, Ui};
use starrate_core::RatingResult;
use starrate_widgets::{card_frame, section_heading, StarRating};

use crate::config::AppConfig;

/// Actions emitted by the UI for the application to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SetUserRating(u32),
}

/// State owned by the page on behalf of its widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Rating chosen by the user, 0 until a star is clicked
    pub user_rating: u32,
}

impl UiState {
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::SetUserRating(value) => {
                log::info!("User rating changed {} -> {}", self.user_rating, value);
                self.user_rating = value;
            }
        }
    }
}

/// Render the page and return the action triggered this frame, if any.
pub fn render_ui(
    ctx: &Context,
    state: &UiState,
    config: &AppConfig,
) -> RatingResult<Option<UiAction>> {
    let [r, g, b, a] = config.background;
    let mut result = Ok(None);
    egui::CentralPanel::default()
        .frame(Frame::new().fill(egui::Color32::from_rgba_unmultiplied(r, g, b, a)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                result = user_section(ui, state, config);
                ui.add_space(24.0);
                if result.is_ok() {
                    if let Err(e) = summary_section(ui, config) {
                        result = Err(e);
                    }
                }
            });
        });
    result
}

fn user_section(ui: &mut Ui, state: &UiState, config: &AppConfig) -> RatingResult<Option<UiAction>> {
    card_frame()
        .show(ui, |ui| -> RatingResult<Option<UiAction>> {
            section_heading(ui, "Your rating");
            ui.add_space(8.0);
            let chosen = StarRating::new(f64::from(state.user_rating))
                .config(config.user.clone())
                .interactive(true)
                .show(ui)?;
            Ok(chosen.map(UiAction::SetUserRating))
        })
        .inner
}

fn summary_section(ui: &mut Ui, config: &AppConfig) -> RatingResult<()> {
    card_frame()
        .show(ui, |ui| -> RatingResult<()> {
            section_heading(ui, "Overall rating");
            ui.add_space(8.0);
            StarRating::new(config.summary_rating)
                .config(config.summary.clone())
                .show(ui)?;
            Ok(())
        })
        .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, Pos2, Shape};
    use starrate_core::RatingError;

    fn run_frame(state: &UiState, config: &AppConfig) -> RatingResult<Option<UiAction>> {
        let ctx = Context::default();
        let mut result = Ok(None);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            result = render_ui(ctx, state, config);
        });
        result
    }

    fn input(events: Vec<Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Click the user star at `index` and return the action of each frame.
    fn click_user_star(
        state: &UiState,
        config: &AppConfig,
        index: usize,
    ) -> Vec<Option<UiAction>> {
        let ctx = Context::default();
        let output = ctx.run(input(Vec::new()), |ctx| {
            let _ = render_ui(ctx, state, config);
        });
        // The user row is painted first; each of its stars is a single mesh.
        let centers: Vec<Pos2> = output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Mesh(mesh) if mesh.vertices.len() == 11 => Some(mesh.vertices[0].pos),
                _ => None,
            })
            .collect();
        let pos = centers[index];

        let mut actions = Vec::new();
        for events in [
            vec![Event::PointerMoved(pos), button(pos, true)],
            vec![button(pos, false)],
        ] {
            let _ = ctx.run(input(events), |ctx| {
                actions.push(render_ui(ctx, state, config).unwrap());
            });
        }
        actions
    }

    #[test]
    fn test_apply_set_user_rating() {
        let mut state = UiState::default();
        assert_eq!(state.user_rating, 0);
        state.apply(UiAction::SetUserRating(4));
        assert_eq!(state.user_rating, 4);
    }

    #[test]
    fn test_idle_frame_emits_no_action() {
        let result = run_frame(&UiState { user_rating: 3 }, &AppConfig::default());
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_render_failure_propagates() {
        let config = AppConfig {
            summary_rating: f64::NAN,
            ..AppConfig::default()
        };
        let result = run_frame(&UiState::default(), &config);
        assert!(matches!(result, Err(RatingError::NonFiniteRating(_))));
    }

    #[test]
    fn test_clicking_user_star_sets_rating() {
        let config = AppConfig::default();
        let mut state = UiState::default();

        let chosen: Vec<UiAction> = click_user_star(&state, &config, 2)
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(chosen, vec![UiAction::SetUserRating(3)]);

        for action in chosen {
            state.apply(action);
        }
        assert_eq!(state.user_rating, 3);

        let chosen: Vec<UiAction> = click_user_star(&state, &config, 0)
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(chosen, vec![UiAction::SetUserRating(1)]);
    }
}
