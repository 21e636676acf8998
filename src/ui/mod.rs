pub mod layout;
mod quiz;
mod summary;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::{draw_summary, REVIEW_LINES_PER_ENTRY};

use crate::app::App;
use crate::models::AppState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};
use std::time::Instant;

pub fn draw_app(f: &mut Frame, app: &App, now: Instant) {
    let snapshot = app.session.snapshot(now);
    match app.state {
        AppState::Quiz => draw_quiz(f, &snapshot, app.selected_option, app.notice.as_deref()),
        AppState::QuizQuitConfirm => draw_quit_confirmation(f),
        AppState::Summary => {
            if let Some(results) = &snapshot.results {
                draw_summary(f, results, app.review_scroll);
            }
        }
    }
}

pub(crate) fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
