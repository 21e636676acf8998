use crate::logger;
use crate::models::{AppState, OPTIONS_PER_QUESTION};
use crate::session::QuizSession;
use crate::ui::REVIEW_LINES_PER_ENTRY;
use std::time::Instant;

/// Presentation-side state wrapped around the quiz core.
#[derive(Debug)]
pub struct App {
    pub session: QuizSession,
    pub state: AppState,
    pub selected_option: usize,
    pub review_scroll: u16,
    /// One-shot message shown on the next frame, e.g. after a timeout.
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            state: AppState::Quiz,
            selected_option: 0,
            review_scroll: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Timer callback. Expires the current question once its time is up and
    /// returns whether anything changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.session.is_completed()
            || self.session.is_resolved()
            || !self.session.is_expired(now)
        {
            return false;
        }

        let number = self.session.current_index() + 1;
        self.session.expire_current(now);
        self.selected_option = 0;
        self.notice = Some(format!(
            "Time's up on question {}! Moving to the next question.",
            number
        ));
        self.sync_state();
        true
    }

    pub fn select_previous(&mut self) {
        self.selected_option = self.selected_option.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_option < OPTIONS_PER_QUESTION - 1 {
            self.selected_option += 1;
        }
    }

    /// Submits the highlighted option. An answer arriving after the limit is
    /// treated as a timeout instead.
    pub fn submit_selected(&mut self, now: Instant) {
        if self.session.is_completed() || self.session.is_resolved() {
            return;
        }
        if self.on_tick(now) {
            return;
        }

        let Some(option) = self
            .session
            .current_question()
            .and_then(|q| q.options.get(self.selected_option).copied())
        else {
            return;
        };
        self.notice = None;
        self.session.submit_answer(option, now);
    }

    pub fn skip(&mut self, now: Instant) {
        if self.session.is_completed() || self.session.is_resolved() || self.on_tick(now) {
            return;
        }
        self.notice = None;
        self.session.skip_current(now);
        self.selected_option = 0;
        self.sync_state();
    }

    pub fn next_question(&mut self, now: Instant) {
        if !self.session.is_resolved() {
            return;
        }
        self.notice = None;
        self.session.advance(now);
        self.selected_option = 0;
        self.sync_state();
    }

    pub fn restart(&mut self, now: Instant) {
        logger::log("Restart requested");
        self.session.restart(now);
        self.state = AppState::Quiz;
        self.selected_option = 0;
        self.review_scroll = 0;
        self.notice = None;
    }

    pub fn scroll_review_up(&mut self, lines: u16) {
        self.review_scroll = self.review_scroll.saturating_sub(lines);
    }

    /// Scrolls down, stopping with the last review line at the top.
    pub fn scroll_review_down(&mut self, lines: u16) {
        self.review_scroll = self
            .review_scroll
            .saturating_add(lines)
            .min(self.max_review_scroll());
    }

    fn max_review_scroll(&self) -> u16 {
        let entries = u16::try_from(self.session.total()).unwrap_or(u16::MAX);
        entries
            .saturating_mul(REVIEW_LINES_PER_ENTRY)
            .saturating_sub(1)
    }

    /// Leaves the quit confirmation, landing on the summary if the quiz
    /// finished while it was open.
    pub fn cancel_quit(&mut self) {
        self.state = AppState::Quiz;
        self.sync_state();
    }

    fn sync_state(&mut self) {
        if self.session.is_completed() && self.state == AppState::Quiz {
            self.state = AppState::Summary;
            self.review_scroll = 0;
        }
    }
}
