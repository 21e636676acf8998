use crate::app::App;
use crate::models::{AppState, OPTIONS_PER_QUESTION};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

const REVIEW_PAGE: u16 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Quiz => handle_quiz_input(app, key, now),
        AppState::QuizQuitConfirm => handle_quit_confirm_input(app, key),
        AppState::Summary => handle_summary_input(app, key, now),
    }
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent, now: Instant) {
    if key.code == KeyCode::Esc {
        app.state = AppState::QuizQuitConfirm;
        return;
    }

    if app.session.is_resolved() {
        // feedback is on screen, only moving on is allowed
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('n') | KeyCode::Right) {
            app.next_question(now);
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.submit_selected(now),
        KeyCode::Char('s') => app.skip(now),
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10)
                && (1..=OPTIONS_PER_QUESTION as u32).contains(&digit)
            {
                app.selected_option = digit as usize - 1;
                app.submit_selected(now);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.should_quit = true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_quit(),
        _ => {}
    }
}

pub fn handle_summary_input(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('r') => app.restart(now),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_review_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_review_down(1),
        KeyCode::PageUp => app.scroll_review_up(REVIEW_PAGE),
        KeyCode::PageDown => app.scroll_review_down(REVIEW_PAGE),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use crate::models::AnswerRecord;
    use crate::session::QuizSession;
    use std::time::Duration;

    fn create_test_app(t0: Instant) -> App {
        App::new(QuizSession::new(QuestionBank::builtin().unwrap(), t0))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_submits_matching_option() {
        let t0 = Instant::now();
        let mut app = create_test_app(t0);
        let expected = app.session.current_question().unwrap().options[2];

        handle_key(&mut app, press(KeyCode::Char('3')), t0 + Duration::from_secs(2));
        assert_eq!(
            app.session.answer(0),
            Some(&AnswerRecord::Answered(expected.to_string()))
        );
        assert_eq!(app.selected_option, 2);
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let t0 = Instant::now();
        let mut app = create_test_app(t0);
        handle_key(&mut app, press(KeyCode::Char('5')), t0);
        handle_key(&mut app, press(KeyCode::Char('0')), t0);
        assert!(!app.session.is_resolved());
    }

    #[test]
    fn test_navigate_then_enter() {
        let t0 = Instant::now();
        let mut app = create_test_app(t0);
        let expected = app.session.current_question().unwrap().options[1];

        handle_key(&mut app, press(KeyCode::Down), t0);
        handle_key(&mut app, press(KeyCode::Char('j')), t0);
        handle_key(&mut app, press(KeyCode::Char('k')), t0);
        handle_key(&mut app, press(KeyCode::Enter), t0 + Duration::from_secs(1));
        assert_eq!(
            app.session.answer(0),
            Some(&AnswerRecord::Answered(expected.to_string()))
        );

        // second Enter advances past the feedback
        handle_key(&mut app, press(KeyCode::Enter), t0 + Duration::from_secs(3));
        assert_eq!(app.session.current_index(), 1);
        assert!(!app.session.is_resolved());
    }

    #[test]
    fn test_keys_ignored_while_feedback_shown() {
        let t0 = Instant::now();
        let mut app = create_test_app(t0);
        handle_key(&mut app, press(KeyCode::Char('1')), t0);
        let score = app.session.score();

        handle_key(&mut app, press(KeyCode::Char('2')), t0);
        handle_key(&mut app, press(KeyCode::Char('s')), t0);
        assert_eq!(app.session.current_index(), 0);
        assert_eq!(app.session.score(), score);
    }

    #[test]
    fn test_skip_key() {
        let t0 = Instant::now();
        let mut app = create_test_app(t0);
        handle_key(&mut app, press(KeyCode::Char('s')), t0 + Duration::from_secs(4));
        assert_eq!(app.session.answer(0), Some(&AnswerRecord::Skipped));
        assert_eq!(app.session.current_index(), 1);
    }

    #[test]
    fn test_quit_confirmation_flow() {
        let t0 = Instant::now();
        let mut app = create_test_app(t0);

        handle_key(&mut app, press(KeyCode::Esc), t0);
        assert_eq!(app.state, AppState::QuizQuitConfirm);
        handle_key(&mut app, press(KeyCode::Char('n')), t0);
        assert_eq!(app.state, AppState::Quiz);
        assert!(!app.should_quit);

        handle_key(&mut app, press(KeyCode::Esc), t0);
        handle_key(&mut app, press(KeyCode::Char('y')), t0);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let t0 = Instant::now();
        let mut app = create_test_app(t0);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            t0,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_summary_keys() {
        let t0 = Instant::now();
        let mut app = create_test_app(t0);
        for i in 0..5 {
            handle_key(&mut app, press(KeyCode::Char('s')), t0 + Duration::from_secs(i));
        }
        assert_eq!(app.state, AppState::Summary);

        handle_key(&mut app, press(KeyCode::PageDown), t0);
        handle_key(&mut app, press(KeyCode::Up), t0);
        assert_eq!(app.review_scroll, REVIEW_PAGE - 1);

        handle_key(&mut app, press(KeyCode::Char('r')), t0);
        assert_eq!(app.state, AppState::Quiz);
        assert!(!app.session.is_completed());
    }
}
