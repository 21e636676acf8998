use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub timer_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub stats_area: Rect,
    pub review_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(6),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        timer_area: chunks[1],
        question_area: chunks[2],
        options_area: chunks[3],
        feedback_area: chunks[4],
        help_area: chunks[5],
    }
}

/// Splits the timer row into total-time and time-remaining halves.
pub fn split_timer_area(area: Rect) -> (Rect, Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (halves[0], halves[1])
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        stats_area: chunks[1],
        review_area: chunks[2],
        footer_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_quiz_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.timer_area.height, 3);
        assert_eq!(layout.options_area.height, 6);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.question_area.height >= 3);
        assert!(layout.feedback_area.height >= 4);
        // margin 1 on each side
        assert_eq!(layout.header_area.width, 98);
    }

    #[test]
    fn test_timer_split() {
        let (left, right) = split_timer_area(Rect::new(0, 0, 80, 3));
        assert_eq!(left.width, 40);
        assert_eq!(right.width, 40);
        assert_eq!(right.x, 40);
    }

    #[test]
    fn test_summary_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_summary_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.stats_area.height, 6);
        assert_eq!(layout.footer_area.height, 3);
        // 98 usable rows minus the fixed 12
        assert_eq!(layout.review_area.height, 86);
    }
}
