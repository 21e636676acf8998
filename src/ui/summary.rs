use crate::snapshot::Results;
use crate::ui::key_span;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::{format_duration, truncate_string};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows each review entry occupies before wrapping.
pub const REVIEW_LINES_PER_ENTRY: u16 = 6;

pub fn draw_summary(f: &mut Frame, results: &Results, scroll: u16) {
    let layout = calculate_summary_chunks(f.area());

    let title = Paragraph::new("Quiz Completed!")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut stats = Text::default();
    stats.push_line(Line::from(Span::styled(
        format!("Your Score: {}/{}", results.score, results.total),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    stats.push_line(Line::from(format!("Percentage: {:.2}%", results.percentage)));
    stats.push_line(Line::from(format!(
        "Total Time: {}",
        format_duration(results.total_elapsed)
    )));
    stats.push_line(Line::from(format!(
        "Average Time per Question: {}",
        format_duration(results.average_per_question)
    )));
    let stats = Paragraph::new(stats).block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(stats, layout.stats_area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut review = Text::default();
    for entry in &results.entries {
        let (mark, answer_style) = if entry.correct {
            ("[✓]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            ("[✗]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        };

        review.push_line(Line::from(Span::styled(
            format!(
                "{} Question {}: {}",
                mark,
                entry.number,
                truncate_string(entry.question.text, 70)
            ),
            bold,
        )));
        review.push_line(Line::from(vec![
            Span::styled("   Your answer: ", bold),
            Span::styled(entry.answer.to_string(), answer_style),
        ]));
        review.push_line(Line::from(vec![
            Span::styled("   Correct answer: ", bold),
            Span::from(entry.question.correct_answer),
        ]));
        review.push_line(Line::from(vec![
            Span::styled("   Time taken: ", bold),
            Span::from(format_duration(entry.duration)),
        ]));
        review.push_line(Line::from(vec![
            Span::styled("   Explanation: ", bold),
            Span::from(entry.question.explanation),
        ]));
        review.push_line(Line::from(""));
    }

    let review = Paragraph::new(review)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Review Your Answers"),
        );
    f.render_widget(review, layout.review_area);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Scroll  "),
        key_span("r"),
        Span::from(" Restart Quiz  "),
        key_span("q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
