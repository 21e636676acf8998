use crate::models::AnswerRecord;
use crate::snapshot::Snapshot;
use crate::ui::key_span;
use crate::ui::layout::{calculate_quiz_chunks, split_timer_area};
use crate::utils::format_duration;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

const TIME_WARNING: Duration = Duration::from_secs(10);

pub fn draw_quiz(f: &mut Frame, snapshot: &Snapshot, selected_option: usize, notice: Option<&str>) {
    let layout = calculate_quiz_chunks(f.area());

    let Some(question) = snapshot.current_question.as_ref() else {
        return;
    };

    let header = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Python MCQ Quiz"))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(snapshot.progress())
        .label(format!(
            "Question {} of {}",
            snapshot.current_index + 1,
            snapshot.total
        ));
    f.render_widget(header, layout.header_area);

    let (total_area, remaining_area) = split_timer_area(layout.timer_area);
    let total = Paragraph::new(format!(
        "Total Time: {}",
        format_duration(snapshot.total_elapsed)
    ))
    .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(total, total_area);

    let remaining_color = if snapshot.remaining < TIME_WARNING {
        Color::Red
    } else {
        Color::Gray
    };
    let remaining = Paragraph::new(format!(
        "Time Remaining: {}",
        format_duration(snapshot.remaining)
    ))
    .style(
        Style::default()
            .fg(remaining_color)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(remaining, remaining_area);

    let question_text = Paragraph::new(Text::from(question.text))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_text, layout.question_area);

    let chosen = snapshot.resolution.as_ref().map(|r| &r.answer);
    let option_lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let label = format!("{}. {}", i + 1, option);
            let picked = matches!(chosen, Some(AnswerRecord::Answered(a)) if a == option);
            let style = match chosen {
                Some(_) if question.is_correct(option) => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Some(_) if picked => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                Some(_) => Style::default().fg(Color::DarkGray),
                None if i == selected_option => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                None => Style::default(),
            };
            let marker = if chosen.is_none() && i == selected_option {
                "> "
            } else {
                "  "
            };
            Line::from(Span::styled(format!("{}{}", marker, label), style))
        })
        .collect();
    let options = Paragraph::new(option_lines)
        .block(Block::default().borders(Borders::ALL).title("Options"));
    f.render_widget(options, layout.options_area);

    let mut feedback = Text::default();
    match &snapshot.resolution {
        Some(resolution) if resolution.answer.is_correct_for(question) => {
            feedback.push_line(Line::from(Span::styled(
                "✅ Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Some(_) => {
            feedback.push_line(Line::from(Span::styled(
                format!(
                    "❌ Incorrect! The correct answer is: {}",
                    question.correct_answer
                ),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        None => {
            if let Some(message) = notice {
                feedback.push_line(Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
    }
    if snapshot.resolution.is_some() {
        feedback.push_line(Line::from(""));
        feedback.push_line(Line::from(format!("Explanation: {}", question.explanation)));
    }
    let feedback = Paragraph::new(feedback)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Feedback"));
    f.render_widget(feedback, layout.feedback_area);

    let help_spans = if snapshot.resolution.is_some() {
        vec![
            key_span("Enter"),
            Span::from(" Next Question  "),
            key_span("Esc"),
            Span::from(" Quit  "),
        ]
    } else {
        vec![
            key_span("↑/↓"),
            Span::from(" Select  "),
            key_span("Enter/1-4"),
            Span::from(" Answer  "),
            key_span("s"),
            Span::from(" Skip Question  "),
            key_span("Esc"),
            Span::from(" Quit  "),
        ]
    };
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit Quiz")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the quiz? Progress is not saved.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        key_span("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
