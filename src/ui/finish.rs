use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::views::FinishView;

pub fn render(frame: &mut Frame, area: Rect, view: &FinishView) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[1], view);
    render_controls(frame, chunks[3]);
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_summary(frame: &mut Frame, area: Rect, view: &FinishView) {
    let color = grade_color(view.correct_answer_percentage());
    let stat = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:>20}  ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::Gray)),
        ])
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            format!("{:.0} points", view.score()),
            Style::default().fg(color).bold(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        stat("correct answers", view.correct_answers().to_string()),
        stat(
            "percentage",
            format!("{:.2}%", view.correct_answer_percentage()),
        ),
        stat("total time", format!("{}s", view.total_time())),
        stat(
            "avg per question",
            format!("{}s", view.average_time_per_question()),
        ),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
