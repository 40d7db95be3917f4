use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::views::HomeView;

pub fn render(frame: &mut Frame, area: Rect, view: &HomeView) {
    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], view);
    render_quiz_list(frame, chunks[1], view);
    render_controls(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, view: &HomeView) {
    let count = view.quizzes().len();
    let status = if view.is_loading() {
        format!("loading quizzes... {} ready", count)
    } else {
        format!("{} quizzes ready", count)
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TRIVIA QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(status, Style::default().fg(Color::DarkGray))),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_quiz_list(frame: &mut Frame, area: Rect, view: &HomeView) {
    let quizzes = view.quizzes();
    let lines: Vec<Line> = quizzes
        .iter()
        .enumerate()
        .map(|(index, quiz)| {
            let is_selected = index == view.selected();
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(quiz.name.as_str(), style),
                Span::styled(
                    format!("  {} questions", quiz.total_questions()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter play  ·  l feeling lucky  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
