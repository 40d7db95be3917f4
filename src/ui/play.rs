use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::models::{Question, Quiz};
use crate::views::PlayView;

pub fn render(frame: &mut Frame, area: Rect, view: &PlayView) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let quiz = view.quiz();
    let question = view.current_question();

    match (&quiz, &question) {
        (Some(quiz), Some(question)) => {
            render_progress(frame, chunks[0], view, quiz);
            render_question_text(frame, chunks[1], &question.question);
            render_answers(frame, chunks[2], view, question);
        }
        _ => render_waiting(frame, chunks[1], view),
    }

    render_controls(frame, chunks[3]);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &PlayView, quiz: &Quiz) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let category = Paragraph::new(quiz.name.as_str()).fg(Color::DarkGray);
    let progress = Paragraph::new(format!(
        "{}s  ·  {}/{}",
        view.total_time(),
        view.current_question_index() + 1,
        quiz.total_questions()
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);

    frame.render_widget(category, chunks[0]);
    frame.render_widget(progress, chunks[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_answers(frame: &mut Frame, area: Rect, view: &PlayView, question: &Question) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.answers.len() * 2);

    for (index, answer) in question.answers.iter().enumerate() {
        let is_highlighted = index == view.highlighted();
        let is_selected = view.selected_answer() == Some(answer.as_str());
        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if is_highlighted { ">" } else { " " };
        let radio = if is_selected { "(*)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", cursor), style),
            Span::styled(format!("{} ", radio), style),
            Span::styled(answer.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_waiting(frame: &mut Frame, area: Rect, view: &PlayView) {
    let widget = Paragraph::new(format!("Waiting for quiz {}...", view.quiz_id()))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  space choose  ·  enter next  ·  esc cancel")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
