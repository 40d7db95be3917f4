mod finish;
mod home;
mod play;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Home(view) => home::render(frame, area, view),
        Screen::Play(view) => play::render(frame, area, view),
        Screen::Finish(view) => finish::render(frame, area, view),
    }
}
