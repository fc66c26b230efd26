mod contact;
mod home;
mod layout;
mod navbar;
mod projects;
mod status_bar;
mod thanks;
pub mod theme;
mod videos;
mod writings;

use crate::app::state::{AppState, Page};
use ratatui::prelude::*;
use ratatui::widgets::Block;
use theme::Palette;

pub fn render(frame: &mut Frame, state: &AppState) {
    let palette = Palette::of(state.theme.active());
    let area = frame.area();

    // Paint the themed background before anything else.
    frame.render_widget(Block::default().style(palette.base()), area);

    let app_layout = layout::compute_layout(area);
    navbar::render(frame, app_layout.navbar, state, &palette);
    match state.page {
        Page::Home => home::render(frame, app_layout.content, state, &palette),
        Page::Projects => projects::render(frame, app_layout.content, state, &palette),
        Page::Writings => writings::render(frame, app_layout.content, state, &palette),
        Page::Videos => videos::render(frame, app_layout.content, state, &palette),
        Page::Contact => contact::render(frame, app_layout.content, state, &palette),
        Page::ThankYou => thanks::render(frame, app_layout.content, state, &palette),
    }
    status_bar::render(frame, app_layout.status_bar, state, &palette);
}
