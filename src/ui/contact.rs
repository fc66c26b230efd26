use crate::app::state::AppState;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .title(" Contact ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let contact = &state.config.contact;
    let entries = [
        ("Email", contact.email.as_str()),
        ("Telegram", contact.telegram.as_str()),
        ("X (formerly Twitter)", contact.x.as_str()),
        ("Farcaster", contact.farcaster.as_str()),
        ("GitHub", contact.github.as_str()),
    ];

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Get in touch", palette.title())),
        Line::default(),
    ];
    for (label, value) in entries {
        if value.is_empty() {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {label}: "), palette.text()),
            Span::styled(value.to_string(), palette.dim()),
        ]));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
