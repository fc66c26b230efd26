use crate::app::state::AppState;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .title(" Thank You ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::default(),
        Line::from(Span::styled(
            "Thank You for Visiting!",
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ))
        .centered(),
    ];

    if state.theme.special_active() {
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "RIP AND TEAR!",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
    }

    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "This site fits in your terminal now. Poke around, and mind the cheatcodes.",
            palette.dim(),
        ))
        .centered(),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}
