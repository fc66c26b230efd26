use crate::app::state::AppState;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const ITEM_HEIGHT: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .title(" Writings ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let writings = &state.config.writings;
    let selected = state.writings_view.selected;
    let visible = ((inner.height as usize) / ITEM_HEIGHT).max(1);
    let offset = selected.saturating_sub(visible.saturating_sub(1));
    let text_width = (inner.width as usize).saturating_sub(6);

    let mut lines: Vec<Line> = Vec::new();
    for (i, post) in writings.iter().enumerate().skip(offset).take(visible) {
        let is_selected = i == selected;
        let marker = if is_selected { "> " } else { "  " };
        let title_style = if is_selected {
            palette.selected()
        } else {
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, palette.selected()),
            Span::styled(post.title.clone(), title_style),
        ]));

        if let Some(ref subtitle) = post.subtitle {
            lines.push(Line::from(Span::styled(
                format!("    {}", truncate(subtitle, text_width)),
                Style::default().fg(palette.dim).add_modifier(Modifier::ITALIC),
            )));
        } else {
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            format!("    {}", truncate(&post.brief, text_width)),
            palette.dim(),
        )));

        lines.push(Line::default());
    }

    if writings.is_empty() {
        lines.push(Line::from(Span::styled(
            " Nothing published yet.",
            palette.dim(),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{cut}...")
}
