use crate::app::state::AppState;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const ITEM_HEIGHT: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .title(" Videos ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let videos = &state.config.videos;
    let selected = state.videos_view.selected;
    let visible = ((inner.height as usize) / ITEM_HEIGHT).max(1);
    let offset = selected.saturating_sub(visible.saturating_sub(1));

    let mut lines: Vec<Line> = Vec::new();
    for (i, video) in videos.iter().enumerate().skip(offset).take(visible) {
        let is_selected = i == selected;
        let marker = if is_selected { "> " } else { "  " };
        let title_style = if is_selected {
            palette.selected()
        } else {
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, palette.selected()),
            Span::styled(video.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", video.description),
            palette.text(),
        )));
        lines.push(Line::from(Span::styled(
            format!("    https://youtu.be/{}", video.id),
            palette.dim(),
        )));
        lines.push(Line::default());
    }

    if videos.is_empty() {
        lines.push(Line::from(Span::styled(
            " No videos configured.",
            palette.dim(),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
