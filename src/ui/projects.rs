use crate::app::state::AppState;
use crate::ui::theme::{language_color, Palette};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Lines each project entry occupies, including the blank separator.
const ITEM_HEIGHT: usize = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .title(" Projects ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let projects = &state.config.projects;
    let selected = state.projects_view.selected;

    // Scroll window derived from the selection: the selected entry is
    // always fully visible.
    let visible = ((inner.height as usize) / ITEM_HEIGHT).max(1);
    let offset = selected.saturating_sub(visible.saturating_sub(1));

    let mut lines: Vec<Line> = Vec::new();
    for (i, project) in projects.iter().enumerate().skip(offset).take(visible) {
        let is_selected = i == selected;
        let marker = if is_selected { "> " } else { "  " };
        let name_style = if is_selected {
            palette.selected()
        } else {
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
        };

        let mut header = vec![
            Span::styled(marker, palette.selected()),
            Span::styled(project.name.clone(), name_style),
        ];
        if project.stars > 0 {
            header.push(Span::styled(
                format!("  ★ {}", project.stars),
                palette.dim(),
            ));
        }
        lines.push(Line::from(header));

        lines.push(Line::from(Span::styled(
            format!("    {}", project.description),
            palette.text(),
        )));

        let mut meta = vec![
            Span::styled("    ● ", Style::default().fg(language_color(&project.language))),
            Span::styled(project.language.clone(), palette.dim()),
        ];
        if !project.topics.is_empty() {
            meta.push(Span::styled(
                format!("  [{}]", project.topics.join(", ")),
                palette.dim(),
            ));
        }
        meta.push(Span::styled(
            format!("  updated {}", project.updated),
            palette.dim(),
        ));
        lines.push(Line::from(meta));

        lines.push(Line::default());
    }

    if projects.is_empty() {
        lines.push(Line::from(Span::styled(
            " No projects configured. Check back later!",
            palette.dim(),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
