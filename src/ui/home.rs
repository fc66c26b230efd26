use crate::app::state::AppState;
use crate::ui::theme::{language_color, Palette};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .title(" Home ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = &state.config.profile;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        profile.greeting.clone(),
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    for bio_line in &profile.bio {
        lines.push(Line::from(Span::styled(bio_line.clone(), palette.text())));
    }
    lines.push(Line::default());

    // Doom owners get the flair instead of the hint.
    if state.theme.special_active() {
        lines.push(Line::from(vec![
            Span::styled("Fun fact: I love DOOM. A lot. ", palette.dim()),
            Span::styled(
                "RIP AND TEAR!",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            profile.fun_fact.clone(),
            palette.dim(),
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "Featured projects",
        palette.title(),
    )));
    for project in state.config.projects.iter().filter(|p| p.featured) {
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(language_color(&project.language))),
            Span::styled(
                project.name.clone(),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", project.description), palette.dim()),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled("GitHub: ", palette.text()),
        Span::styled(profile.github_url.clone(), palette.dim()),
    ]));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
