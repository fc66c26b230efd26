use crate::app::state::AppState;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        palette.status_bar(),
    ));

    // Right side: theme badge, with an animated flair while doom is active.
    let badge = if state.theme.special_active() {
        // Pulse roughly twice a second at the 50ms tick rate.
        if state.tick_count % 20 < 10 {
            Span::styled(
                " [DOOM] ",
                Style::default()
                    .fg(palette.accent)
                    .bg(palette.bar_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" [DOOM] ", palette.dim().bg(palette.bar_bg))
        }
    } else {
        Span::styled(
            format!(" [{}] ", state.theme.active().as_str()),
            Style::default().fg(palette.accent).bg(palette.bar_bg),
        )
    };

    let clock = Span::styled(
        format!(" {} ", chrono::Local::now().format("%H:%M")),
        palette.dim().bg(palette.bar_bg),
    );

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize)
        .saturating_sub(used + clock.content.width() + badge.content.width());
    parts.push(Span::styled(" ".repeat(remaining), palette.status_bar()));
    parts.push(clock);
    parts.push(badge);

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
