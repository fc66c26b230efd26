use crate::app::state::{AppState, Page};
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::Tabs;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!(" {} {} ", i + 1, page.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.page.index())
        .style(palette.dim())
        .highlight_style(palette.tab_active())
        .divider(Span::styled("|", palette.border()));

    frame.render_widget(tabs, area);
}
