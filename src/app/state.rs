use crate::config::AppConfig;
use crate::prefs::PreferenceStore;
use crate::secret::SequenceMatcher;
use crate::theme::ThemeManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    Writings,
    Videos,
    Contact,
    ThankYou,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Projects,
        Page::Writings,
        Page::Videos,
        Page::Contact,
        Page::ThankYou,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Writings => "Writings",
            Page::Videos => "Videos",
            Page::Contact => "Contact",
            Page::ThankYou => "Thank You",
        }
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Cursor state for a list page. The render side derives the scroll window
/// from the selection, so only the selected index is tracked here.
#[derive(Debug, Default)]
pub struct PageView {
    pub selected: usize,
}

impl PageView {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.selected = 0;
    }

    pub fn move_end(&mut self, total: usize) {
        self.selected = total.saturating_sub(1);
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub page: Page,
    pub projects_view: PageView,
    pub writings_view: PageView,
    pub videos_view: PageView,
    pub theme: ThemeManager,
    pub matcher: SequenceMatcher,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig, store: Box<dyn PreferenceStore>) -> Self {
        let matcher = SequenceMatcher::new(&config.secret.sequence);
        let theme = ThemeManager::load(store, config.ui.default_theme);
        Self {
            config,
            page: Page::Home,
            projects_view: PageView::default(),
            writings_view: PageView::default(),
            videos_view: PageView::default(),
            theme,
            matcher,
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_count: 0,
        }
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
        self.status_message = None;
        self.dirty = true;
    }

    /// URL behind the current selection, if the page has one.
    pub fn selected_url(&self) -> Option<String> {
        match self.page {
            Page::Projects => self
                .config
                .projects
                .get(self.projects_view.selected)
                .map(|p| p.url.clone()),
            Page::Writings => self
                .config
                .writings
                .get(self.writings_view.selected)
                .map(|w| w.url.clone()),
            Page::Videos => self
                .config
                .videos
                .get(self.videos_view.selected)
                .map(|v| format!("https://youtu.be/{}", v.id)),
            _ => None,
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        "Tab/1-6 pages | Up/Down select | Enter link | t theme | q quit".to_string()
    }
}
