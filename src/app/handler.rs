use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::audio::Cue;
use crate::theme::Transition;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    // The doom flair animates; the status-bar clock only needs a refresh
    // once a minute (1200 ticks at 50ms).
    if state.theme.special_active() || state.tick_count % 1200 == 0 {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    // Doom mode turns every click into a blast, like the original site did.
    if state.theme.special_active() && matches!(mouse.kind, MouseEventKind::Down(_)) {
        return vec![Action::PlayCue { cue: Cue::Blast }];
    }
    vec![]
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // The secret sequence sees every key press first, navigation included.
    // A match toggles the theme and consumes the key.
    if let Some(id) = key_identifier(&key) {
        if state.matcher.push(&id) {
            return match state.theme.toggle_special() {
                Transition::EnteredSpecial => {
                    state.status_message = Some("RIP AND TEAR!".to_string());
                    vec![Action::PlayCue { cue: Cue::Unlocked }]
                }
                Transition::LeftSpecial => {
                    state.status_message = None;
                    vec![]
                }
            };
        }
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    let mut actions = Vec::new();
    match key.code {
        KeyCode::Char('q') => actions.push(Action::Quit),
        KeyCode::Char('t') => {
            let theme = state.theme.cycle();
            state.status_message = Some(format!("Theme: {}", theme.as_str()));
        }
        KeyCode::Tab => state.set_page(state.page.next()),
        KeyCode::BackTab => state.set_page(state.page.prev()),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            state.set_page(Page::ALL[idx]);
        }
        KeyCode::Up => move_selection(state, Move::Up),
        KeyCode::Down => move_selection(state, Move::Down),
        KeyCode::PageUp => {
            for _ in 0..5 {
                move_selection(state, Move::Up);
            }
        }
        KeyCode::PageDown => {
            for _ in 0..5 {
                move_selection(state, Move::Down);
            }
        }
        KeyCode::Home => move_selection(state, Move::First),
        KeyCode::End => move_selection(state, Move::Last),
        KeyCode::Enter => {
            if state.theme.special_active() {
                actions.push(Action::PlayCue { cue: Cue::Blast });
            }
            if let Some(url) = state.selected_url() {
                state.status_message = Some(url);
            }
        }
        _ => {}
    }
    actions
}

#[derive(Clone, Copy)]
enum Move {
    Up,
    Down,
    First,
    Last,
}

fn move_selection(state: &mut AppState, mv: Move) {
    let (view, total) = match state.page {
        Page::Projects => (&mut state.projects_view, state.config.projects.len()),
        Page::Writings => (&mut state.writings_view, state.config.writings.len()),
        Page::Videos => (&mut state.videos_view, state.config.videos.len()),
        _ => return,
    };
    match mv {
        Move::Up => view.move_up(),
        Move::Down => view.move_down(total),
        Move::First => view.move_home(),
        Move::Last => view.move_end(total),
    }
    state.status_message = None;
}

/// Normalized identifier for a key press, modeled on the `event.key` values
/// the sequence was originally typed with in a browser. Every key yields an
/// identifier, so an interleaved arrow or function key still breaks a
/// sequence in progress.
fn key_identifier(key: &KeyEvent) -> Option<String> {
    let id = match key.code {
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Esc => "escape".to_string(),
        KeyCode::Up => "arrowup".to_string(),
        KeyCode::Down => "arrowdown".to_string(),
        KeyCode::Left => "arrowleft".to_string(),
        KeyCode::Right => "arrowright".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Modifier(_) => return None,
        other => format!("{other:?}").to_lowercase(),
    };
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::prefs::MemoryPrefs;
    use crate::theme::ThemeId;

    fn test_state() -> AppState {
        AppState::new(AppConfig::default(), Box::new(MemoryPrefs::new()))
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_chars(state: &mut AppState, text: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        for c in text.chars() {
            actions.extend(press(state, KeyCode::Char(c)));
        }
        actions
    }

    #[test]
    fn test_secret_sequence_toggles_theme_and_plays_cue() {
        let mut state = test_state();
        assert_eq!(state.theme.active(), ThemeId::System);

        let actions = type_chars(&mut state, "idkfa");
        assert_eq!(state.theme.active(), ThemeId::Doom);
        assert!(actions.contains(&Action::PlayCue { cue: Cue::Unlocked }));

        // Typing it again reverts, without a cue.
        let actions = type_chars(&mut state, "idkfa");
        assert_eq!(state.theme.active(), ThemeId::System);
        assert!(!actions.contains(&Action::PlayCue { cue: Cue::Unlocked }));
    }

    #[test]
    fn test_interleaved_key_blocks_the_secret() {
        let mut state = test_state();
        type_chars(&mut state, "idxkfa");
        assert_eq!(state.theme.active(), ThemeId::System);
    }

    #[test]
    fn test_arrow_key_breaks_sequence_in_progress() {
        let mut state = test_state();
        type_chars(&mut state, "idk");
        press(&mut state, KeyCode::Up);
        type_chars(&mut state, "fa");
        assert_eq!(state.theme.active(), ThemeId::System);
    }

    #[test]
    fn test_tab_and_digits_switch_pages() {
        let mut state = test_state();
        assert_eq!(state.page, Page::Home);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.page, Page::Projects);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.page, Page::Home);
        press(&mut state, KeyCode::Char('5'));
        assert_eq!(state.page, Page::Contact);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('2'));
        let total = state.config.projects.len();
        for _ in 0..total + 3 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.projects_view.selected, total - 1);
        press(&mut state, KeyCode::Home);
        assert_eq!(state.projects_view.selected, 0);
    }

    #[test]
    fn test_enter_surfaces_selected_url() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('2'));
        press(&mut state, KeyCode::Enter);
        let url = state.config.projects[0].url.clone();
        assert_eq!(state.status_message, Some(url));
    }

    #[test]
    fn test_enter_blasts_in_doom_mode() {
        let mut state = test_state();
        type_chars(&mut state, "idkfa");
        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.contains(&Action::PlayCue { cue: Cue::Blast }));
    }

    #[test]
    fn test_quit_keys() {
        let mut state = test_state();
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);

        let mut state = test_state();
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = test_state();
        for c in "idkfa".chars() {
            let mut key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            key.kind = KeyEventKind::Release;
            handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        }
        assert_eq!(state.theme.active(), ThemeId::System);
    }

    #[test]
    fn test_tick_marks_dirty_only_in_doom() {
        let mut state = test_state();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);

        type_chars(&mut state, "idkfa");
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
    }
}
