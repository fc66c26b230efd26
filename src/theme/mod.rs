//! Theme selection and the secret-theme toggle machine.
//!
//! The ordinary themes (light, dark, system) persist across runs through the
//! injected preference store. The doom theme is different: it is unlocked by
//! a key sequence, holds the previously active theme in the store while it is
//! on, and deliberately never survives a restart.

use crate::prefs::PreferenceStore;
use serde::{Deserialize, Serialize};

const ACTIVE_KEY: &str = "theme";
const PREVIOUS_KEY: &str = "previous_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Light,
    Dark,
    System,
    Doom,
}

impl ThemeId {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Light => "light",
            ThemeId::Dark => "dark",
            ThemeId::System => "system",
            ThemeId::Doom => "doom",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeId::Light),
            "dark" => Some(ThemeId::Dark),
            "system" => Some(ThemeId::System),
            "doom" => Some(ThemeId::Doom),
            _ => None,
        }
    }
}

/// Which way a sequence match flipped the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    EnteredSpecial,
    LeftSpecial,
}

/// Two-state machine over the active theme.
///
/// NORMAL: any ordinary theme is active and no previous preference is saved.
/// SPECIAL: doom is active and the store holds the theme to come back to.
/// The store holds `previous_theme` exactly while SPECIAL is active.
pub struct ThemeManager {
    store: Box<dyn PreferenceStore>,
    active: ThemeId,
}

impl ThemeManager {
    pub const DEFAULT: ThemeId = ThemeId::System;

    /// Load from the store. A doom marker found at startup is stale (the
    /// machine never writes one, but a crash of an older build or a hand
    /// edit can leave it) and is corrected on the spot: the special theme
    /// must never survive a restart.
    pub fn load(store: Box<dyn PreferenceStore>, fallback: ThemeId) -> Self {
        let active = store
            .get(ACTIVE_KEY)
            .and_then(|v| ThemeId::parse(&v))
            .unwrap_or(fallback);
        let mut mgr = Self { store, active };
        if mgr.active == ThemeId::Doom {
            tracing::info!("stale doom theme found at startup, reverting");
            mgr.leave_special();
        }
        mgr
    }

    pub fn active(&self) -> ThemeId {
        self.active
    }

    pub fn special_active(&self) -> bool {
        self.active == ThemeId::Doom
    }

    /// Flip between NORMAL and SPECIAL in response to a sequence match.
    pub fn toggle_special(&mut self) -> Transition {
        if self.special_active() {
            self.leave_special();
            Transition::LeftSpecial
        } else {
            self.enter_special();
            Transition::EnteredSpecial
        }
    }

    /// Cycle light → dark → system. While SPECIAL is active this first
    /// restores the saved theme, so the previous-preference invariant holds
    /// on every path out of doom.
    pub fn cycle(&mut self) -> ThemeId {
        if self.special_active() {
            self.leave_special();
            return self.active;
        }
        let next = match self.active {
            ThemeId::Light => ThemeId::Dark,
            ThemeId::Dark => ThemeId::System,
            ThemeId::System | ThemeId::Doom => ThemeId::Light,
        };
        self.set_active(next);
        next
    }

    fn enter_special(&mut self) {
        self.store.set(PREVIOUS_KEY, self.active.as_str());
        // The doom marker itself is not persisted, so SPECIAL cannot
        // survive a restart.
        self.active = ThemeId::Doom;
        tracing::info!("doom theme unlocked");
    }

    fn leave_special(&mut self) {
        // A missing saved preference is a normal case, not an error.
        let previous = self
            .store
            .get(PREVIOUS_KEY)
            .and_then(|v| ThemeId::parse(&v))
            .unwrap_or(Self::DEFAULT);
        self.store.remove(PREVIOUS_KEY);
        self.set_active(previous);
        tracing::info!(theme = previous.as_str(), "doom theme dismissed");
    }

    fn set_active(&mut self, theme: ThemeId) {
        self.active = theme;
        if theme != ThemeId::Doom {
            self.store.set(ACTIVE_KEY, theme.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;

    fn manager_with(active: Option<&str>, previous: Option<&str>) -> ThemeManager {
        let mut prefs = MemoryPrefs::new();
        if let Some(v) = active {
            prefs.set(ACTIVE_KEY, v);
        }
        if let Some(v) = previous {
            prefs.set(PREVIOUS_KEY, v);
        }
        ThemeManager::load(Box::new(prefs), ThemeManager::DEFAULT)
    }

    #[test]
    fn test_enter_special_saves_previous() {
        let mut mgr = manager_with(Some("dark"), None);
        assert_eq!(mgr.toggle_special(), Transition::EnteredSpecial);
        assert_eq!(mgr.active(), ThemeId::Doom);
        assert_eq!(mgr.store.get(PREVIOUS_KEY), Some("dark".to_string()));
        // The doom marker is never written as the active theme.
        assert_eq!(mgr.store.get(ACTIVE_KEY), Some("dark".to_string()));
    }

    #[test]
    fn test_leave_special_restores_and_clears() {
        let mut mgr = manager_with(Some("light"), None);
        mgr.toggle_special();
        assert_eq!(mgr.toggle_special(), Transition::LeftSpecial);
        assert_eq!(mgr.active(), ThemeId::Light);
        assert_eq!(mgr.store.get(PREVIOUS_KEY), None);
        assert_eq!(mgr.store.get(ACTIVE_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        for start in [ThemeId::Light, ThemeId::Dark, ThemeId::System] {
            let mut mgr = manager_with(Some(start.as_str()), None);
            mgr.toggle_special();
            mgr.toggle_special();
            assert_eq!(mgr.active(), start);
        }
    }

    #[test]
    fn test_previous_present_iff_special() {
        let mut mgr = manager_with(Some("dark"), None);
        assert_eq!(mgr.store.get(PREVIOUS_KEY), None);
        mgr.toggle_special();
        assert!(mgr.store.get(PREVIOUS_KEY).is_some());
        mgr.toggle_special();
        assert_eq!(mgr.store.get(PREVIOUS_KEY), None);
    }

    #[test]
    fn test_missing_previous_falls_back_to_default() {
        // SPECIAL with no saved preference: revert uses the default theme.
        let mut mgr = manager_with(Some("dark"), None);
        mgr.toggle_special();
        mgr.store.remove(PREVIOUS_KEY);
        mgr.toggle_special();
        assert_eq!(mgr.active(), ThemeManager::DEFAULT);
    }

    #[test]
    fn test_stale_doom_marker_corrected_at_load() {
        let mgr = manager_with(Some("doom"), Some("light"));
        assert_eq!(mgr.active(), ThemeId::Light);
        assert_eq!(mgr.store.get(PREVIOUS_KEY), None);
        assert_eq!(mgr.store.get(ACTIVE_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_stale_doom_marker_without_previous_uses_default() {
        let mgr = manager_with(Some("doom"), None);
        assert_eq!(mgr.active(), ThemeManager::DEFAULT);
    }

    #[test]
    fn test_empty_store_uses_fallback() {
        let mgr = ThemeManager::load(Box::new(MemoryPrefs::new()), ThemeId::Dark);
        assert_eq!(mgr.active(), ThemeId::Dark);
    }

    #[test]
    fn test_garbled_value_uses_fallback() {
        let mgr = manager_with(Some("hotdog"), None);
        assert_eq!(mgr.active(), ThemeManager::DEFAULT);
    }

    #[test]
    fn test_cycle_order_and_persistence() {
        let mut mgr = manager_with(Some("light"), None);
        assert_eq!(mgr.cycle(), ThemeId::Dark);
        assert_eq!(mgr.cycle(), ThemeId::System);
        assert_eq!(mgr.cycle(), ThemeId::Light);
        assert_eq!(mgr.store.get(ACTIVE_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_cycle_out_of_special_restores_previous() {
        let mut mgr = manager_with(Some("dark"), None);
        mgr.toggle_special();
        assert_eq!(mgr.cycle(), ThemeId::Dark);
        assert_eq!(mgr.store.get(PREVIOUS_KEY), None);
    }
}
