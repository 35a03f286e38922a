use leptos::*;

use crate::utils::storage;

/// localStorage key holding the persisted preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Maps a stored preference onto a theme. Anything other than `"dark"`
    /// renders light, which is also how absent values behave.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn inverse(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label shown on the toggle control: names the theme a press switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark",
            Theme::Dark => "Light",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
}

impl ThemeState {
    /// Restores the persisted preference, defaulting to light when the key
    /// is absent or storage cannot be read.
    pub fn new() -> Self {
        let stored = match storage::get_item(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Could not read theme preference: {err}");
                None
            }
        };
        Self::with_initial(Theme::from_stored(stored.as_deref()))
    }

    pub fn with_initial(theme: Theme) -> Self {
        Self {
            theme: create_rw_signal(theme),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.apply_to_dom();
    }

    /// Persists the inverse of the displayed theme, then applies it. The
    /// write comes first so storage and the document class agree the moment
    /// the class flips.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().inverse();
        if let Err(err) = storage::set_item(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("Could not persist theme preference: {err}");
        }
        self.set_theme(next);
    }

    fn apply_to_dom(&self) {
        crate::theme::apply_document_class(self.theme.get_untracked());
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new();
    provide_context(state);
    state.apply_to_dom();
    state
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn from_stored_defaults_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn from_stored_reads_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn from_stored_treats_unrecognized_values_as_light() {
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    }

    #[test]
    fn inverse_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.inverse().inverse(), theme);
        }
    }

    #[test]
    fn toggle_label_names_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Dark");
        assert_eq!(Theme::Dark.toggle_label(), "Light");
    }

    #[test]
    fn stored_string_round_trips_through_from_stored() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn toggle_flips_displayed_theme() {
        with_runtime(|| {
            let state = ThemeState::with_initial(Theme::Light);
            state.toggle();
            assert_eq!(state.current().get_untracked(), Theme::Dark);
        });
    }

    #[test]
    fn double_toggle_restores_original() {
        with_runtime(|| {
            for start in [Theme::Light, Theme::Dark] {
                let state = ThemeState::with_initial(start);
                state.toggle();
                state.toggle();
                assert_eq!(state.current().get_untracked(), start);
            }
        });
    }

    #[test]
    fn set_theme_updates_current() {
        with_runtime(|| {
            let state = ThemeState::with_initial(Theme::Light);
            state.set_theme(Theme::Dark);
            assert_eq!(state.current().get_untracked(), Theme::Dark);
        });
    }

    #[test]
    fn new_defaults_to_light_without_storage() {
        with_runtime(|| {
            let state = ThemeState::new();
            assert_eq!(state.current().get_untracked(), Theme::Light);
        });
    }

    #[test]
    fn use_theme_returns_provided_state() {
        with_runtime(|| {
            let provided = provide_theme();
            provided.set_theme(Theme::Dark);
            assert_eq!(use_theme().current().get_untracked(), Theme::Dark);
        });
    }
}
