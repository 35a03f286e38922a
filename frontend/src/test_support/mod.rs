#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

#[cfg(not(target_arch = "wasm32"))]
pub mod helpers {
    use crate::state::theme::{Theme, ThemeState};
    use leptos::*;

    /// Seeds the theme context with a known displayed state. Must run inside
    /// a reactive runtime, i.e. within the closure given to
    /// [`super::ssr::render_to_string`].
    pub fn provide_theme_state(theme: Theme) -> ThemeState {
        let state = ThemeState::with_initial(theme);
        provide_context(state);
        state
    }
}
