use crate::state::theme::{provide_theme, use_theme, Theme};
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current = theme_state.current();

    let on_click = move |_| {
        theme_state.toggle();
    };

    view! {
        <button
            type="button"
            id="themeToggle"
            class="px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover focus:outline-none focus:ring-2 focus:ring-primary-500"
            on:click=on_click
            aria-label="Toggle theme"
            aria-pressed=move || (current.get() == Theme::Dark).to_string()
        >
            {move || current.get().toggle_label()}
        </button>
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme_state = provide_theme();

    view! {
        <div class=move || theme_state.current().get().as_class()>
            {children()}
        </div>
    }
}
