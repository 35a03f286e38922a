use crate::{components::layout::Layout, state::theme::use_theme};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let current = use_theme().current();

    view! {
        <Layout>
            <div class="text-center">
                <h2 class="text-4xl font-extrabold text-fg sm:text-5xl">
                    "Shade"
                </h2>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg">
                    "A color scheme that remembers your choice."
                </p>
                <p class="mt-5 text-sm text-fg-muted">
                    {move || format!("Current theme: {}", current.get().as_str())}
                </p>
            </div>
        </Layout>
    }
}
