use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{components::theme::ThemeProvider, pages::home::HomePage};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Shade"/>
        <ThemeProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
