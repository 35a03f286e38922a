#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::state::theme::Theme;

    const DARK_CLASS: &str = "dark";

    pub fn apply_document_class(theme: Theme) {
        let window = match web_sys::window() {
            Some(win) => win,
            None => return,
        };

        let document = match window.document() {
            Some(doc) => doc,
            None => return,
        };

        let root = match document.document_element() {
            Some(node) => node,
            None => return,
        };

        let list = root.class_list();
        let result = if theme == Theme::Dark {
            list.add_1(DARK_CLASS)
        } else {
            list.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            log::warn!("Could not update the {DARK_CLASS} class on the document root");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::apply_document_class;

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_class(_theme: crate::state::theme::Theme) {}
