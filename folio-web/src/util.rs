use folio_client::{FileKind, NewFile, Settings};
use yew::prelude::*;

use crate::ui::Page;

/// Callback for an `<a>` that switches page without reloading
pub fn nav_link(on_navigate: &Callback<Page>, page: Page) -> Callback<MouseEvent> {
    on_navigate.reform(move |e: MouseEvent| {
        e.prevent_default();
        page.clone()
    })
}

pub fn input_value(e: InputEvent) -> String {
    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: InputEvent) -> String {
    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
    input.value()
}

pub fn select_value(e: Event) -> String {
    let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
    input.value()
}

/// Reads a browser file list, creating local object URLs to preview images
pub fn new_files(list: Option<web_sys::FileList>) -> Vec<NewFile> {
    let list = match list {
        Some(l) => l,
        None => return Vec::new(),
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|f| {
            let mime = f.type_();
            let preview = match FileKind::from_mime(&mime) {
                FileKind::Image => match web_sys::Url::create_object_url_with_blob(&f) {
                    Ok(url) => Some(url),
                    Err(e) => {
                        tracing::warn!(name = %f.name(), err = ?e, "failed creating preview url");
                        None
                    }
                },
                _ => None,
            };
            NewFile {
                name: f.name(),
                mime,
                size: f.size() as u64,
                preview,
            }
        })
        .collect()
}

pub fn revoke_preview(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::warn!(%url, err = ?e, "failed revoking preview url");
    }
}

/// Reads the JSON settings block embedded in `index.html`, falling back to the
/// defaults when it is missing or malformed
pub fn load_settings() -> Settings {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("folio-settings"))
        .and_then(|e| e.text_content());
    let json = match json {
        Some(json) => json,
        None => {
            tracing::debug!("no settings block in page, using defaults");
            return Settings::default();
        }
    };
    Settings::parse(&json).unwrap_or_else(|e| {
        tracing::warn!("ignoring page settings: {:?}", e);
        Settings::default()
    })
}
