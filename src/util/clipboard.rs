//! Clipboard helpers for the copy-page-link action.
//!
//! The async clipboard write is the only fallible operation in the app with
//! user-visible recovery: when it fails (permission denied, no clipboard),
//! the caller falls back to `manual_copy_prompt`.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Current page url, as the browser reports it.
pub fn page_url() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Write `text` to the system clipboard. Returns `false` on any failure.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .is_ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}

/// Synchronous fallback: a browser prompt pre-filled with the url so the
/// user can copy it by hand.
pub fn manual_copy_prompt(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.prompt_with_message_and_default("Copy this link manually:", url);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
