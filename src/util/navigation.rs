//! Opening external tile links.

/// Open `url` in a new browsing context without handing it our window.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
