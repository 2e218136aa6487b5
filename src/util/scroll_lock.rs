//! Page scroll lock while the modal is open.

/// Add or remove the `modal-open` class on `<body>`.
pub fn set(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        if let Some(body) = body {
            let class_list = body.class_list();
            if locked {
                let _ = class_list.add_1("modal-open");
            } else {
                let _ = class_list.remove_1("modal-open");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}
