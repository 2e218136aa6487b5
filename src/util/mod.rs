//! Utility helpers isolating browser/environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! All web-sys glue lives here behind the `csr` feature so pages and
//! components stay testable on the host, where every helper is a
//! deterministic no-op.

pub mod clipboard;
pub mod dark_mode;
pub mod navigation;
pub mod scroll_lock;
