//! Page-level components. The launcher is a single page.

pub mod launcher;
