//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `modal`, `splash`, `toast`) so individual
//! components can depend on small focused models. Each struct is provided as
//! an `RwSignal` context by the root `App` component.

pub mod modal;
pub mod splash;
pub mod toast;
pub mod ui;
