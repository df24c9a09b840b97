//! Application state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain struct with pure transitions. `App` wraps the
//! shared ones in `RwSignal`s and provides them as context.

pub mod auth;
pub mod projects;
pub mod toast;
pub mod wizard;
