//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure form logic
//! from page and component code to improve reuse and testability.

pub mod auth;
pub mod clipboard;
pub mod debounce;
pub mod format;
pub mod selection;
pub mod submit;
pub mod toast;
pub mod validation;
