//! Networking modules for the hosted backend and the automation webhook.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` talks to the hosted auth API, `data` to the hosted database,
//! `webhook` to the automation endpoint, and `types` defines the shared wire
//! schema.

pub mod auth;
pub mod auth_events;
pub mod data;
pub mod types;
pub mod webhook;
