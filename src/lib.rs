//! Online patient portal for Primary Oaks Surgery.
//!
//! The core of the crate is the credential validation and authentication
//! subsystem: the deterministic password-strength policy, the registration
//! and login flows, and the session manager. HTML rendering, flash messages
//! and persistence sit behind adapters around that core.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
