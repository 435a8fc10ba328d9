//! Target-independent logic for the epidural information page.
//!
//! Nothing in this crate touches the DOM, so every widget state machine can
//! be exercised by plain `cargo test`. The `frontend` crate binds these
//! types to the page.

pub mod domain;
pub mod shared;
