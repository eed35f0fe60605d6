//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `trackvote_db` and
//! map errors via [`crate::error::AppError`].

pub mod artists;
pub mod auth;
pub mod tracks;
pub mod votes;
