//! Domain layer for the trackvote platform.
//!
//! Holds the types and rules shared by the storage and HTTP layers:
//! entity id/timestamp aliases, the error taxonomy, vote value rules,
//! ranking periods, and score arithmetic. No I/O happens here.

pub mod error;
pub mod ranking;
pub mod score;
pub mod types;
pub mod vote;
