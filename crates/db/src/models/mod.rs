//! Row structs and create/update DTOs, one module per table.

pub mod artist;
pub mod track;
pub mod user;
pub mod vote;
