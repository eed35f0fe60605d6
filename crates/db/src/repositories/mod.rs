//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod artist_repo;
pub mod track_repo;
pub mod user_repo;
pub mod vote_repo;

pub use artist_repo::ArtistRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
