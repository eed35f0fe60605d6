//! Vote value rules.
//!
//! A vote is a signed preference linking one user to one track. The only
//! legal magnitudes are +1 (upvote) and -1 (downvote); there is no neutral
//! vote. The storage layer backs this with a CHECK constraint, but the rule
//! is enforced here first so bad input never reaches a transaction.

use crate::error::CoreError;

/// Value of an upvote.
pub const UPVOTE: i16 = 1;
/// Value of a downvote.
pub const DOWNVOTE: i16 = -1;

/// Check that a vote value is exactly +1 or -1.
pub fn validate_vote_value(value: i16) -> Result<(), CoreError> {
    if value == UPVOTE || value == DOWNVOTE {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Vote value must be -1 or 1, got {value}"
        )))
    }
}
