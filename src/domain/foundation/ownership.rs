//! Ownership trait for member-owned records.
//!
//! Survey results and history entries belong to exactly one member.
//! Handlers call `check_ownership` before exposing or mutating a record
//! that was looked up by id rather than by member.

use super::{DomainError, ErrorCode, UserId};

/// Trait for records that have a single owning member.
pub trait OwnedByUser {
    /// Returns the ID of the member who owns this record.
    fn owner_id(&self) -> &UserId;

    /// Checks if the given member is the owner.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Validates ownership, returning a `Forbidden` error if the member is not the owner.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "Member does not own this resource",
            )
            .with_detail("owner_id", self.owner_id().to_string())
            .with_detail("requested_by", user_id.to_string()))
        }
    }
}
