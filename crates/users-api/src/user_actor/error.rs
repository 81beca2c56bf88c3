//! Error types for the User actor.

use resource_actor::{FrameworkError, Violations};
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The write would leave the user without a required field.
    #[error("User validation error: {0}")]
    Validation(Violations),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::Invalid(violations) => UserError::Validation(violations),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_to_user_errors() {
        assert_eq!(
            UserError::from(FrameworkError::NotFound("7".into())),
            UserError::NotFound("7".into())
        );

        let mut violations = Violations::new();
        violations.require_present("name", "");
        assert_eq!(
            UserError::from(FrameworkError::Invalid(violations.clone())),
            UserError::Validation(violations)
        );

        assert_eq!(
            UserError::from(FrameworkError::ActorClosed),
            UserError::ActorCommunicationError("Actor closed".into())
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(UserError::NotFound("3".into()).to_string(), "User not found: 3");
    }
}
