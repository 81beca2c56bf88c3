//! [`ActorEntity`] implementation for the [`User`] domain type.

use super::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use resource_actor::{ActorEntity, Violations};

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.email))
    }

    /// `name` and `email` must both be present (not empty, not only whitespace).
    fn validate(&self) -> Violations {
        let mut violations = Violations::new();
        violations
            .require_present("name", &self.name)
            .require_present("email", &self.email);
        violations
    }

    /// Applies whichever of `name` and `email` the update carries.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> User {
        User::new(UserId(1), "John Doe", "john@example.com")
    }

    #[test]
    fn test_valid_user() {
        assert!(john().validate().is_valid());
    }

    #[test]
    fn test_blank_fields_are_violations() {
        let user = User::new(UserId(1), "", " \t");
        let violations = user.validate();
        assert_eq!(violations.len(), 2);
        assert!(violations.has_field("name"));
        assert!(violations.has_field("email"));
    }

    #[tokio::test]
    async fn test_partial_update_touches_only_given_fields() {
        let mut user = john();
        let update = UserUpdate {
            name: Some("Jane Doe".into()),
            email: None,
        };
        user.on_update(update, &()).await.unwrap();

        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.id, UserId(1));
    }
}
