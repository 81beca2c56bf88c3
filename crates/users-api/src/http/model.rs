use crate::model::{User, UserCreate, UserId, UserUpdate};
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for writes. Attributes may arrive wrapped under `"user"`
/// (`{"user": {"name": ...}}`) or as a bare object (`{"name": ...}`).
///
/// A body carrying a `"user"` key is always read as wrapped, so a malformed
/// wrapped payload is a deserialization error rather than an empty bare one.
#[derive(Debug)]
pub enum UserParams<T> {
    Wrapped { user: T },
    Bare(T),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for UserParams<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut body = Value::deserialize(deserializer)?;
        let wrapped = body.as_object_mut().and_then(|attrs| attrs.remove("user"));

        let params = match wrapped {
            Some(user) => serde_json::from_value(user).map(|user| UserParams::Wrapped { user }),
            None => serde_json::from_value(body).map(UserParams::Bare),
        };
        params.map_err(D::Error::custom)
    }
}

impl<T> UserParams<T> {
    pub fn into_inner(self) -> T {
        match self {
            UserParams::Wrapped { user } => user,
            UserParams::Bare(attrs) => attrs,
        }
    }
}

/// Attributes for a new user. Missing fields count as blank.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl From<CreateUserRequest> for UserCreate {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest { name, email } = value;
        UserCreate { name, email }
    }
}

/// Attributes to change. Absent or `null` fields are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(value: UpdateUserRequest) -> Self {
        let UpdateUserRequest { name, email } = value;
        UserUpdate { name, email }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User { id, name, email } = value;
        Self { id, name, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_params() {
        let params: UserParams<CreateUserRequest> =
            serde_json::from_str(r#"{"user": {"name": "John Doe", "email": "john@example.com"}}"#)
                .unwrap();
        let create = UserCreate::from(params.into_inner());
        assert_eq!(create.name, "John Doe");
        assert_eq!(create.email, "john@example.com");
    }

    #[test]
    fn test_bare_params_with_missing_field() {
        let params: UserParams<CreateUserRequest> =
            serde_json::from_str(r#"{"name": "John Doe"}"#).unwrap();
        let create = UserCreate::from(params.into_inner());
        assert_eq!(create.name, "John Doe");
        assert_eq!(create.email, "");
    }

    #[test]
    fn test_partial_update_params() {
        let params: UserParams<UpdateUserRequest> =
            serde_json::from_str(r#"{"user": {"name": "Jane Doe", "email": null}}"#).unwrap();
        let update = UserUpdate::from(params.into_inner());
        assert_eq!(update.name.as_deref(), Some("Jane Doe"));
        assert!(update.email.is_none());
    }

    #[test]
    fn test_malformed_wrapped_params_are_rejected() {
        for body in [
            r#"{"user": {"name": 5}}"#,
            r#"{"user": null}"#,
            r#"{"user": "x"}"#,
        ] {
            assert!(serde_json::from_str::<UserParams<UpdateUserRequest>>(body).is_err(), "{body}");
            assert!(serde_json::from_str::<UserParams<CreateUserRequest>>(body).is_err(), "{body}");
        }
    }

    #[test]
    fn test_response_shape() {
        let user = User::new(UserId(3), "John Doe", "john@example.com");
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "John Doe", "email": "john@example.com"})
        );
    }
}
