//! User record model and DTOs.

use serde::{Deserialize, Serialize};
use taskdesk_core::error::validate_not_blank;
use taskdesk_core::types::DbId;
use validator::Validate;

use crate::table::Record;

/// A row from `users.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

impl Record for User {
    const ENTITY: &'static str = "User";
    const HEADERS: &'static [&'static str] = &["id", "name", "email"];

    fn id(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a user.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "name must be at most 100 characters")
    )]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

/// Client-facing view of a user. The email address is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_drops_email() {
        let user = User {
            id: 3,
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        assert_eq!(
            UserResponse::from(user),
            UserResponse {
                id: 3,
                name: "Ada".into()
            }
        );
    }

    #[test]
    fn create_reports_every_bad_field() {
        let input = CreateUser {
            name: String::new(),
            email: "not-an-email".into(),
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn whitespace_name_is_blank() {
        let input = CreateUser {
            name: "   ".into(),
            email: "grace@example.com".into(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.field_errors()["name"][0].code, "blank");
    }

    #[test]
    fn valid_user_passes() {
        let input = CreateUser {
            name: "Grace".into(),
            email: "grace@example.com".into(),
        };
        assert!(input.validate().is_ok());
    }
}
