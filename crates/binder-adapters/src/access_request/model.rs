//! Validated domain model of an access request.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Invariant violations of the value objects below.
///
/// The `Display` text becomes the validation message recorded by the binder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("'{0}' is not a valid identifier.")]
    InvalidUuid(String),

    #[error("'{0}' is not a valid email address.")]
    InvalidEmail(String),

    #[error("'{0}' is not a valid role id: expected 2 to 8 uppercase letters.")]
    InvalidRoleId(String),

    #[error("'{0}' is not a valid tag: expected lowercase letters, digits or '-'.")]
    InvalidTag(String),
}

pub fn parse_user_id(raw: String) -> Result<Uuid, ModelError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ModelError::InvalidUuid(raw))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: String) -> Result<Self, ModelError> {
        let valid = match raw.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        };
        if valid {
            Ok(Self(raw))
        } else {
            Err(ModelError::InvalidEmail(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoleId(String);

impl RoleId {
    pub fn parse(raw: String) -> Result<Self, ModelError> {
        let ok = (2..=8).contains(&raw.len()) && raw.chars().all(|c| c.is_ascii_uppercase());
        if ok {
            Ok(Self(raw))
        } else {
            Err(ModelError::InvalidRoleId(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let ok = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if ok {
            Ok(Self(raw.to_owned()))
        } else {
            Err(ModelError::InvalidTag(raw.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub user_name: UserName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub requester: User,
    pub roles: Vec<Role>,
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_local_part_and_dotted_domain() {
        assert!(EmailAddress::parse("ada@example.com".into()).is_ok());
        assert!(EmailAddress::parse("ada.example.com".into()).is_err());
        assert!(EmailAddress::parse("@example.com".into()).is_err());
        assert!(EmailAddress::parse("ada@localhost".into()).is_err());
    }

    #[test]
    fn role_id_is_short_uppercase() {
        assert!(RoleId::parse("ADM".into()).is_ok());
        assert_eq!(
            RoleId::parse("adm".into()),
            Err(ModelError::InvalidRoleId("adm".into()))
        );
        assert!(RoleId::parse("A".into()).is_err());
        assert!(RoleId::parse("ABCDEFGHI".into()).is_err());
    }

    #[test]
    fn tag_is_kebab_case() {
        assert!(Tag::parse("on-call").is_ok());
        assert!(Tag::parse("On Call").is_err());
        assert!(Tag::parse("").is_err());
    }

    #[test]
    fn user_id_message_quotes_input() {
        let err = parse_user_id("not-a-uuid".into()).unwrap_err();
        assert_eq!(err.to_string(), "'not-a-uuid' is not a valid identifier.");
    }
}
