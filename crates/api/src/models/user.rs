//! User domain types.
//!
//! The stored credential record and the public user view are separate types:
//! the password hash lives only on [`UserRecord`] and never reaches a client
//! response.

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use ironrail_core::{Email, Role, UserId};

/// A credential record as stored in the `users` collection.
///
/// Invariant: `password_hash` holds the Argon2id PHC string produced by the
/// password hasher, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique user ID, assigned at creation.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Unique lookup key.
    pub email: Email,
    /// Argon2id PHC-formatted hash.
    pub password_hash: String,
    /// Account role.
    pub role: Role,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Public user view (safe for client responses - no password material).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            user_id: record.user_id,
            name: record.name,
            email: record.email,
            role: record.role,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_record() -> UserRecord {
        UserRecord {
            user_id: UserId::new("u-1"),
            name: "Ada".to_owned(),
            email: Email::parse("ada@example.com").unwrap(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_owned(),
            role: Role::Customer,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_view_carries_no_password_material() {
        let user: User = sample_record().into();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["userId"], "u-1");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["role"], "customer");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_record_wire_format_is_camel_case() {
        let doc = mongodb::bson::to_document(&sample_record()).unwrap();

        assert!(doc.contains_key("userId"));
        assert!(doc.contains_key("passwordHash"));
        assert!(doc.contains_key("createdAt"));
        assert!(!doc.contains_key("password_hash"));
    }

    #[test]
    fn test_record_bson_roundtrip() {
        let record = sample_record();
        let doc = mongodb::bson::to_document(&record).unwrap();
        let back: UserRecord = mongodb::bson::from_document(doc).unwrap();

        assert_eq!(back.user_id, record.user_id);
        assert_eq!(back.email, record.email);
        assert_eq!(back.password_hash, record.password_hash);
        assert_eq!(back.role, record.role);
    }
}
