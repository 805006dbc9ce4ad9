use serde::Serialize;

/// An admin account. Only the salted hash of the password is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // "salt$hex(sha256(salt ‖ password))"
}
