// ============================================================================
// Luxe Core - Admin Credential & Session
// File: crates/luxe-core/src/domain/admin.rs
// Description: The single administrator's password hash and live session
// ============================================================================

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};

/// Keys of the two rows held by the admin store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminKey {
    Password,
    Session,
}

impl AdminKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminKey::Password => "password",
            AdminKey::Session => "session",
        }
    }
}

/// Stored as `{ key: "password", value: <hash-string> }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredential {
    pub password_hash: String,
}

impl AdminCredential {
    pub fn new(password_hash: String) -> Self {
        Self { password_hash }
    }

    /// `None` when the stored value is not a string.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(|h| Self::new(h.to_string()))
    }

    pub fn to_value(&self) -> Value {
        Value::String(self.password_hash.clone())
    }
}

/// Stored as `{ key: "session", value: { token, expiresAt } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub token: String,
    #[serde(serialize_with = "serialize_expiry")]
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn issue(token: String, ttl: Duration) -> Self {
        Self {
            token,
            expires_at: Utc::now() + ttl,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn expires_at_iso(&self) -> String {
        format_expiry(&self.expires_at)
    }

    pub fn to_value(&self) -> Value {
        json!({
            "token": self.token,
            "expiresAt": self.expires_at_iso(),
        })
    }
}

fn format_expiry(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

fn serialize_expiry<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_expiry(at))
}

/// Parse a stored `expiresAt`.
///
/// Accepts RFC 3339 / ISO-8601 with `Z` or a numeric offset, with `T` or a
/// space separator, and bare timestamps or dates which are taken as UTC.
pub fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = raw.replace('Z', "+00:00");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }

    const WITH_OFFSET: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%.f%z",
    ];
    for fmt in WITH_OFFSET {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    const NAIVE: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in NAIVE {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
