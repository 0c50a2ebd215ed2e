//! Utility functions

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::constants::MAX_FILENAME_LENGTH;

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time as an ISO-8601 string with an explicit `+00:00` offset.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9._-]").expect("static regex"))
}

/// Reduce a client supplied filename to its last path segment made of
/// `[A-Za-z0-9._-]` only.
pub fn safe_filename(name: &str) -> String {
    let name = name.trim().replace('\\', "/");
    let last = name.rsplit('/').next().unwrap_or("");
    let cleaned = unsafe_chars().replace_all(last, "_");
    let truncated: String = cleaned.chars().take(MAX_FILENAME_LENGTH).collect();
    if truncated.is_empty() {
        "image".to_string()
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_filename_strips_paths() {
        assert_eq!(safe_filename("C:\\Users\\me\\ring photo.png"), "ring_photo.png");
        assert_eq!(safe_filename("../../etc/passwd"), "passwd");
        assert_eq!(safe_filename("   "), "image");
        assert_eq!(safe_filename("dir/"), "image");
    }

    #[test]
    fn test_safe_filename_truncates() {
        let long = "a".repeat(300);
        assert_eq!(safe_filename(&long).len(), MAX_FILENAME_LENGTH);
    }

    #[test]
    fn test_now_iso_has_offset() {
        assert!(now_iso().ends_with("+00:00"));
    }
}
