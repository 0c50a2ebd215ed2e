//! Admin image upload rules

use luxe_shared::utils::safe_filename;
use uuid::Uuid;

/// Accepted image MIME types and the extension each is stored under.
pub const ALLOWED_IMAGE_TYPES: [(&str, &str); 4] = [
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/webp", ".webp"),
    ("image/gif", ".gif"),
];

pub fn extension_for(content_type: &str) -> Option<&'static str> {
    ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(mime, _)| *mime == content_type)
        .map(|(_, ext)| *ext)
}

/// `{stem}_{uuid-hex}{ext}` built from a sanitized client filename.
pub fn stored_filename(original: Option<&str>, ext: &str) -> String {
    let safe = safe_filename(original.unwrap_or("image"));
    let stem = match safe.rfind('.') {
        Some(0) | None => safe.as_str(),
        Some(idx) => &safe[..idx],
    };
    let stem = if stem.is_empty() { "image" } else { stem };
    format!("{}_{}{}", stem, Uuid::new_v4().simple(), ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lookup() {
        assert_eq!(extension_for("image/png"), Some(".png"));
        assert_eq!(extension_for("image/svg+xml"), None);
    }

    #[test]
    fn test_stored_filename() {
        let name = stored_filename(Some("../My Ring.PNG"), ".png");
        assert!(name.starts_with("My_Ring_"));
        assert!(name.ends_with(".png"));
        assert_eq!(name.len(), "My_Ring_".len() + 32 + ".png".len());

        assert!(stored_filename(None, ".jpg").starts_with("image_"));
        assert!(stored_filename(Some(".hidden"), ".gif").starts_with(".hidden_"));
    }
}
