//! Storage key generation.
//!
//! Keys follow the `pdfs/{uuid}_{name}` layout: a fresh 128-bit random token
//! in front of the sanitized original base name, so two uploads with the same
//! filename never collide and no client-controlled path component reaches the
//! backend.

use uuid::Uuid;

/// Prefix for every stored object.
const KEY_PREFIX: &str = "pdfs";

/// Base name used when sanitization leaves nothing usable.
const FALLBACK_BASENAME: &str = "upload.pdf";

/// Longest base name carried into a key.
const MAX_BASENAME_LEN: usize = 128;

/// Reduce an arbitrary client-supplied filename to a safe base name.
///
/// Directory components are dropped, characters outside the allow-list
/// (alphanumerics, dot, dash, underscore) are removed, and the result is
/// length-capped. Never fails: unusable input falls back to a fixed name.
pub fn sanitize_basename(filename: &str) -> String {
    let name = std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    let safe: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .take(MAX_BASENAME_LEN)
        .collect();

    if safe.is_empty() || safe.chars().all(|c| c == '.') {
        FALLBACK_BASENAME.to_string()
    } else {
        safe
    }
}

/// Build the storage key for a sanitized base name.
pub fn storage_key(basename: &str) -> String {
    format!("{KEY_PREFIX}/{}_{basename}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_names_get_distinct_keys() {
        let a = storage_key("report.pdf");
        let b = storage_key("report.pdf");
        assert_ne!(a, b);
        assert!(a.starts_with("pdfs/"));
        assert!(a.ends_with("_report.pdf"));
    }

    #[test]
    fn directory_components_are_stripped() {
        assert_eq!(sanitize_basename("../../../etc/passwd"), "passwd");
        assert_eq!(sanitize_basename("/tmp/evil.pdf"), "evil.pdf");
        assert_eq!(sanitize_basename("nested/dir/report.pdf"), "report.pdf");
    }

    #[test]
    fn unsafe_characters_are_removed() {
        assert_eq!(sanitize_basename("my report (final).pdf"), "myreportfinal.pdf");
        assert_eq!(sanitize_basename("test<script>.pdf"), "testscript.pdf");
        assert_eq!(sanitize_basename("file-name_123.pdf"), "file-name_123.pdf");
    }

    #[test]
    fn unusable_names_fall_back() {
        assert_eq!(sanitize_basename(""), FALLBACK_BASENAME);
        assert_eq!(sanitize_basename("///"), FALLBACK_BASENAME);
        assert_eq!(sanitize_basename("??!!"), FALLBACK_BASENAME);
        assert_eq!(sanitize_basename("..."), FALLBACK_BASENAME);
    }

    #[test]
    fn long_names_are_capped() {
        let long = "a".repeat(300) + ".pdf";
        let safe = sanitize_basename(&long);
        assert_eq!(safe.len(), MAX_BASENAME_LEN);
    }
}
