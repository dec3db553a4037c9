//! Stored-file naming for uploaded images.
//!
//! Uploads live in a single flat directory and are served from
//! [`PUBLIC_PREFIX`]. A stored name is `{unix_millis}-{sanitized original}`,
//! which keeps names unique in practice and human-traceable back to the
//! upload.

/// URL prefix under which stored files are publicly served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Sanitize a client-supplied file name for storage.
///
/// Directory components are stripped so the name can never escape the upload
/// directory, and every run of whitespace collapses to a single hyphen. An
/// empty result falls back to `"image"`.
pub fn sanitize_original_name(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();

    let mut out = String::with_capacity(base.len());
    let mut in_whitespace = false;
    for ch in base.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }

    if out.is_empty() {
        out.push_str("image");
    }
    out
}

/// Build the on-disk name for an upload received at `now_millis`.
pub fn stored_name(now_millis: i64, original: &str) -> String {
    format!("{now_millis}-{}", sanitize_original_name(original))
}

/// Public URL for a stored file name.
pub fn public_url(stored: &str) -> String {
    format!("{PUBLIC_PREFIX}/{stored}")
}

/// Recover the stored file name from a public URL, if it is one of ours.
pub fn stored_name_from_url(url: &str) -> Option<&str> {
    url.strip_prefix(PUBLIC_PREFIX)?.strip_prefix('/')
}
