/// Turns a human label into an element id: whitespace runs become `-`,
/// anything outside `[a-z0-9_-]` is dropped.
pub fn sanitize_label(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;

    for c in label.trim().chars() {
        if c.is_whitespace() {
            pending_dash = true;
            continue;
        }
        if pending_dash {
            slug.push('-');
            pending_dash = false;
        }
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            slug.push(c.to_ascii_lowercase());
        }
    }

    slug
}

/// Slug validation
pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 255 {
        return false;
    }

    // Slug should only contain lowercase alphanumeric, hyphens, and underscores
    slug.chars().all(|c| {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || c == '-'
            || c == '_'
    })
}
