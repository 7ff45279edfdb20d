/// Canonicalizes a raw company identifier into the cross-source join key:
/// lowercased, with everything that is not an ASCII letter or digit removed.
/// A missing cell yields the empty string. Two records refer to the same
/// company iff their normalized slugs are byte-equal; distinct raw slugs that
/// collapse to the same key merge silently.
pub fn normalize_slug(raw: Option<&str>) -> String {
    match raw {
        Some(slug) => slug
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect(),
        None => String::new(),
    }
}
