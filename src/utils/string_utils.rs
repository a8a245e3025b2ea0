//! String helpers shared by the converter and the front-matter writer

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Respects UTF-8 character boundaries and never panics.
///
/// # Examples
/// ```
/// # use blog_transfer::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("Ünïcödé", 3), "Ünï");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Keep ASCII letters, digits, spaces and hyphens; drop everything else
///
/// Used for every string written into front matter (title, tags, categories)
/// so quoting and YAML flow syntax never break.
///
/// # Examples
/// ```
/// # use blog_transfer::utils::string_utils::sanitize;
/// assert_eq!(sanitize("C#: \"Tips\" & tricks!"), "C Tips  tricks");
/// assert_eq!(sanitize("ASP.NET-MVC 5"), "ASPNET-MVC 5");
/// ```
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect()
}
