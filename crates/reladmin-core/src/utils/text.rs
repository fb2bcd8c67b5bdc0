//! Text manipulation helpers used when deriving human-readable labels.

/// Capitalizes the first character of a string.
///
/// Only the first character changes; the rest of the string is left
/// untouched.
///
/// # Examples
///
/// ```
/// use reladmin_core::utils::text::capfirst;
///
/// assert_eq!(capfirst("hello world"), "Hello world");
/// assert_eq!(capfirst(""), "");
/// ```
pub fn capfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        let mut result = c.to_uppercase().to_string();
        result.extend(chars);
        result
    })
}

/// Turns a snake_case identifier into a column header.
///
/// Underscores become spaces and the first character is capitalized,
/// so `"written_by"` becomes `"Written by"`.
///
/// # Examples
///
/// ```
/// use reladmin_core::utils::text::underscore_label;
///
/// assert_eq!(underscore_label("written_by"), "Written by");
/// assert_eq!(underscore_label("title"), "Title");
/// ```
pub fn underscore_label(s: &str) -> String {
    capfirst(&s.replace('_', " "))
}
