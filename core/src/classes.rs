//! Class-token merging
//!
//! Components keep a fixed set of base classes and let callers append their
//! own. Merging splits every fragment on whitespace, drops empty and duplicate
//! tokens, and keeps first-occurrence order.

use std::fmt;

/// Ordered, de-duplicated set of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create an empty class list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a class list starting from `base`
    pub fn with(base: &str) -> Self {
        let mut list = Self::new();
        list.push(base);
        list
    }

    /// Add every token in `fragment`
    pub fn push(&mut self, fragment: &str) -> &mut Self {
        for token in fragment.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
        self
    }

    /// Add the tokens of `fragment` if present
    pub fn push_opt(&mut self, fragment: Option<&str>) -> &mut Self {
        if let Some(fragment) = fragment {
            self.push(fragment);
        }
        self
    }

    /// Does the list hold `token`?
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl<'a> Extend<&'a str> for ClassList {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(fragment);
        }
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Merge class fragments into a single `class` attribute value
///
/// # Examples
///
/// ```
/// use statcard_core::merge_classes;
///
/// assert_eq!(merge_classes(["stat-card", "mt-4"]), "stat-card mt-4");
/// assert_eq!(merge_classes(["stat-card", "", "stat-card"]), "stat-card");
/// ```
pub fn merge_classes<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments.into_iter().collect::<ClassList>().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_base_only() {
        assert_eq!(merge_classes(["stat-card"]), "stat-card");
    }

    #[test]
    fn test_merge_preserves_order() {
        assert_eq!(
            merge_classes(["stat-card", "border-gold mt-4"]),
            "stat-card border-gold mt-4"
        );
    }

    #[test]
    fn test_merge_drops_duplicates_and_blanks() {
        assert_eq!(
            merge_classes(["stat-card", "  ", "mt-4 stat-card", "\tmt-4\n"]),
            "stat-card mt-4"
        );
        assert_eq!(merge_classes(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_class_list_builder() {
        let mut list = ClassList::with("stat-card");
        list.push_opt(None).push_opt(Some("mt-4"));
        list.push("mt-4");

        assert_eq!(list.len(), 2);
        assert!(list.contains("mt-4"));
        assert!(!list.contains("mt"));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["stat-card", "mt-4"]);
        assert_eq!(list.to_string(), "stat-card mt-4");
    }

    #[test]
    fn test_empty_list() {
        let list = ClassList::new();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }
}
