//! Insertion-ordered, duplicate-free tag set.

use serde_json::Value;

/// Tags attached to a post. Never holds blanks or exact duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize whatever the remote sent for `tags`.
    ///
    /// Accepts an array of strings or a string holding a JSON-encoded array. Anything else,
    /// including malformed JSON, yields an empty set.
    pub fn from_remote(value: Option<&Value>) -> Self {
        let items = match value {
            Some(Value::Array(items)) => items.clone(),
            Some(Value::String(encoded)) => match serde_json::from_str::<Value>(encoded) {
                Ok(Value::Array(items)) => items,
                _ => {
                    tracing::debug!("Ignoring unparseable tags value");
                    Vec::new()
                }
            },
            _ => Vec::new(),
        };

        let mut set = Self::new();
        for item in items {
            if let Value::String(tag) = item {
                set.insert(&tag);
            }
        }
        set
    }

    /// Insert a trimmed tag. Returns false for blanks and duplicates.
    pub fn insert(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove by position; out-of-range indexes are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_trims_and_dedupes() {
        let mut tags = TagSet::new();
        assert!(tags.insert("  skincare "));
        assert!(!tags.insert("skincare"));
        assert!(!tags.insert("   "));
        assert!(tags.insert("Skincare"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["skincare", "Skincare"]);
    }

    #[test]
    fn test_remove_then_add_has_no_duplicate() {
        let mut tags = TagSet::new();
        tags.insert("a");
        tags.insert("b");
        assert_eq!(tags.remove_at(0).as_deref(), Some("a"));
        tags.insert("a");
        tags.insert("a");
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["b", "a"]);
        assert!(tags.remove_at(9).is_none());
    }

    #[test]
    fn test_from_remote_array() {
        let value = json!(["laser", "", "laser", 42, "botox"]);
        let tags = TagSet::from_remote(Some(&value));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["laser", "botox"]);
    }

    #[test]
    fn test_from_remote_encoded_string() {
        let value = json!("[\"laser\",\"botox\"]");
        let tags = TagSet::from_remote(Some(&value));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_from_remote_fails_closed() {
        assert!(TagSet::from_remote(Some(&json!("not json"))).is_empty());
        assert!(TagSet::from_remote(Some(&json!("{\"a\":1}"))).is_empty());
        assert!(TagSet::from_remote(Some(&json!(12))).is_empty());
        assert!(TagSet::from_remote(Some(&Value::Null)).is_empty());
        assert!(TagSet::from_remote(None).is_empty());
    }
}
