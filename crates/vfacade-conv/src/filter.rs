//! Field denylist

use std::collections::HashSet;

/// Fields stripped from every decoded mapping by default
pub const DEFAULT_DENYLIST: &[&str] = &["twoDoorCoupe"];

/// Set of field names dropped whenever a field mapping is decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    fields: HashSet<String>,
}

impl Denylist {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// A denylist that keeps every field
    pub fn empty() -> Self {
        Self {
            fields: HashSet::new(),
        }
    }

    pub fn is_denied(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_denylist() {
        let denylist = Denylist::default();
        assert_eq!(denylist.len(), 1);
        assert!(denylist.is_denied("twoDoorCoupe"));
        assert!(!denylist.is_denied("fourDoorSedan"));
        // Exact match only
        assert!(!denylist.is_denied("twodoorcoupe"));
    }

    #[test]
    fn test_custom_and_empty() {
        let denylist = Denylist::new(vec!["vin".to_string(), "color".to_string()]);
        assert!(denylist.is_denied("vin"));
        assert!(denylist.is_denied("color"));
        assert!(!denylist.is_denied("twoDoorCoupe"));

        assert!(Denylist::empty().is_empty());
        assert!(!Denylist::empty().is_denied("twoDoorCoupe"));
    }
}
