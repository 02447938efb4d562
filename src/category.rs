//! Spending categories and the fixed set a session is configured with.

use std::fmt::Display;

use crate::Error;

/// The name of a spending category, e.g. "regular groceries".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return [Error::EmptyCategoryName] if `name` is an
    /// empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty. Used when
    /// reading back ledger rows written by earlier sessions, whose
    /// categories may no longer be part of the configured set.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered, closed set of categories available in a session.
///
/// The set is fixed when the session starts. The capture loop presents it as
/// a numbered list and resolves the user's choice by 1-based position; that
/// positional mapping never leaves the capture loop, everything else deals
/// in category values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySet(Vec<CategoryName>);

impl CategorySet {
    /// Create a category set from a list of names, keeping their order.
    ///
    /// # Errors
    ///
    /// This function will return [Error::EmptyCategorySet] if `names` is
    /// empty, or [Error::EmptyCategoryName] if any name is an empty string.
    pub fn new(names: &[&str]) -> Result<Self, Error> {
        if names.is_empty() {
            return Err(Error::EmptyCategorySet);
        }

        let categories = names
            .iter()
            .map(|name| CategoryName::new(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(categories))
    }

    /// The category at the 1-based `position`, or `None` if the position is
    /// zero or past the end of the set.
    pub fn get(&self, position: usize) -> Option<&CategoryName> {
        position.checked_sub(1).and_then(|index| self.0.get(index))
    }

    /// Whether `name` is one of the configured categories.
    pub fn contains(&self, name: &CategoryName) -> bool {
        self.0.contains(name)
    }

    /// Iterate over the categories in their configured order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryName> {
        self.0.iter()
    }

    /// The number of configured categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty set cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryName, CategorySet};
    use crate::Error;

    #[test]
    fn new_fails_on_empty_name() {
        assert!(matches!(CategoryName::new(""), Err(Error::EmptyCategoryName)));
    }

    #[test]
    fn new_fails_on_empty_set() {
        assert!(matches!(CategorySet::new(&[]), Err(Error::EmptyCategorySet)));
    }

    #[test]
    fn get_uses_one_based_positions() {
        let categories = CategorySet::new(&["baby", "game", "taxi"]).unwrap();

        assert_eq!(categories.get(1).map(AsRef::as_ref), Some("baby"));
        assert_eq!(categories.get(3).map(AsRef::as_ref), Some("taxi"));
        assert_eq!(categories.get(0), None);
        assert_eq!(categories.get(4), None);
    }

    #[test]
    fn iteration_preserves_configured_order() {
        let categories = CategorySet::new(&["game", "baby"]).unwrap();
        let names: Vec<&str> = categories.iter().map(AsRef::as_ref).collect();

        assert_eq!(names, ["game", "baby"]);
    }
}
