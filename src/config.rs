//! Runtime configuration for a tracker session.

use std::path::PathBuf;

use crate::{Error, category::CategorySet};

/// The categories offered when no custom list is configured.
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["baby", "regular groceries", "game", "car related", "taxi"];

/// Everything a session needs to know up front: where the ledger lives,
/// where the chart goes and which categories exist.
///
/// Built once at start-up and passed by reference into the engine; nothing
/// here is mutated during a session.
#[derive(Clone, Debug)]
pub struct Config {
    /// File path of the CSV ledger.
    pub ledger_path: PathBuf,
    /// File path the spending chart is written to.
    pub chart_path: PathBuf,
    /// The closed, ordered set of spending categories.
    pub categories: CategorySet,
}

impl Config {
    /// Create a configuration with the default category set.
    ///
    /// # Errors
    ///
    /// This function will return an error if the default category set cannot
    /// be built, which cannot happen with the built-in [DEFAULT_CATEGORIES].
    pub fn new(
        ledger_path: impl Into<PathBuf>,
        chart_path: impl Into<PathBuf>,
    ) -> Result<Self, Error> {
        Ok(Self {
            ledger_path: ledger_path.into(),
            chart_path: chart_path.into(),
            categories: CategorySet::new(&DEFAULT_CATEGORIES)?,
        })
    }

    /// Replace the category set.
    pub fn with_categories(mut self, categories: CategorySet) -> Self {
        self.categories = categories;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_CATEGORIES};
    use crate::category::CategorySet;

    #[test]
    fn new_uses_the_default_categories() {
        let config = Config::new("finances.csv", "chart.html").unwrap();

        let names: Vec<&str> = config.categories.iter().map(AsRef::as_ref).collect();
        assert_eq!(names, DEFAULT_CATEGORIES);
    }

    #[test]
    fn with_categories_replaces_the_set() {
        let config = Config::new("finances.csv", "chart.html")
            .unwrap()
            .with_categories(CategorySet::new(&["rent", "food"]).unwrap());

        assert_eq!(config.categories.len(), 2);
    }
}
