//! Workout catalogs: fixed, ordered lists of item identifiers.
//!
//! Each catalog is persisted in its own `<name>_counts` table.

use crate::error::UsageError;

/// Kettlebell workouts, one per program week
const KB_WORKOUTS: [&str; 10] = [
    "week_01_Twister",
    "week_02_Blast",
    "week_03_Gravity",
    "week_04_Elevate",
    "week_05_Breathe",
    "week_06_Lift",
    "week_07_Force",
    "week_08_Heat",
    "week_09_Driven",
    "week_10_Rebellion",
];

/// Core workouts, one per program week
const CORE_WORKOUTS: [&str; 10] = [
    "week_01", "week_02", "week_03", "week_04", "week_05", "week_06", "week_07", "week_08",
    "week_09", "week_10",
];

pub const KB: &str = "kb";
pub const CORE: &str = "core";

/// A named, immutable list of workout identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    name: String,
    title: String,
    items: Vec<String>,
}

impl Catalog {
    /// Create a catalog. `name` becomes part of a table name, so it is restricted
    /// to `[a-z_][a-z0-9_]*`.
    #[allow(dead_code)] // Used in tests
    pub fn new<I, S>(name: &str, title: &str, items: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut chars = name.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(UsageError::InvalidCatalogName(name.to_string()));
        }

        Ok(Catalog {
            name: name.to_string(),
            title: title.to_string(),
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// The kettlebell catalog
    pub fn kettlebell() -> Self {
        Self::fixed(KB, "KB", &KB_WORKOUTS)
    }

    /// The core catalog
    pub fn core() -> Self {
        Self::fixed(CORE, "Core", &CORE_WORKOUTS)
    }

    fn fixed(name: &str, title: &str, items: &[&str]) -> Self {
        Catalog {
            name: name.to_string(),
            title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Heading used in the count report
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Name of the table holding this catalog's counters
    pub fn table(&self) -> String {
        format!("{}_counts", self.name)
    }
}

/// The two catalogs the picker ships with, in report order
pub fn default_catalogs() -> Vec<Catalog> {
    vec![Catalog::kettlebell(), Catalog::core()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogs() {
        let catalogs = default_catalogs();
        assert_eq!(catalogs.len(), 2);
        assert_eq!(catalogs[0].table(), "kb_counts");
        assert_eq!(catalogs[1].table(), "core_counts");
        assert_eq!(catalogs[0].items().len(), 10);
        assert_eq!(catalogs[1].items().len(), 10);
    }

    #[test]
    fn test_kb_names_follow_week_numbers() {
        let kb = Catalog::kettlebell();
        for (i, item) in kb.items().iter().enumerate() {
            assert!(item.starts_with(&format!("week_{:02}_", i + 1)), "{item}");
        }
        assert_eq!(kb.items()[9], "week_10_Rebellion");
        assert!(Catalog::core().contains("week_07"));
    }

    #[test]
    fn test_rejects_unsafe_names() {
        assert_eq!(
            Catalog::new("kb; DROP TABLE x", "KB", ["a"]),
            Err(UsageError::InvalidCatalogName("kb; DROP TABLE x".to_string()))
        );
        assert!(Catalog::new("", "Empty", Vec::<String>::new()).is_err());
        assert_eq!(
            Catalog::new("2x", "Double", ["a"]),
            Err(UsageError::InvalidCatalogName("2x".to_string()))
        );
        assert!(Catalog::new("mobility_2", "Mobility", ["hips"]).is_ok());
        assert!(Catalog::new("_warmup", "Warmup", ["jacks"]).is_ok());
    }
}
