//! Static tool catalog.
//!
//! The catalog is the fixed, ordered list of tools advertised for the
//! ADZDiag platform, plus the closed set of categories used for filtering.
//! Records are defined at compile time and never mutated or persisted.

mod records;

pub use records::TOOLS;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::AdzError;

/// Classification label for a catalog tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Diagnostics,
    Security,
    Immobilizer,
    #[serde(rename = "File Conversion")]
    FileConversion,
    Utilities,
}

impl Category {
    /// All categories in catalog display order.
    pub const ALL: [Category; 5] = [
        Category::Diagnostics,
        Category::Security,
        Category::Immobilizer,
        Category::FileConversion,
        Category::Utilities,
    ];

    /// Human-readable label as shown on the platform.
    pub fn label(self) -> &'static str {
        match self {
            Category::Diagnostics => "Diagnostics",
            Category::Security => "Security",
            Category::Immobilizer => "Immobilizer",
            Category::FileConversion => "File Conversion",
            Category::Utilities => "Utilities",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AdzError;

    /// Parse a category name case-insensitively.
    ///
    /// Accepts the display label and common CLI spellings
    /// ("file-conversion", "fileconversion").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diagnostics" => Ok(Category::Diagnostics),
            "security" => Ok(Category::Security),
            "immobilizer" => Ok(Category::Immobilizer),
            "file conversion" | "file-conversion" | "fileconversion" => Ok(Category::FileConversion),
            "utilities" => Ok(Category::Utilities),
            _ => Err(AdzError::UnknownCategory(s.to_string())),
        }
    }
}

/// Category predicate for the filter bar.
///
/// `All` is a synthetic wildcard, kept as its own variant so it can never be
/// confused with a real catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The filter chips in display order: All first, then each category.
    pub const CHIPS: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Diagnostics),
        CategoryFilter::Only(Category::Security),
        CategoryFilter::Only(Category::Immobilizer),
        CategoryFilter::Only(Category::FileConversion),
        CategoryFilter::Only(Category::Utilities),
    ];

    /// Whether a record with the given category passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    /// Label for the filter chip.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = AdzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

/// One advertised tool on the ADZDiag platform.
///
/// `id` is a unique URL-safe slug used to deep-link into the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub detail: &'static str,
}

/// The full catalog in display order.
pub fn all() -> &'static [ToolRecord] {
    &TOOLS
}

/// Look up a tool by its slug.
pub fn by_id(id: &str) -> Option<&'static ToolRecord> {
    TOOLS.iter().find(|tool| tool.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_sixteen_tools() {
        assert_eq!(all().len(), 16);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<&str> = all().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_catalog_ids_url_safe() {
        for tool in all() {
            assert!(
                tool.id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "id not URL-safe: {}",
                tool.id
            );
        }
    }

    #[test]
    fn test_by_id_found() {
        let tool = by_id("vag-dsg-immo-off").unwrap();
        assert_eq!(tool.name, "VAG DSG Immo-Off");
        assert_eq!(tool.category, Category::Immobilizer);
    }

    #[test]
    fn test_by_id_missing() {
        assert!(by_id("no-such-tool").is_none());
    }

    #[test]
    fn test_every_category_used() {
        let used: HashSet<Category> = all().iter().map(|t| t.category).collect();
        for category in Category::ALL {
            assert!(used.contains(&category), "no tools in {}", category);
        }
    }

    #[test]
    fn test_immobilizer_count() {
        let count = all().iter().filter(|t| t.category == Category::Immobilizer).count();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Diagnostics.label(), "Diagnostics");
        assert_eq!(Category::FileConversion.label(), "File Conversion");
        assert_eq!(Category::FileConversion.to_string(), "File Conversion");
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("immobilizer".parse::<Category>().unwrap(), Category::Immobilizer);
        assert_eq!("SECURITY".parse::<Category>().unwrap(), Category::Security);
        assert_eq!("File Conversion".parse::<Category>().unwrap(), Category::FileConversion);
        assert_eq!("file-conversion".parse::<Category>().unwrap(), Category::FileConversion);
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "Tuning".parse::<Category>().unwrap_err();
        assert!(matches!(err, AdzError::UnknownCategory(_)));
    }

    #[test]
    fn test_category_filter_chips_order() {
        let labels: Vec<&str> = CategoryFilter::CHIPS.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Diagnostics", "Security", "Immobilizer", "File Conversion", "Utilities"]
        );
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Security));
        assert!(CategoryFilter::Only(Category::Security).matches(Category::Security));
        assert!(!CategoryFilter::Only(Category::Security).matches(Category::Utilities));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Utilities".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Utilities)
        );
        assert!("Bodywork".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_default_filter() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_tool_record_serializes_category_label() {
        let tool = by_id("vag-sgo-to-bin").unwrap();
        let json = serde_json::to_value(tool).unwrap();
        assert_eq!(json["category"], "File Conversion");
        assert_eq!(json["id"], "vag-sgo-to-bin");
    }
}
