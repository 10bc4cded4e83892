//! The fixed theme table driving theme-mode selection.
//!
//! Themes are supplied by the host as an ordered list, validated once at
//! load time, and looked up by id with an explicit not-found error. A
//! theme's keyword set narrows the candidate pool; an empty set means the
//! theme accepts every category.

use thiserror::Error;

use crate::carbon::CarbonLevel;

/// A thematic trip category.
///
/// # Examples
/// ```
/// use ecotrip_core::{CarbonLevel, Theme};
///
/// let theme = Theme::new("naturalist", "Naturalist", CarbonLevel::Low)
///     .with_keywords(["viewpoint", "waterfall"]);
/// assert!(theme.matches("waterfall"));
/// assert!(!theme.matches("night_market"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    /// Stable identifier used in requests.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category keywords accepted by this theme; empty accepts all.
    pub keywords: Vec<String>,
    /// Advertised emissions band for trips under this theme.
    pub carbon_level: CarbonLevel,
}

impl Theme {
    /// Construct a theme with an empty keyword set (accepts every category).
    pub fn new(id: impl Into<String>, name: impl Into<String>, carbon_level: CarbonLevel) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            keywords: Vec::new(),
            carbon_level,
        }
    }

    /// Restrict the theme to the given category keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a place with `keyword` is eligible under this theme.
    ///
    /// An empty keyword set matches everything.
    pub fn matches(&self, keyword: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|k| k == keyword)
    }
}

/// Errors raised while building or querying a [`ThemeCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// Two themes shared an id at load time.
    #[error("duplicate theme id '{0}'")]
    DuplicateId(String),
    /// No theme carries the requested id.
    #[error("unknown theme '{0}'")]
    Unknown(String),
}

/// The validated, ordered theme table.
///
/// # Examples
/// ```
/// use ecotrip_core::{CarbonLevel, Theme, ThemeCatalog, ThemeError};
///
/// let catalog = ThemeCatalog::new(vec![
///     Theme::new("naturalist", "Naturalist", CarbonLevel::Low),
/// ])?;
/// assert!(catalog.lookup("naturalist").is_ok());
/// assert!(matches!(catalog.lookup("cafeist"), Err(ThemeError::Unknown(_))));
/// # Ok::<(), ThemeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Validate and construct the catalog, preserving declaration order.
    pub fn new(themes: Vec<Theme>) -> Result<Self, ThemeError> {
        let mut seen = std::collections::HashSet::new();
        for theme in &themes {
            if !seen.insert(theme.id.clone()) {
                return Err(ThemeError::DuplicateId(theme.id.clone()));
            }
        }
        Ok(Self { themes })
    }

    /// Look up a theme by id.
    pub fn lookup(&self, id: &str) -> Result<&Theme, ThemeError> {
        self.themes
            .iter()
            .find(|theme| theme.id == id)
            .ok_or_else(|| ThemeError::Unknown(id.to_owned()))
    }

    /// All themes in declaration order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the catalog holds no themes.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
