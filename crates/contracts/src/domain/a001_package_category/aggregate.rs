use serde::{Deserialize, Serialize};

use crate::enums::icon_tag::IconTag;
use crate::shared::catalog_view::Searchable;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор категории пакетов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl CategoryId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Категория пакетов Laravel.
///
/// Только чтение: категории берутся из статического каталога и во время
/// работы не создаются и не изменяются.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub icon: IconTag,

    #[serde(rename = "packagesCount")]
    pub packages_count: u32,

    /// Акцентный цвет карточки (`blue`, `green`, ...)
    pub color: String,
}

impl Category {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: IconTag,
        packages_count: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            description: description.into(),
            icon,
            packages_count,
            color: color.into(),
        }
    }
}

impl Searchable for Category {
    /// Поиск подстроки в названии и описании, с учётом регистра.
    fn matches_query(&self, query: &str) -> bool {
        self.name.contains(query) || self.description.contains(query)
    }
}
