use serde::{Deserialize, Serialize};

/// Top-level pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    Packages,
    Courses,
    Articles,
}

impl PageId {
    /// Stable id used in links and in `?page=`
    pub fn id(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Packages => "packages",
            PageId::Courses => "courses",
            PageId::Articles => "articles",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            PageId::Home => "الرئيسية",
            PageId::Packages => "الحزم",
            PageId::Courses => "الدورسات عربية",
            PageId::Articles => "طلب لارافيل",
        }
    }

    /// Unknown ids land on the home page.
    pub fn from_id(id: &str) -> Self {
        match id {
            "packages" => PageId::Packages,
            "courses" => PageId::Courses,
            "articles" => PageId::Articles,
            _ => PageId::Home,
        }
    }

    /// Header menu in display order
    pub fn menu() -> [PageId; 4] {
        [PageId::Home, PageId::Packages, PageId::Courses, PageId::Articles]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for page in PageId::menu() {
            assert_eq!(PageId::from_id(page.id()), page);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_home() {
        assert_eq!(PageId::from_id("admin"), PageId::Home);
        assert_eq!(PageId::from_id(""), PageId::Home);
    }

    #[test]
    fn test_menu_order() {
        let ids: Vec<_> = PageId::menu().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["home", "packages", "courses", "articles"]);
    }
}
