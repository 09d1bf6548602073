use serde::{Deserialize, Serialize};

/// Иконки карточек каталога.
///
/// В данных иконка хранится строкой; всё нераспознанное превращается в
/// [`IconTag::Code`], десериализация не падает.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconTag {
    Folder,
    CreditCard,
    Shield,
    #[default]
    Code,
    Palette,
    Lock,
    Globe,
    Bell,
}

impl IconTag {
    /// Код тега, как он хранится в данных
    pub fn code(&self) -> &'static str {
        match self {
            IconTag::Folder => "folder",
            IconTag::CreditCard => "credit-card",
            IconTag::Shield => "shield",
            IconTag::Code => "code",
            IconTag::Palette => "palette",
            IconTag::Lock => "lock",
            IconTag::Globe => "globe",
            IconTag::Bell => "bell",
        }
    }

    pub fn all() -> Vec<IconTag> {
        vec![
            IconTag::Folder,
            IconTag::CreditCard,
            IconTag::Shield,
            IconTag::Code,
            IconTag::Palette,
            IconTag::Lock,
            IconTag::Globe,
            IconTag::Bell,
        ]
    }

    /// Парсинг из строки, неизвестный тег -> `Code`
    pub fn from_code(code: &str) -> Self {
        match code {
            "folder" => IconTag::Folder,
            "credit-card" => IconTag::CreditCard,
            "shield" => IconTag::Shield,
            "code" => IconTag::Code,
            "palette" => IconTag::Palette,
            "lock" => IconTag::Lock,
            "globe" => IconTag::Globe,
            "bell" => IconTag::Bell,
            _ => IconTag::Code,
        }
    }
}

impl From<String> for IconTag {
    fn from(value: String) -> Self {
        IconTag::from_code(&value)
    }
}

impl From<IconTag> for String {
    fn from(value: IconTag) -> Self {
        value.code().to_string()
    }
}

impl std::fmt::Display for IconTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
