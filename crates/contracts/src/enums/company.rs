use serde::{Deserialize, Serialize};

/// Компании-поставщики
///
/// В JSON сериализуется отображаемым названием ("Adam Mattkasse" и т.д.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Company {
    #[serde(rename = "Adam Mattkasse")]
    AdamMattkasse,
    #[serde(rename = "Godlevert")]
    Godlevert,
    #[serde(rename = "Linas")]
    Linas,
}

impl Company {
    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Company::AdamMattkasse => "Adam Mattkasse",
            Company::Godlevert => "Godlevert",
            Company::Linas => "Linas",
        }
    }

    /// Получить всех поставщиков в порядке отображения
    pub fn all() -> [Company; 3] {
        [Company::AdamMattkasse, Company::Godlevert, Company::Linas]
    }

    /// Парсинг из отображаемого названия
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|company| company.display_name() == name)
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
