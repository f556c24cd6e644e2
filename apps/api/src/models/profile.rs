use serde::{Deserialize, Serialize};

/// The fixed set of portfolio categories, in the order they are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioCategory {
    Photoshop,
    Video,
    Projects,
}

impl PortfolioCategory {
    /// Declared iteration order used by relevance matching.
    pub const ORDER: [PortfolioCategory; 3] = [
        PortfolioCategory::Photoshop,
        PortfolioCategory::Video,
        PortfolioCategory::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioCategory::Photoshop => "photoshop",
            PortfolioCategory::Video => "video",
            PortfolioCategory::Projects => "projects",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub url: String,
    /// Lower-case tags matched as substrings of the question.
    pub skills: Vec<String>,
}

/// Portfolio items keyed by category. Each item lives in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub photoshop: Vec<PortfolioItem>,
    pub video: Vec<PortfolioItem>,
    pub projects: Vec<PortfolioItem>,
}

impl Portfolio {
    pub fn items(&self, category: PortfolioCategory) -> &[PortfolioItem] {
        match category {
            PortfolioCategory::Photoshop => &self.photoshop,
            PortfolioCategory::Video => &self.video,
            PortfolioCategory::Projects => &self.projects,
        }
    }

    /// All items, categories in `PortfolioCategory::ORDER`, items in declared order.
    pub fn iter_ordered(&self) -> impl Iterator<Item = &PortfolioItem> {
        PortfolioCategory::ORDER
            .into_iter()
            .flat_map(move |category| self.items(category).iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
}

/// Static profile data. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub competences: Vec<String>,
    pub strengths: Vec<String>,
    pub contact: Contact,
    #[serde(default)]
    pub portfolio: Portfolio,
    #[serde(default)]
    pub articles: Vec<Article>,
}
