use std::fmt;

use crate::Author;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct PortfolioId(pub String);

impl From<&str> for PortfolioId {
    fn from(s: &str) -> PortfolioId {
        PortfolioId(String::from(s))
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PortfolioFile {
    pub url: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: PortfolioId,
    pub title: String,
    pub author: Author,
    pub description: String,
    pub category: String,
    pub thumbnail: String,
    pub view_count: u64,
    pub review_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub files: Vec<PortfolioFile>,
    #[serde(default)]
    pub featured: bool,
}
