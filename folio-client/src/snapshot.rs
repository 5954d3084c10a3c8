use std::sync::Arc;

use anyhow::Context;

use crate::api::{Comment, Portfolio};

pub const CATEGORIES: [&str; 8] = [
    "All",
    "UI/UX Design",
    "Branding",
    "Illustration",
    "Photography",
    "Web Development",
    "Motion Design",
    "3D Art",
];

const MOCK_SNAPSHOT: &str = include_str!("../mock/snapshot.json");

/// Everything the app starts from. It is only ever read: changes the user makes
/// live in the pages' own state.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Snapshot {
    pub portfolios: Vec<Arc<Portfolio>>,
    pub comments: Vec<Comment>,
}

impl Snapshot {
    pub fn parse(json: &str) -> anyhow::Result<Snapshot> {
        let snapshot: Snapshot = serde_json::from_str(json).context("parsing snapshot")?;
        for p in snapshot.portfolios.iter() {
            if !CATEGORIES[1..].contains(&p.category.as_str()) {
                tracing::warn!(id = %p.id, category = %p.category, "portfolio has unknown category");
            }
        }
        Ok(snapshot)
    }

    pub fn mock() -> anyhow::Result<Snapshot> {
        Snapshot::parse(MOCK_SNAPSHOT).context("loading built-in mock data")
    }
}
