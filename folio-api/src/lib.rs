mod comment;
pub use comment::{Author, Comment, CommentId, CommentIntent};

mod error;
pub use error::Error;

mod portfolio;
pub use portfolio::{Portfolio, PortfolioFile, PortfolioId};

use chrono::Utc;

pub use uuid::Uuid;
pub type Time = chrono::DateTime<Utc>;

/// Category that matches every portfolio when filtering
pub const ALL_CATEGORIES: &str = "All";
