use std::fmt;

use crate::{Time, Uuid};

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn new_v4() -> CommentId {
        CommentId(format!("c{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> CommentId {
        CommentId(String::from(s))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expert: Option<bool>,
}

impl Author {
    pub fn is_expert(&self) -> bool {
        self.is_expert.unwrap_or(false)
    }

    /// Avatar URL, if there is a non-empty one
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|a| !a.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub author: Author,
    pub content: String,
    pub created_at: Time,
    pub likes: u32,

    /// Child comments, in insertion order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<Comment>>,
}

impl Comment {
    pub fn replies(&self) -> &[Comment] {
        self.replies.as_deref().unwrap_or(&[])
    }

    pub fn reply_count(&self) -> usize {
        self.replies().len()
    }

    /// Recursively looks up `id` in `comments` and all their replies
    pub fn find_in<'a>(comments: &'a [Comment], id: &CommentId) -> Option<&'a Comment> {
        for c in comments {
            if c.id == *id {
                return Some(c);
            }
            if let Some(res) = Comment::find_in(c.replies(), id) {
                return Some(res);
            }
        }
        None
    }
}

/// What the UI asks the comment store to do: post a new root comment, or
/// reply to `parent`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentIntent {
    pub content: String,
    pub parent: Option<CommentId>,
}

impl CommentIntent {
    pub fn post(content: String) -> CommentIntent {
        CommentIntent {
            content,
            parent: None,
        }
    }

    pub fn reply(parent: CommentId, content: String) -> CommentIntent {
        CommentIntent {
            content,
            parent: Some(parent),
        }
    }
}
