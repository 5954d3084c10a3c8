use crate::CommentId;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("No comment with id {0}")]
    NotFound(CommentId),

    #[error("Content is empty")]
    EmptyContent,

    #[error("Cannot have more than {0} tags")]
    TooManyTags(usize),

    #[error("Tag already present {0:?}")]
    DuplicateTag(String),
}
