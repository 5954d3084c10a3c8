use chrono::Utc;

use crate::api::{Author, Comment, CommentId, CommentIntent, Error};

/// The comments of one portfolio page. This is the only place comments get
/// written to: views borrow `comments()` and submit `CommentIntent`s.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentTree {
    /// Root comments, newest first
    roots: Vec<Comment>,

    /// Who new comments are attributed to
    author: Author,
}

impl CommentTree {
    pub fn new(roots: Vec<Comment>, author: Author) -> CommentTree {
        CommentTree { roots, author }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        Comment::find_in(&self.roots, id)
    }

    pub fn apply(&mut self, intent: CommentIntent) {
        match intent.parent {
            None => self.add_top_level_comment(intent.content),
            Some(parent) => self.add_reply(&parent, intent.content),
        }
    }

    /// Does nothing if `content` is blank
    pub fn add_top_level_comment(&mut self, content: String) {
        if let Err(e) = self.try_add_top_level_comment(content) {
            tracing::debug!(error = %e, "ignoring top-level comment");
        }
    }

    /// Does nothing if `content` is blank or no root comment has id `parent`
    pub fn add_reply(&mut self, parent: &CommentId, content: String) {
        if let Err(e) = self.try_add_reply(parent, content) {
            tracing::debug!(error = %e, "ignoring reply");
        }
    }

    pub fn try_add_top_level_comment(&mut self, content: String) -> Result<CommentId, Error> {
        let mut comment = self.new_comment(content)?;
        comment.replies = Some(Vec::new());
        let id = comment.id.clone();
        self.roots.insert(0, comment);
        Ok(id)
    }

    /// Only root comments are matched: replying to a reply is not supported
    pub fn try_add_reply(&mut self, parent: &CommentId, content: String) -> Result<CommentId, Error> {
        let reply = self.new_comment(content)?;
        let parent = self
            .roots
            .iter_mut()
            .find(|c| c.id == *parent)
            .ok_or_else(|| Error::NotFound(parent.clone()))?;
        let id = reply.id.clone();
        parent.replies.get_or_insert_with(Vec::new).push(reply);
        Ok(id)
    }

    fn new_comment(&self, content: String) -> Result<Comment, Error> {
        if content.trim().is_empty() {
            return Err(Error::EmptyContent);
        }
        Ok(Comment {
            id: CommentId::new_v4(),
            author: self.author.clone(),
            content,
            created_at: Utc::now(),
            likes: 0,
            replies: None,
        })
    }
}
