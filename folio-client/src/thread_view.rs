use std::collections::HashMap;

use crate::{
    api::{Comment, CommentId, CommentIntent},
    CommentTree,
};

/// What one rendered comment remembers on its own. It is seeded once from the
/// stored comment and then lives independently: nothing here is ever written
/// back into the `CommentTree`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentViewState {
    pub liked: bool,
    pub like_count: u32,
    pub replies_visible: bool,
    pub reply_input_shown: bool,
    pub reply_draft: String,
}

impl CommentViewState {
    pub fn seeded(comment: &Comment) -> CommentViewState {
        CommentViewState {
            liked: false,
            like_count: comment.likes,
            replies_visible: true,
            reply_input_shown: false,
            reply_draft: String::new(),
        }
    }

    pub fn toggle_like(&mut self) {
        if self.liked {
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.like_count += 1;
        }
        self.liked = !self.liked;
    }

    pub fn toggle_replies(&mut self) {
        self.replies_visible = !self.replies_visible;
    }

    pub fn toggle_reply_input(&mut self) {
        self.reply_input_shown = !self.reply_input_shown;
    }

    /// Hides the reply box but keeps whatever was typed
    pub fn cancel_reply(&mut self) {
        self.reply_input_shown = false;
    }

    pub fn set_reply_draft(&mut self, draft: String) {
        self.reply_draft = draft;
    }

    pub fn can_submit_reply(&self) -> bool {
        !self.reply_draft.trim().is_empty()
    }

    /// Returns the draft and resets the reply box, or `None` if the draft is blank
    pub fn take_reply(&mut self) -> Option<String> {
        if !self.can_submit_reply() {
            return None;
        }
        self.reply_input_shown = false;
        Some(std::mem::take(&mut self.reply_draft))
    }
}

/// View-local state of a whole comment thread, keyed by comment id. Entries are
/// seeded lazily from the tree the first time they are touched, and all of it is
/// gone when the thread is re-mounted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThreadView {
    comments: HashMap<CommentId, CommentViewState>,
    new_comment_draft: String,
}

impl ThreadView {
    pub fn new() -> ThreadView {
        ThreadView::default()
    }

    /// Current view state of `id`, without seeding it. Returns `None` for
    /// unknown ids.
    pub fn state(&self, tree: &CommentTree, id: &CommentId) -> Option<CommentViewState> {
        match self.comments.get(id) {
            Some(s) => Some(s.clone()),
            None => tree.find(id).map(CommentViewState::seeded),
        }
    }

    fn entry(&mut self, tree: &CommentTree, id: &CommentId) -> Option<&mut CommentViewState> {
        if !self.comments.contains_key(id) {
            let comment = match tree.find(id) {
                Some(c) => c,
                None => {
                    tracing::debug!(%id, "view state requested for comment not in tree");
                    return None;
                }
            };
            self.comments
                .insert(id.clone(), CommentViewState::seeded(comment));
        }
        self.comments.get_mut(id)
    }

    pub fn toggle_like(&mut self, tree: &CommentTree, id: &CommentId) {
        if let Some(s) = self.entry(tree, id) {
            s.toggle_like();
        }
    }

    pub fn toggle_reply_visibility(&mut self, tree: &CommentTree, id: &CommentId) {
        if let Some(s) = self.entry(tree, id) {
            s.toggle_replies();
        }
    }

    pub fn toggle_reply_input(&mut self, tree: &CommentTree, id: &CommentId) {
        if let Some(s) = self.entry(tree, id) {
            s.toggle_reply_input();
        }
    }

    pub fn cancel_reply(&mut self, tree: &CommentTree, id: &CommentId) {
        if let Some(s) = self.entry(tree, id) {
            s.cancel_reply();
        }
    }

    pub fn set_reply_draft(&mut self, tree: &CommentTree, id: &CommentId, draft: String) {
        if let Some(s) = self.entry(tree, id) {
            s.set_reply_draft(draft);
        }
    }

    /// Turns the reply draft of `id` into an intent, if it is submittable
    pub fn take_reply(&mut self, tree: &CommentTree, id: &CommentId) -> Option<CommentIntent> {
        let content = self.entry(tree, id)?.take_reply()?;
        Some(CommentIntent::reply(id.clone(), content))
    }

    pub fn new_comment_draft(&self) -> &str {
        &self.new_comment_draft
    }

    pub fn set_new_comment_draft(&mut self, draft: String) {
        self.new_comment_draft = draft;
    }

    pub fn can_post(&self) -> bool {
        !self.new_comment_draft.trim().is_empty()
    }

    pub fn take_new_comment(&mut self) -> Option<CommentIntent> {
        if !self.can_post() {
            return None;
        }
        Some(CommentIntent::post(std::mem::take(
            &mut self.new_comment_draft,
        )))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{api::Author, Settings};

    fn example_tree() -> CommentTree {
        let author = Author {
            name: String::from("Marcus Johnson"),
            avatar: None,
            role: String::from("Creative Director"),
            is_expert: None,
        };
        let reply = Comment {
            id: CommentId::from("c1-r1"),
            author: author.clone(),
            content: String::from("Agreed"),
            created_at: Utc::now(),
            likes: 2,
            replies: None,
        };
        CommentTree::new(
            vec![Comment {
                id: CommentId::from("c1"),
                author,
                content: String::from("Strong typography"),
                created_at: Utc::now(),
                likes: 12,
                replies: Some(vec![reply]),
            }],
            Settings::default().placeholder_author,
        )
    }

    #[test]
    fn seeded_state() {
        let tree = example_tree();
        let s = ThreadView::new()
            .state(&tree, &CommentId::from("c1"))
            .unwrap();
        assert!(!s.liked);
        assert_eq!(s.like_count, 12);
        assert!(s.replies_visible);
        assert!(!s.reply_input_shown);
    }

    #[test]
    fn like_toggle_is_an_involution() {
        let tree = example_tree();
        let id = CommentId::from("c1");
        let mut view = ThreadView::new();
        view.toggle_like(&tree, &id);
        let s = view.state(&tree, &id).unwrap();
        assert!(s.liked);
        assert_eq!(s.like_count, 13);
        view.toggle_like(&tree, &id);
        let s = view.state(&tree, &id).unwrap();
        assert!(!s.liked);
        assert_eq!(s.like_count, 12);
    }

    #[test]
    fn likes_never_reach_the_tree() {
        let tree = example_tree();
        let id = CommentId::from("c1-r1");
        let mut view = ThreadView::new();
        view.toggle_like(&tree, &id);
        assert_eq!(view.state(&tree, &id).unwrap().like_count, 3);
        assert_eq!(tree.find(&id).unwrap().likes, 2);
        // a fresh mount sees the stored value again
        assert_eq!(ThreadView::new().state(&tree, &id).unwrap().like_count, 2);
    }

    #[test]
    fn view_state_diverges_from_later_tree_changes() {
        let mut tree = example_tree();
        let id = CommentId::from("c1");
        let mut view = ThreadView::new();
        view.toggle_like(&tree, &id);
        tree.add_reply(&id, String::from("new reply"));
        assert_eq!(view.state(&tree, &id).unwrap().like_count, 13);
    }

    #[test]
    fn reply_visibility_toggles() {
        let tree = example_tree();
        let id = CommentId::from("c1");
        let mut view = ThreadView::new();
        view.toggle_reply_visibility(&tree, &id);
        assert!(!view.state(&tree, &id).unwrap().replies_visible);
        view.toggle_reply_visibility(&tree, &id);
        assert!(view.state(&tree, &id).unwrap().replies_visible);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let tree = example_tree();
        let id = CommentId::from("nope");
        let mut view = ThreadView::new();
        view.toggle_like(&tree, &id);
        assert_eq!(view.state(&tree, &id), None);
        assert_eq!(view, ThreadView::new());
    }

    #[test]
    fn reply_draft_flow() {
        let mut tree = example_tree();
        let id = CommentId::from("c1");
        let mut view = ThreadView::new();
        view.toggle_reply_input(&tree, &id);
        view.set_reply_draft(&tree, &id, String::from("   "));
        assert_eq!(view.take_reply(&tree, &id), None);
        assert!(view.state(&tree, &id).unwrap().reply_input_shown);

        view.set_reply_draft(&tree, &id, String::from("Thanks!"));
        let intent = view.take_reply(&tree, &id).unwrap();
        assert_eq!(intent, CommentIntent::reply(id.clone(), String::from("Thanks!")));
        let s = view.state(&tree, &id).unwrap();
        assert!(!s.reply_input_shown);
        assert_eq!(s.reply_draft, "");

        tree.apply(intent);
        assert_eq!(tree.comments()[0].reply_count(), 2);
    }

    #[test]
    fn replying_to_a_reply_clears_the_box_but_adds_nothing() {
        let mut tree = example_tree();
        let before = tree.clone();
        let id = CommentId::from("c1-r1");
        let mut view = ThreadView::new();
        view.toggle_reply_input(&tree, &id);
        view.set_reply_draft(&tree, &id, String::from("deeper"));
        let intent = view.take_reply(&tree, &id).unwrap();
        assert_eq!(intent.parent, Some(id.clone()));

        tree.apply(intent);
        assert_eq!(tree, before);
        let s = view.state(&tree, &id).unwrap();
        assert!(!s.reply_input_shown);
        assert_eq!(s.reply_draft, "");
    }

    #[test]
    fn cancel_keeps_the_draft() {
        let tree = example_tree();
        let id = CommentId::from("c1");
        let mut view = ThreadView::new();
        view.toggle_reply_input(&tree, &id);
        view.set_reply_draft(&tree, &id, String::from("half-written"));
        view.cancel_reply(&tree, &id);
        let s = view.state(&tree, &id).unwrap();
        assert!(!s.reply_input_shown);
        assert_eq!(s.reply_draft, "half-written");
    }

    #[test]
    fn new_comment_draft() {
        let mut view = ThreadView::new();
        assert!(!view.can_post());
        view.set_new_comment_draft(String::from(" \n"));
        assert_eq!(view.take_new_comment(), None);
        view.set_new_comment_draft(String::from("Love the palette"));
        assert_eq!(
            view.take_new_comment(),
            Some(CommentIntent::post(String::from("Love the palette"))),
        );
        assert_eq!(view.new_comment_draft(), "");
    }
}
