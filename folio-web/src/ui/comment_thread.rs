use std::rc::Rc;

use chrono::Utc;
use folio_client::{
    api::{Comment, CommentId, CommentIntent},
    display, CommentTree, CommentViewState, ThreadView,
};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentThreadProps {
    pub tree: Rc<CommentTree>,
    pub on_add_comment: Callback<CommentIntent>,
}

pub enum CommentThreadMsg {
    NewCommentChanged(String),
    SubmitComment,
    ToggleLike(CommentId),
    ToggleReplies(CommentId),
    ToggleReplyInput(CommentId),
    CancelReply(CommentId),
    ReplyDraftChanged(CommentId, String),
    SubmitReply(CommentId),
}

pub struct CommentThread {
    view: ThreadView,
}

impl Component for CommentThread {
    type Message = CommentThreadMsg;
    type Properties = CommentThreadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CommentThread {
            view: ThreadView::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let tree = &ctx.props().tree;
        match msg {
            CommentThreadMsg::NewCommentChanged(draft) => self.view.set_new_comment_draft(draft),
            CommentThreadMsg::SubmitComment => match self.view.take_new_comment() {
                Some(intent) => ctx.props().on_add_comment.emit(intent),
                None => return false,
            },
            CommentThreadMsg::ToggleLike(id) => self.view.toggle_like(tree, &id),
            CommentThreadMsg::ToggleReplies(id) => self.view.toggle_reply_visibility(tree, &id),
            CommentThreadMsg::ToggleReplyInput(id) => self.view.toggle_reply_input(tree, &id),
            CommentThreadMsg::CancelReply(id) => self.view.cancel_reply(tree, &id),
            CommentThreadMsg::ReplyDraftChanged(id, draft) => {
                self.view.set_reply_draft(tree, &id, draft)
            }
            CommentThreadMsg::SubmitReply(id) => match self.view.take_reply(tree, &id) {
                Some(intent) => ctx.props().on_add_comment.emit(intent),
                None => return false,
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let tree = &ctx.props().tree;
        let link = ctx.link();
        html! {
            <section class="mt-5">
                <h2 class="h4 fw-bold mb-4">
                    { format!("Reviews & Feedback ({})", tree.len()) }
                </h2>

                <div class="card mb-4">
                    <div class="card-body">
                        <textarea
                            class="form-control mb-3"
                            rows="3"
                            placeholder="Share your thoughts, feedback, or questions about this portfolio..."
                            value={ self.view.new_comment_draft().to_string() }
                            oninput={ link.callback(|e| CommentThreadMsg::NewCommentChanged(util::textarea_value(e))) }
                        />
                        <div class="d-flex justify-content-end">
                            <button
                                type="button"
                                class="btn btn-primary"
                                disabled={ !self.view.can_post() }
                                onclick={ link.callback(|_| CommentThreadMsg::SubmitComment) }
                            >
                                <span class="bi-send me-2" aria-hidden="true"></span>
                                { "Post Review" }
                            </button>
                        </div>
                    </div>
                </div>

                <div class="d-flex flex-column gap-3">
                    { for tree.comments().iter().map(|c| self.view_comment(ctx, c, 0)) }
                </div>
            </section>
        }
    }
}

impl CommentThread {
    fn view_comment(&self, ctx: &Context<Self>, comment: &Comment, depth: usize) -> Html {
        let link = ctx.link();
        let state = self
            .view
            .state(&ctx.props().tree, &comment.id)
            .unwrap_or_else(|| CommentViewState::seeded(comment));
        let replies = comment.replies();

        let msg = |f: fn(CommentId) -> CommentThreadMsg| {
            let id = comment.id.clone();
            link.callback(move |_: MouseEvent| f(id.clone()))
        };
        let on_reply_input = {
            let id = comment.id.clone();
            link.callback(move |e| {
                CommentThreadMsg::ReplyDraftChanged(id.clone(), util::textarea_value(e))
            })
        };

        let like_class = match state.liked {
            true => classes!("bi-heart-fill", "text-danger"),
            false => classes!("bi-heart"),
        };
        let card_class = match depth {
            0 => classes!("card"),
            _ => classes!("card", "comment-reply", "ms-4", "ms-md-5"),
        };

        html! {
            <div key={ comment.id.as_str().to_string() }>
                <div class={ card_class }>
                    <div class="card-body">
                        <div class="d-flex gap-3">
                            <ui::Avatar
                                name={ comment.author.name.clone() }
                                url={ comment.author.avatar_url().map(String::from) }
                            />
                            <div class="flex-grow-1">
                                <div class="d-flex flex-wrap align-items-center gap-2 mb-1">
                                    <span class="fw-semibold">{ &comment.author.name }</span>
                                    if comment.author.is_expert() {
                                        <span class="badge text-bg-primary">
                                            <span class="bi-patch-check me-1" aria-hidden="true"></span>
                                            { "Expert Reviewer" }
                                        </span>
                                    }
                                    <span class="small text-muted">
                                        { format!("{} · {}", comment.author.role, display::time_ago(comment.created_at, Utc::now())) }
                                    </span>
                                </div>
                                <p class="mb-3" style="white-space: pre-wrap">{ &comment.content }</p>
                                <div class="d-flex flex-wrap gap-2">
                                    <button
                                        type="button"
                                        class="btn btn-sm btn-link text-reset text-decoration-none px-1"
                                        aria-pressed={ state.liked.to_string() }
                                        onclick={ msg(CommentThreadMsg::ToggleLike) }
                                    >
                                        <span class={ classes!("me-1", like_class) } aria-hidden="true"></span>
                                        { state.like_count }
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn-sm btn-link text-reset text-decoration-none px-1"
                                        onclick={ msg(CommentThreadMsg::ToggleReplyInput) }
                                    >
                                        <span class="bi-reply me-1" aria-hidden="true"></span>
                                        { "Reply" }
                                    </button>
                                    if !replies.is_empty() {
                                        <button
                                            type="button"
                                            class="btn btn-sm btn-link text-reset text-decoration-none px-1"
                                            onclick={ msg(CommentThreadMsg::ToggleReplies) }
                                        >
                                            <span
                                                class={ if state.replies_visible { "bi-chevron-up me-1" } else { "bi-chevron-down me-1" } }
                                                aria-hidden="true"
                                            ></span>
                                            { display::reply_label(replies.len()) }
                                        </button>
                                    }
                                </div>

                                if state.reply_input_shown {
                                    <div class="mt-3">
                                        <textarea
                                            class="form-control mb-2"
                                            rows="2"
                                            placeholder="Write a reply..."
                                            value={ state.reply_draft.clone() }
                                            oninput={ on_reply_input }
                                        />
                                        <div class="d-flex justify-content-end gap-2">
                                            <button
                                                type="button"
                                                class="btn btn-sm btn-outline-secondary"
                                                onclick={ msg(CommentThreadMsg::CancelReply) }
                                            >
                                                { "Cancel" }
                                            </button>
                                            <button
                                                type="button"
                                                class="btn btn-sm btn-primary"
                                                disabled={ !state.can_submit_reply() }
                                                onclick={ msg(CommentThreadMsg::SubmitReply) }
                                            >
                                                { "Reply" }
                                            </button>
                                        </div>
                                    </div>
                                }
                            </div>
                        </div>
                    </div>
                </div>

                if state.replies_visible && !replies.is_empty() {
                    <div class="d-flex flex-column gap-3 mt-3">
                        { for replies.iter().map(|r| self.view_comment(ctx, r, depth + 1)) }
                    </div>
                }
            </div>
        }
    }
}
