use std::{rc::Rc, sync::Arc};

use folio_client::{
    api::{CommentIntent, Portfolio, PortfolioId},
    display, find_portfolio, CommentTree, Settings, Snapshot,
};
use yew::prelude::*;

use crate::{
    ui::{self, Page},
    util::nav_link,
};

#[derive(Clone, PartialEq, Properties)]
pub struct PortfolioDetailProps {
    pub portfolio_id: PortfolioId,
    pub snapshot: Rc<Snapshot>,
    pub settings: Rc<Settings>,
    pub on_navigate: Callback<Page>,
}

pub enum PortfolioDetailMsg {
    PrevFile,
    NextFile,
    SelectFile(usize),
    ToggleBookmark,
    Comment(CommentIntent),
}

pub struct PortfolioDetail {
    tree: Rc<CommentTree>,
    file_index: usize,
    bookmarked: bool,
}

fn seed_tree(p: &PortfolioDetailProps) -> Rc<CommentTree> {
    Rc::new(CommentTree::new(
        p.snapshot.comments.clone(),
        p.settings.placeholder_author.clone(),
    ))
}

impl Component for PortfolioDetail {
    type Message = PortfolioDetailMsg;
    type Properties = PortfolioDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        PortfolioDetail {
            tree: seed_tree(ctx.props()),
            file_index: 0,
            bookmarked: false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().portfolio_id != old_props.portfolio_id {
            tracing::debug!(id = %ctx.props().portfolio_id, "showing another portfolio");
            *self = <PortfolioDetail as yew::Component>::create(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let file_count = self
            .portfolio(ctx)
            .map(|p| p.files.len())
            .unwrap_or(0);
        match msg {
            PortfolioDetailMsg::PrevFile => self.file_index = self.file_index.saturating_sub(1),
            PortfolioDetailMsg::NextFile => {
                self.file_index = (self.file_index + 1).min(file_count.saturating_sub(1))
            }
            PortfolioDetailMsg::SelectFile(i) => {
                if i >= file_count {
                    tracing::debug!(i, file_count, "ignoring out-of-range file selection");
                    return false;
                }
                self.file_index = i;
            }
            PortfolioDetailMsg::ToggleBookmark => self.bookmarked = !self.bookmarked,
            PortfolioDetailMsg::Comment(intent) => Rc::make_mut(&mut self.tree).apply(intent),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let portfolio = match self.portfolio(ctx) {
            Some(portfolio) => portfolio,
            None => return self.view_not_found(ctx),
        };
        html! {
            <div class="container py-5">
                <a
                    class="btn btn-link text-reset text-decoration-none px-0 mb-4"
                    href={ Page::Portfolios.href() }
                    onclick={ nav_link(&p.on_navigate, Page::Portfolios) }
                >
                    <span class="bi-arrow-left me-2" aria-hidden="true"></span>
                    { "Back to Portfolios" }
                </a>

                <div class="row g-5">
                    <div class="col-lg-8">
                        { self.view_carousel(ctx, &portfolio) }
                        <ui::CommentThread
                            tree={ self.tree.clone() }
                            on_add_comment={ ctx.link().callback(PortfolioDetailMsg::Comment) }
                        />
                    </div>
                    <div class="col-lg-4">
                        { self.view_sidebar(ctx, &portfolio) }
                    </div>
                </div>
            </div>
        }
    }
}

impl PortfolioDetail {
    fn portfolio(&self, ctx: &Context<Self>) -> Option<Arc<Portfolio>> {
        let p = ctx.props();
        find_portfolio(&p.snapshot.portfolios, &p.portfolio_id)
    }

    fn view_not_found(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = &ctx.props().on_navigate;
        html! {
            <div class="container py-5 text-center">
                <h1 class="h3 fw-bold mb-3">{ "Portfolio not found" }</h1>
                <a
                    class="btn btn-primary"
                    href={ Page::Portfolios.href() }
                    onclick={ nav_link(on_navigate, Page::Portfolios) }
                >
                    { "Back to Portfolios" }
                </a>
            </div>
        }
    }

    fn view_carousel(&self, ctx: &Context<Self>, portfolio: &Portfolio) -> Html {
        let link = ctx.link();
        let files = &portfolio.files;
        let current = match files.get(self.file_index) {
            Some(f) => f,
            None => {
                return html! {
                    <div class="card carousel-main mb-4">
                        <img class="card-img" src={ portfolio.thumbnail.clone() } alt={ portfolio.title.clone() } />
                    </div>
                }
            }
        };
        html! {
            <div class="mb-4">
                <div class="card carousel-main position-relative overflow-hidden">
                    <img class="card-img" src={ current.url.clone() } alt={ current.name.clone() } />
                    if files.len() > 1 {
                        <button
                            type="button"
                            class="btn btn-light rounded-circle position-absolute top-50 start-0 translate-middle-y ms-3 bi-chevron-left"
                            aria-label="Previous file"
                            disabled={ self.file_index == 0 }
                            onclick={ link.callback(|_| PortfolioDetailMsg::PrevFile) }
                        >
                        </button>
                        <button
                            type="button"
                            class="btn btn-light rounded-circle position-absolute top-50 end-0 translate-middle-y me-3 bi-chevron-right"
                            aria-label="Next file"
                            disabled={ self.file_index + 1 >= files.len() }
                            onclick={ link.callback(|_| PortfolioDetailMsg::NextFile) }
                        >
                        </button>
                        <div class="position-absolute bottom-0 start-50 translate-middle-x mb-3 d-flex gap-2">
                            { for (0..files.len()).map(|i| html! {
                                <button
                                    type="button"
                                    class={ classes!("carousel-dot", (i == self.file_index).then_some("active")) }
                                    aria-label={ format!("Show file {}", i + 1) }
                                    onclick={ link.callback(move |_| PortfolioDetailMsg::SelectFile(i)) }
                                >
                                </button>
                            }) }
                        </div>
                    }
                </div>
                if files.len() > 1 {
                    <div class="d-flex gap-2 mt-3 overflow-auto">
                        { for files.iter().enumerate().map(|(i, f)| {
                            let border = match i == self.file_index {
                                true => "border-primary",
                                false => "border-light",
                            };
                            html! {
                                <button
                                    type="button"
                                    class={ classes!("btn", "p-0", "border", "border-2", border) }
                                    onclick={ link.callback(move |_| PortfolioDetailMsg::SelectFile(i)) }
                                >
                                    <img class="rounded" width="96" height="64" src={ f.url.clone() } alt={ f.name.clone() } />
                                </button>
                            }
                        }) }
                    </div>
                }
            </div>
        }
    }

    fn view_sidebar(&self, ctx: &Context<Self>, portfolio: &Portfolio) -> Html {
        let (bookmark_icon, bookmark_label) = match self.bookmarked {
            true => ("bi-bookmark-fill", "Saved"),
            false => ("bi-bookmark", "Save"),
        };
        html! {
            <div class="d-flex flex-column gap-4">
                <div class="card">
                    <div class="card-body">
                        <span class="badge text-bg-light mb-3">{ &portfolio.category }</span>
                        <h1 class="h3 fw-bold">{ &portfolio.title }</h1>
                        <p class="text-muted">{ &portfolio.description }</p>

                        <div class="d-flex gap-4 small text-muted mb-4">
                            <span>
                                <span class="bi-eye me-1" aria-hidden="true"></span>
                                { format!("{} views", display::group_thousands(portfolio.view_count)) }
                            </span>
                            <span>
                                <span class="bi-chat me-1" aria-hidden="true"></span>
                                { format!("{} reviews", portfolio.review_count) }
                            </span>
                            if let Some(rating) = portfolio.rating {
                                <span>
                                    <span class="bi-star-fill text-primary me-1" aria-hidden="true"></span>
                                    { rating }
                                </span>
                            }
                        </div>

                        <div class="d-flex gap-2">
                            <button
                                type="button"
                                class="btn btn-outline-secondary flex-grow-1"
                                aria-pressed={ self.bookmarked.to_string() }
                                onclick={ ctx.link().callback(|_| PortfolioDetailMsg::ToggleBookmark) }
                            >
                                <span class={ classes!(bookmark_icon, "me-2") } aria-hidden="true"></span>
                                { bookmark_label }
                            </button>
                            <button type="button" class="btn btn-outline-secondary flex-grow-1">
                                <span class="bi-share me-2" aria-hidden="true"></span>
                                { "Share" }
                            </button>
                        </div>
                    </div>
                </div>

                <div class="card">
                    <div class="card-body">
                        <h2 class="h6 fw-semibold mb-3">{ "About the Creator" }</h2>
                        <div class="d-flex align-items-center gap-3">
                            <ui::Avatar
                                name={ portfolio.author.name.clone() }
                                url={ portfolio.author.avatar_url().map(String::from) }
                            />
                            <div>
                                <div class="fw-semibold">{ &portfolio.author.name }</div>
                                <div class="small text-muted">{ &portfolio.author.role }</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="card text-bg-primary">
                    <div class="card-body">
                        <h2 class="h6 fw-semibold">{ "Want expert feedback?" }</h2>
                        <p class="small mb-3">
                            { "Get detailed reviews from industry professionals to take your work to the next level." }
                        </p>
                        <button type="button" class="btn btn-light w-100">
                            { "Request Expert Review" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
