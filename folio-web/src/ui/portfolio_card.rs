use std::sync::Arc;

use folio_client::{api::Portfolio, display};
use yew::prelude::*;

use crate::{
    ui::{self, Page},
    util::nav_link,
};

#[derive(Clone, PartialEq, Properties)]
pub struct PortfolioCardProps {
    pub portfolio: Arc<Portfolio>,
    pub on_navigate: Callback<Page>,
}

#[function_component(PortfolioCard)]
pub fn portfolio_card(p: &PortfolioCardProps) -> Html {
    let portfolio = &p.portfolio;
    let page = Page::Detail(portfolio.id.clone());
    html! {
        <a
            class="text-reset text-decoration-none"
            href={ page.href() }
            onclick={ nav_link(&p.on_navigate, page) }
        >
            <article class="card portfolio-card h-100 shadow-sm">
                <div class="position-relative">
                    if portfolio.featured {
                        <span class="badge text-bg-primary position-absolute top-0 start-0 m-3">
                            <span class="bi-stars me-1" aria-hidden="true"></span>
                            { "Featured" }
                        </span>
                    }
                    <img class="card-img-top" src={ portfolio.thumbnail.clone() } alt={ portfolio.title.clone() } />
                </div>
                <div class="card-body">
                    <div class="d-flex justify-content-between align-items-start gap-2 mb-3">
                        <h3 class="h6 fw-semibold mb-0">{ &portfolio.title }</h3>
                        <span class="badge text-bg-light">{ &portfolio.category }</span>
                    </div>
                    <div class="d-flex justify-content-between align-items-center">
                        <div class="d-flex align-items-center gap-2">
                            <ui::Avatar
                                name={ portfolio.author.name.clone() }
                                url={ portfolio.author.avatar_url().map(String::from) }
                            />
                            <div class="small">
                                <div class="fw-medium">{ &portfolio.author.name }</div>
                                <div class="text-muted">{ &portfolio.author.role }</div>
                            </div>
                        </div>
                        <div class="d-flex gap-3 small text-muted">
                            if let Some(rating) = portfolio.rating {
                                <span>
                                    <span class="bi-star-fill text-primary me-1" aria-hidden="true"></span>
                                    { rating }
                                </span>
                            }
                            <span>
                                <span class="bi-chat me-1" aria-hidden="true"></span>
                                { portfolio.review_count }
                            </span>
                            <span>
                                <span class="bi-eye me-1" aria-hidden="true"></span>
                                { display::group_thousands(portfolio.view_count) }
                            </span>
                        </div>
                    </div>
                </div>
            </article>
        </a>
    }
}
