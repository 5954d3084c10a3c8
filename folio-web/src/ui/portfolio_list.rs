use std::rc::Rc;

use folio_client::{search, ListingQuery, Snapshot, SortKey, CATEGORIES};
use yew::prelude::*;

use crate::{
    ui::{self, Page},
    util,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewMode {
    Grid,
    List,
}

#[derive(Clone, PartialEq, Properties)]
pub struct PortfolioListProps {
    pub snapshot: Rc<Snapshot>,
    pub on_navigate: Callback<Page>,
}

pub enum PortfolioListMsg {
    QueryChanged(String),
    CategorySelected(String),
    SortChanged(String),
    SetViewMode(ViewMode),
}

pub struct PortfolioList {
    query: ListingQuery,
    view_mode: ViewMode,
}

impl Component for PortfolioList {
    type Message = PortfolioListMsg;
    type Properties = PortfolioListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PortfolioList {
            query: ListingQuery::default(),
            view_mode: ViewMode::Grid,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PortfolioListMsg::QueryChanged(q) => self.query.query = q,
            PortfolioListMsg::CategorySelected(c) => self.query.category = c,
            PortfolioListMsg::SortChanged(s) => match s.parse() {
                Ok(sort) => self.query.sort = sort,
                Err(e) => {
                    tracing::warn!("ignoring sort change: {}", e);
                    return false;
                }
            },
            PortfolioListMsg::SetViewMode(m) => self.view_mode = m,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let p = ctx.props();
        let portfolios = search(&p.snapshot.portfolios, &self.query);

        let view_mode_button = |mode: ViewMode, icon: &'static str, label: &'static str| {
            let variant = match self.view_mode == mode {
                true => "btn-secondary",
                false => "btn-outline-secondary",
            };
            html! {
                <button
                    type="button"
                    class={ classes!("btn", "bi-btn", variant, icon) }
                    aria-label={ label }
                    onclick={ ctx.link().callback(move |_| PortfolioListMsg::SetViewMode(mode)) }
                >
                </button>
            }
        };

        let category_badges = CATEGORIES.iter().map(|&c| {
            let variant = match self.query.category == c {
                true => "text-bg-primary",
                false => "text-bg-light",
            };
            html! {
                <span
                    class={ classes!("badge", "rounded-pill", "category-badge", "fs-6", "fw-normal", variant) }
                    onclick={ ctx.link().callback(move |_| PortfolioListMsg::CategorySelected(String::from(c))) }
                >
                    { c }
                </span>
            }
        });

        let results = if portfolios.is_empty() {
            html! {
                <div class="text-center py-5">
                    <span class="bi-search fs-1 text-muted" aria-hidden="true"></span>
                    <h3 class="h5 fw-semibold mt-3">{ "No portfolios found" }</h3>
                    <p class="text-muted">{ "Try adjusting your search or filter criteria" }</p>
                </div>
            }
        } else {
            let columns = match self.view_mode {
                ViewMode::Grid => classes!("row-cols-1", "row-cols-md-2", "row-cols-lg-3"),
                ViewMode::List => classes!("row-cols-1"),
            };
            html! {
                <div class={ classes!("row", "g-4", columns) }>
                    { for portfolios.iter().map(|portfolio| html! {
                        <div class="col">
                            <ui::PortfolioCard
                                portfolio={ portfolio.clone() }
                                on_navigate={ p.on_navigate.clone() }
                            />
                        </div>
                    }) }
                </div>
            }
        };

        html! {
            <div class="container py-5">
                <div class="mb-5">
                    <h1 class="fw-bold">{ "Browse Portfolios" }</h1>
                    <p class="lead text-muted">
                        { "Discover incredible work from designers, developers, and artists. \
                           Find inspiration and share your feedback." }
                    </p>
                </div>

                <div class="d-flex flex-column flex-md-row gap-3 mb-4">
                    <ui::SearchBar
                        value={ self.query.query.clone() }
                        placeholder="Search portfolios or creators..."
                        on_change={ ctx.link().callback(PortfolioListMsg::QueryChanged) }
                    />
                    <div class="d-flex gap-2">
                        <select
                            class="form-select form-select-lg"
                            aria-label="Sort by"
                            onchange={ ctx.link().callback(|e: Event| PortfolioListMsg::SortChanged(util::select_value(e))) }
                        >
                            { for SortKey::ALL.iter().map(|k| html! {
                                <option value={ k.as_str() } selected={ *k == self.query.sort }>
                                    { k.label() }
                                </option>
                            }) }
                        </select>
                        { view_mode_button(ViewMode::Grid, "bi-grid-3x3-gap", "Grid view") }
                        { view_mode_button(ViewMode::List, "bi-list-ul", "List view") }
                    </div>
                </div>

                <div class="d-flex flex-wrap gap-2 mb-4">
                    { for category_badges }
                </div>

                <p class="text-muted small mb-4">
                    { format!("Showing {} portfolios", portfolios.len()) }
                </p>

                { results }
            </div>
        }
    }
}
