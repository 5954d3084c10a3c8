use std::rc::Rc;

use folio_client::{api::PortfolioId, Settings, Snapshot};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Home,
    Portfolios,
    Detail(PortfolioId),
    Upload,
}

impl Page {
    pub fn href(&self) -> String {
        match self {
            Page::Home => String::from("#/"),
            Page::Portfolios => String::from("#/portfolios"),
            Page::Detail(id) => format!("#/portfolio/{}", id),
            Page::Upload => String::from("#/upload"),
        }
    }
}

pub enum AppMsg {
    Navigate(Page),
}

pub struct App {
    snapshot: Rc<Snapshot>,
    settings: Rc<Settings>,
    page: Page,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let snapshot = Snapshot::mock().unwrap_or_else(|e| {
            tracing::error!("failed loading mock data, starting empty: {:?}", e);
            Snapshot::default()
        });
        tracing::debug!(
            portfolios = snapshot.portfolios.len(),
            comments = snapshot.comments.len(),
            "loaded snapshot"
        );
        App {
            snapshot: Rc::new(snapshot),
            settings: Rc::new(util::load_settings()),
            page: Page::Home,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(page) => {
                if page == self.page {
                    return false;
                }
                tracing::debug!(?page, "navigating");
                self.page = page;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(AppMsg::Navigate);
        let page = match &self.page {
            Page::Home => html! {
                <ui::Home
                    snapshot={ self.snapshot.clone() }
                    settings={ self.settings.clone() }
                    on_navigate={ on_navigate.clone() }
                />
            },
            Page::Portfolios => html! {
                <ui::PortfolioList
                    snapshot={ self.snapshot.clone() }
                    on_navigate={ on_navigate.clone() }
                />
            },
            Page::Detail(id) => html! {
                <ui::PortfolioDetail
                    portfolio_id={ id.clone() }
                    snapshot={ self.snapshot.clone() }
                    settings={ self.settings.clone() }
                    on_navigate={ on_navigate.clone() }
                />
            },
            Page::Upload => html! {
                <ui::Upload
                    settings={ self.settings.clone() }
                    on_navigate={ on_navigate.clone() }
                />
            },
        };
        html! {
            <>
                <ui::Navigation current={ self.page.clone() } { on_navigate } />
                <main class="pt-5 mt-4">
                    { page }
                </main>
            </>
        }
    }
}
