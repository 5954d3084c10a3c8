use yew::prelude::*;

use crate::{ui::Page, util::nav_link};

#[derive(Clone, PartialEq, Properties)]
pub struct NavigationProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Navigation)]
pub fn navigation(p: &NavigationProps) -> Html {
    let mobile_menu_open = use_state(|| false);
    let toggle_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };
    // Following a link from the mobile menu also closes it
    let close_then_navigate = {
        let mobile_menu_open = mobile_menu_open.clone();
        p.on_navigate.reform(move |page| {
            mobile_menu_open.set(false);
            page
        })
    };
    let link_class = |page: &Page| {
        classes!(
            "nav-link",
            (p.current == *page).then(|| "active")
        )
    };
    let menu_icon = match *mobile_menu_open {
        true => "bi-x-lg",
        false => "bi-list",
    };

    html! {
        <nav class="navbar navbar-expand-md fixed-top bg-body border-bottom">
            <div class="container">
                <a class="navbar-brand fw-bold fs-3" href={ Page::Home.href() } onclick={ nav_link(&p.on_navigate, Page::Home) }>
                    { "Folio" }<span class="text-primary">{ "Review" }</span>
                </a>
                <div class="d-none d-md-flex navbar-nav me-auto">
                    <a class={ link_class(&Page::Portfolios) } href={ Page::Portfolios.href() } onclick={ nav_link(&p.on_navigate, Page::Portfolios) }>
                        { "Browse Portfolios" }
                    </a>
                    <a class={ link_class(&Page::Upload) } href={ Page::Upload.href() } onclick={ nav_link(&p.on_navigate, Page::Upload) }>
                        { "Upload Work" }
                    </a>
                </div>
                <div class="d-none d-md-flex gap-2">
                    <button type="button" class="btn btn-primary" onclick={ p.on_navigate.reform(|_: MouseEvent| Page::Upload) }>
                        <span class="bi-upload me-2" aria-hidden="true"></span>
                        { "Upload" }
                    </button>
                    <button type="button" class="btn btn-outline-secondary">
                        <span class="bi-person me-2" aria-hidden="true"></span>
                        { "Sign In" }
                    </button>
                </div>
                <button
                    type="button"
                    class={ classes!("btn", "bi-btn", "d-md-none", menu_icon) }
                    aria-label="Menu"
                    onclick={ toggle_menu }
                >
                </button>
            </div>
            if *mobile_menu_open {
                <div class="container d-md-none py-3 d-flex flex-column gap-2">
                    <a class="nav-link" href={ Page::Portfolios.href() } onclick={ nav_link(&close_then_navigate, Page::Portfolios) }>
                        { "Browse Portfolios" }
                    </a>
                    <a class="nav-link" href={ Page::Upload.href() } onclick={ nav_link(&close_then_navigate, Page::Upload) }>
                        { "Upload Work" }
                    </a>
                    <button type="button" class="btn btn-primary" onclick={ close_then_navigate.reform(|_: MouseEvent| Page::Upload) }>
                        { "Upload" }
                    </button>
                    <button type="button" class="btn btn-outline-secondary">{ "Sign In" }</button>
                </div>
            }
        </nav>
    }
}
