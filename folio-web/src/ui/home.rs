use std::rc::Rc;

use folio_client::{featured, Settings, Snapshot};
use yew::prelude::*;

use crate::ui::{self, Page};

#[derive(Clone, PartialEq, Properties)]
pub struct HomeProps {
    pub snapshot: Rc<Snapshot>,
    pub settings: Rc<Settings>,
    pub on_navigate: Callback<Page>,
}

fn feature(icon: &'static str, title: &'static str, text: &'static str) -> Html {
    html! {
        <div class="col-md-4">
            <div class="p-4 h-100 border rounded-4">
                <span class={ classes!(icon, "fs-3", "text-primary") } aria-hidden="true"></span>
                <h3 class="h5 fw-semibold mt-3">{ title }</h3>
                <p class="text-muted mb-0">{ text }</p>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home(p: &HomeProps) -> Html {
    let featured = featured(&p.snapshot.portfolios, p.settings.featured_count);
    let go = |page: Page| p.on_navigate.reform(move |_: MouseEvent| page.clone());

    html! {
        <>
            <section class="py-5 text-center">
                <div class="container py-5">
                    <span class="badge rounded-pill text-bg-light mb-4">
                        <span class="bi-stars me-1" aria-hidden="true"></span>
                        { "Where creativity meets feedback" }
                    </span>
                    <h1 class="display-4 fw-bold mb-4">
                        { "Get " }<span class="text-primary">{ "expert reviews" }</span>{ " on your creative work" }
                    </h1>
                    <p class="lead text-muted mb-5">
                        { "Upload your portfolio and receive constructive, threaded reviews from \
                           industry professionals. Elevate your work through meaningful critique." }
                    </p>
                    <div class="d-flex justify-content-center gap-3">
                        <button type="button" class="btn btn-primary btn-lg" onclick={ go(Page::Upload) }>
                            { "Upload Your Portfolio" }
                            <span class="bi-arrow-right ms-2" aria-hidden="true"></span>
                        </button>
                        <button type="button" class="btn btn-outline-secondary btn-lg" onclick={ go(Page::Portfolios) }>
                            { "Browse Portfolios" }
                        </button>
                    </div>
                </div>
            </section>

            <section class="py-5 bg-body-tertiary">
                <div class="container">
                    <div class="row g-4">
                        { feature("bi-upload", "Upload Your Work",
                            "Share your portfolio with images, PDFs, and videos. Showcase your best projects.") }
                        { feature("bi-star", "Get Expert Reviews",
                            "Receive detailed, constructive feedback from verified industry professionals.") }
                        { feature("bi-people", "Join Discussions",
                            "Engage in threaded conversations and learn from community insights.") }
                    </div>
                </div>
            </section>

            <section class="py-5">
                <div class="container">
                    <div class="d-flex justify-content-between align-items-end mb-4">
                        <div>
                            <span class="badge text-bg-light mb-2">{ "Featured Work" }</span>
                            <h2 class="fw-bold mb-0">{ "Discover exceptional portfolios" }</h2>
                        </div>
                        <button type="button" class="btn btn-link" onclick={ go(Page::Portfolios) }>
                            { "View All" }
                            <span class="bi-arrow-right ms-1" aria-hidden="true"></span>
                        </button>
                    </div>
                    <div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">
                        { for featured.into_iter().map(|portfolio| html! {
                            <div class="col">
                                <ui::PortfolioCard { portfolio } on_navigate={ p.on_navigate.clone() } />
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-5 bg-primary text-white text-center">
                <div class="container py-4">
                    <h2 class="fw-bold mb-3">{ "Ready to level up your portfolio?" }</h2>
                    <p class="mb-4">
                        { "Join thousands of designers, developers, and artists who use Folio Review \
                           to get meaningful feedback and grow their skills." }
                    </p>
                    <button type="button" class="btn btn-light btn-lg" onclick={ go(Page::Upload) }>
                        { "Upload Your First Portfolio" }
                    </button>
                </div>
            </section>

            <footer class="py-4 border-top">
                <div class="container d-flex justify-content-between small text-muted">
                    <span class="fw-bold">{ "Folio" }<span class="text-primary">{ "Review" }</span></span>
                    <span>{ "© 2026 Folio Review. Where creativity meets feedback." }</span>
                </div>
            </footer>
        </>
    }
}
