use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct SearchBarProps {
    pub value: String,
    pub placeholder: &'static str,
    pub on_change: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(p: &SearchBarProps) -> Html {
    html! {
        <div class="flex-fill position-relative">
            <span class="bi-search position-absolute top-50 translate-middle-y ms-3 text-muted" aria-hidden="true"></span>
            <input
                type="text"
                class="form-control form-control-lg ps-5"
                placeholder={ p.placeholder }
                aria-label={ p.placeholder }
                value={ p.value.clone() }
                oninput={ p.on_change.reform(util::input_value) }
            />
        </div>
    }
}
