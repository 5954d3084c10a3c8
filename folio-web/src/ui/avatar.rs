use folio_client::display;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
    pub name: String,
    #[prop_or_default]
    pub url: Option<String>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Avatar)]
pub fn avatar(p: &AvatarProps) -> Html {
    match &p.url {
        Some(url) => html! {
            <img class={ classes!("avatar", "flex-shrink-0", p.class.clone()) } src={ url.clone() } alt={ p.name.clone() } />
        },
        None => html! {
            <span class={ classes!("avatar", "avatar-fallback", p.class.clone()) } aria-label={ p.name.clone() }>
                { display::initials(&p.name) }
            </span>
        },
    }
}
