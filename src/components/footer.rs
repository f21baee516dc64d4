use yew::prelude::*;

use crate::config;
use crate::content::{NavLink, FOOTER_EXPLORE, FOOTER_HELP, SOCIAL_ICONS};
use crate::route::{use_navigate, Route};
use crate::theme;

#[function_component(Footer)]
pub fn footer() -> Html {
    let go = use_navigate();
    let year = js_sys::Date::new_0().get_full_year();

    let link_list = |links: &'static [NavLink]| {
        html! {
            <ul class="space-y-2 text-sm">
                { for links.iter().map(|link| {
                    let go = go.clone();
                    let route: Route = link.route;
                    html! {
                        <li key={link.title}>
                            <button onclick={Callback::from(move |_: MouseEvent| go.emit(route))}
                                class={classes!(theme::TEXT_LIGHT, "hover:text-indigo-700", theme::TRANSITION)}>
                                { link.title }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    let heading = classes!("text-xl", "font-bold", "mb-4", theme::TEXT_DARK, theme::FONT_HEADING);

    html! {
        <footer class={classes!(theme::HEADER_BG, "border-t", theme::BORDER)}>
            <div class={classes!(theme::CONTAINER, "py-12")}>
                <div class={classes!("grid", "grid-cols-1", "md:grid-cols-4", "gap-8", "text-center", "md:text-left", theme::TEXT_NORMAL)}>
                    <div>
                        <h3 class={heading.clone()}>{ config::SHORT_NAME }</h3>
                        <p class={classes!(theme::TEXT_LIGHT, "text-sm")}>{ config::TAGLINE }</p>
                    </div>
                    <div>
                        <h3 class={heading.clone()}>{"Explore"}</h3>
                        { link_list(FOOTER_EXPLORE) }
                    </div>
                    <div>
                        <h3 class={heading.clone()}>{"Get Help"}</h3>
                        { link_list(FOOTER_HELP) }
                    </div>
                    <div>
                        <h3 class={heading}>{"Connect"}</h3>
                        <SocialLinks class={classes!(theme::TEXT_LIGHT)} />
                        <p class={classes!(theme::TEXT_LIGHT, "text-sm", "mt-4")}>
                            <strong class={theme::TEXT_DARK}>{"Service: "}</strong>{ config::SERVICE_TIME }
                        </p>
                        <p class={classes!(theme::TEXT_LIGHT, "text-sm")}>
                            <strong class={theme::TEXT_DARK}>{"Location: "}</strong>{ config::LOCATION_SHORT }
                        </p>
                    </div>
                </div>
                <div class={classes!("mt-12", "pt-8", "border-t", "text-center", "text-sm", theme::BORDER, theme::TEXT_LIGHT)}>
                    <p>{ format!("© {year} {}. All Rights Reserved.", config::SITE_NAME) }</p>
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct SocialLinksProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Social icons; the accounts are not public yet, so the links are inert.
#[function_component(SocialLinks)]
pub fn social_links(props: &SocialLinksProps) -> Html {
    html! {
        <div class="flex justify-center md:justify-start space-x-6">
            { for SOCIAL_ICONS.iter().map(|icon| html! {
                <a key={*icon} href="#" class={classes!(props.class.clone(), "hover:text-indigo-700", theme::TRANSITION)}>
                    <i class={classes!(*icon, "text-2xl")}></i>
                </a>
            }) }
        </div>
    }
}
