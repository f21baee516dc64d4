use yew::prelude::*;

use crate::components::hero::Hero;
use crate::config;
use crate::content::SLIDES;
use crate::theme;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let detail = |icon: &'static str, text: &'static str| html! {
        <div class="flex items-center gap-3">
            <i class={classes!("fa-solid", icon, theme::ACCENT_LIGHT)}></i>
            <span>{ text }</span>
        </div>
    };

    html! {
        <div class={classes!(theme::PRIMARY_BG, theme::FONT_BODY)}>
            <Hero slides={SLIDES} />
            <section class={classes!("bg-indigo-700/5", "py-16", "sm:py-20", "-mt-16", "relative", "z-10", "rounded-t-3xl", "shadow-2xl", "shadow-indigo-100", "border-t", theme::BORDER)}>
                <div class={classes!(theme::CONTAINER, "text-center")}>
                    <h2 class={classes!("text-3xl", "font-bold", "tracking-tight", "sm:text-4xl", theme::ACCENT_DARK, theme::FONT_HEADING)}>
                        {"Join Us This Sunday!"}
                    </h2>
                    <div class={classes!("mt-8", "flex", "flex-col", "md:flex-row", "justify-center", "items-center", "gap-4", "md:gap-8", "text-lg", "sm:text-xl", "font-semibold", theme::TEXT_DARK)}>
                        { detail("fa-calendar-days", config::SERVICE_BANNER) }
                        { detail("fa-location-dot", config::LOCATION_SHORT) }
                    </div>
                </div>
            </section>
        </div>
    }
}
