use yew::prelude::*;

use crate::components::layout::{PageIntro, PageSection};
use crate::content::{Ministry, Tribe, MINISTRIES, TRIBES};
use crate::route::{use_navigate, Route};
use crate::theme;

fn tribe_card(tribe: &Tribe) -> Html {
    html! {
        <div key={tribe.month} class={classes!(theme::CARD, theme::TRANSITION, theme::HOVER_SCALE)}>
            <h3 class={theme::CARD_TITLE}>{ format!("{} - {}", tribe.month, tribe.name) }</h3>
            <p class={classes!(theme::ACCENT_LIGHT, "text-sm", "italic", "mb-3")}>{ tribe.verse }</p>
            <p class={classes!(theme::TEXT_NORMAL, "text-sm")}>{ tribe.description }</p>
        </div>
    }
}

fn ministry_card(ministry: &Ministry, on_join: Callback<MouseEvent>) -> Html {
    html! {
        <div key={ministry.name} class={classes!(theme::CARD, "flex", "items-start", "space-x-4")}>
            <div class={classes!("bg-indigo-600/10", "p-3", "rounded-full", "text-xl", "flex-shrink-0", theme::ACCENT_MEDIUM)}>
                <i class={ministry.icon}></i>
            </div>
            <div>
                <h3 class={theme::CARD_TITLE}>{ ministry.name }</h3>
                <p class={classes!(theme::TEXT_NORMAL, "text-sm")}>{ ministry.description }</p>
                <button onclick={on_join} class={classes!(theme::LINK_ACTION, "text-sm")}>{"Join Ministry"}</button>
            </div>
        </div>
    }
}

#[function_component(GroupsMinistriesPage)]
pub fn groups_ministries_page() -> Html {
    let go = use_navigate();
    let on_join = Callback::from(move |_: MouseEvent| go.emit(Route::FormsCentre));
    let blurb = classes!("text-center", "max-w-3xl", "mx-auto", "mb-12", theme::TEXT_NORMAL);
    let heading = classes!("text-3xl", "font-bold", "text-center", "mb-10", theme::ACCENT_MEDIUM, theme::FONT_HEADING);

    html! {
        <PageSection alt={true}>
            <PageIntro
                title="Our Tribes & Ministries"
                subtitle="Find your place to belong, serve, and grow within our vibrant community." />

            <section class="mb-20">
                <h2 class={heading.clone()}>{"The 360DYC Tribal System"}</h2>
                <p class={blurb.clone()}>
                    {"At 360DYC, we believe in fostering deep connections and spiritual growth through our unique Tribal System. Every member belongs to a tribe based on their birth month, creating a close-knit family within the larger church body. Your tribe is your first point of contact for fellowship, support, and collaborative service."}
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-8">
                    { for TRIBES.iter().map(tribe_card) }
                </div>
                <div class="text-center mt-12">
                    <p class={theme::TEXT_NORMAL}>
                        {"Don't know your tribe? Just check your birth month! We encourage you to actively connect with your tribe members for fellowship and support."}
                    </p>
                </div>
            </section>

            <section>
                <h2 class={heading}>{"Our Ministries"}</h2>
                <p class={blurb}>
                    {"Beyond our tribal system, we have various ministries where you can serve God and develop your gifts. These ministries are the hands and feet of the church, working together to achieve our collective vision."}
                </p>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    { for MINISTRIES.iter().map(|m| ministry_card(m, on_join.clone())) }
                </div>
            </section>
        </PageSection>
    }
}
