use yew::prelude::*;

use crate::components::image::HidingImage;
use crate::components::layout::{PageIntro, PageSection};
use crate::content::{Event, EVENTS};
use crate::theme;

fn event_card(event: &Event) -> Html {
    html! {
        <div key={event.id} class={classes!(theme::CARD, "overflow-hidden", "transform", theme::TRANSITION, theme::HOVER_SCALE)}>
            <HidingImage src={event.image_url} alt={event.title} class={classes!("w-full", "h-48", "object-cover")} />
            <div class="p-6">
                <h2 class={classes!("text-2xl", "font-bold", "mb-2", theme::TEXT_DARK, theme::FONT_HEADING)}>{ event.title }</h2>
                <p class={classes!("font-semibold", "mb-2", "flex", "items-center", "gap-2", theme::ACCENT_MEDIUM)}>
                    <i class="fa-solid fa-calendar-day"></i>{ event.date }
                </p>
                <p class={classes!(theme::TEXT_NORMAL, "mb-4")}>{ event.description }</p>
                <div class={classes!("text-sm", "space-y-1", theme::TEXT_LIGHT)}>
                    <p class="flex items-center gap-2"><i class="fa-solid fa-clock"></i>{ event.time }</p>
                    <p class="flex items-center gap-2"><i class="fa-solid fa-location-dot"></i>{ event.location }</p>
                </div>
                <button class={classes!(theme::BTN_PRIMARY, theme::BTN_MD, "mt-6", "w-full")}>{"Learn More"}</button>
            </div>
        </div>
    }
}

#[function_component(EventsPage)]
pub fn events_page() -> Html {
    html! {
        <PageSection>
            <PageIntro
                title="Upcoming Events"
                subtitle="Stay connected with our vibrant community. Mark your calendars and join us!" />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-10 max-w-6xl mx-auto">
                { for EVENTS.iter().map(event_card) }
            </div>
        </PageSection>
    }
}
