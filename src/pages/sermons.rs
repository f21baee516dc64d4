use yew::prelude::*;

use crate::components::layout::{PageIntro, PageSection};
use crate::content::{Sermon, SERMONS};
use crate::theme;

#[derive(Properties, PartialEq)]
struct SermonCardProps {
    sermon: &'static Sermon,
}

/// Embedded video, replaced by the sermon's still image if the embed errors.
#[function_component(SermonCard)]
fn sermon_card(props: &SermonCardProps) -> Html {
    let sermon = props.sermon;
    let embed_failed = use_state(|| false);

    let media = if *embed_failed {
        html! {
            <img src={sermon.image_url} alt={sermon.title}
                class="w-full h-full object-cover" style="filter: grayscale(50%)" />
        }
    } else {
        let onerror = {
            let embed_failed = embed_failed.clone();
            Callback::from(move |_: Event| {
                log::warn!("sermon embed failed, showing still: {}", sermon.video_url);
                embed_failed.set(true);
            })
        };
        html! {
            <iframe
                class="w-full h-full"
                src={sermon.video_url}
                title={sermon.title}
                frameborder="0"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen={true}
                {onerror}
            ></iframe>
        }
    };

    html! {
        <div class={classes!(theme::CARD, "overflow-hidden", "transform", theme::TRANSITION, theme::HOVER_SCALE)}>
            <div class="aspect-video w-full">{ media }</div>
            <div class="p-6">
                <h2 class={classes!("text-2xl", "font-bold", "mb-2", theme::TEXT_DARK, theme::FONT_HEADING)}>{ sermon.title }</h2>
                <p class={classes!("font-semibold", "mb-2", "flex", "items-center", "gap-2", theme::ACCENT_MEDIUM)}>
                    <i class="fa-solid fa-user-tie"></i>{ sermon.preacher }
                </p>
                <p class={classes!(theme::TEXT_NORMAL, "mb-4")}>{ sermon.description }</p>
                <div class={classes!("text-sm", "flex", "items-center", "gap-2", theme::TEXT_LIGHT)}>
                    <i class="fa-solid fa-calendar-day"></i>
                    <span>{ sermon.date }</span>
                </div>
                <button class={classes!(theme::BTN_PRIMARY, theme::BTN_MD, "mt-6", "w-full")}>{"Watch Sermon"}</button>
            </div>
        </div>
    }
}

#[function_component(SermonsPage)]
pub fn sermons_page() -> Html {
    html! {
        <PageSection alt={true}>
            <PageIntro
                title="Our Latest Sermons"
                subtitle="Catch up on recent messages and be blessed by the Word of God. You can listen or watch them here." />
            <div class="grid md:grid-cols-2 gap-10 max-w-6xl mx-auto">
                { for SERMONS.iter().map(|sermon| html! { <SermonCard key={sermon.id} {sermon} /> }) }
            </div>
        </PageSection>
    }
}
