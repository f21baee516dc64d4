use yew::prelude::*;

use crate::components::layout::{PageIntro, PageSection};
use crate::content::{CORE_VALUES, STORY, VISION};
use crate::theme;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <PageSection>
            <PageIntro
                title="About RCCG 360 Degrees Youth Church"
                subtitle="Discover the heart and soul behind our dynamic youth church." />

            <div class="grid md:grid-cols-2 gap-12 items-start max-w-5xl mx-auto">
                <div class={theme::CARD}>
                    <h2 class={theme::SECTION_TITLE}>{"Our Vision & Mission"}</h2>
                    { for VISION.iter().map(|p| html! {
                        <p class={classes!(theme::TEXT_NORMAL, "leading-relaxed", "mb-4")}>{ *p }</p>
                    }) }
                </div>
                <div class={theme::CARD}>
                    <h2 class={theme::SECTION_TITLE}>{"Our Core Values"}</h2>
                    <ul class={classes!("list-disc", "list-inside", "space-y-3", theme::TEXT_NORMAL)}>
                        { for CORE_VALUES.iter().map(|v| html! {
                            <li key={v.title}><strong class={theme::TEXT_DARK}>{ v.title }</strong>{" "}{ v.body }</li>
                        }) }
                    </ul>
                </div>
            </div>

            <div class="mt-16 text-center max-w-3xl mx-auto">
                <h2 class={classes!("text-3xl", "font-bold", "mb-6", theme::TEXT_DARK, theme::FONT_HEADING)}>{"Our Story So Far..."}</h2>
                <p class={theme::TEXT_NORMAL}>{ STORY }</p>
            </div>
        </PageSection>
    }
}
