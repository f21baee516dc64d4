use yew::prelude::*;

use crate::components::layout::{PageIntro, PageSection};
use crate::content::{NEXT_STEPS, WHAT_TO_EXPECT};
use crate::route::use_navigate;
use crate::theme;

#[function_component(ImNewPage)]
pub fn im_new_page() -> Html {
    let go = use_navigate();
    let step_title = classes!("font-semibold", "text-xl", theme::TEXT_DARK, theme::FONT_HEADING);

    let expectations = WHAT_TO_EXPECT.iter().map(|h| html! {
        <div key={h.title} class="p-5 rounded-xl">
            <h3 class={classes!(step_title.clone(), "mb-2")}>{ h.title }</h3>
            <p class={theme::TEXT_NORMAL}>{ h.body }</p>
        </div>
    });

    let steps = NEXT_STEPS.iter().map(|step| {
        let onclick = {
            let go = go.clone();
            let route = step.route;
            Callback::from(move |_: MouseEvent| go.emit(route))
        };
        html! {
            <div key={step.title} class="flex items-center gap-4">
                <i class={classes!(step.icon, "text-3xl", "flex-shrink-0", theme::ACCENT_LIGHT)}></i>
                <div>
                    <h3 class={classes!(step_title.clone(), "mb-1")}>{ step.title }</h3>
                    <p class={theme::TEXT_NORMAL}>{ step.body }</p>
                    <button {onclick} class={classes!(theme::LINK_ACTION, "flex", "items-center", "gap-1")}>
                        { step.action }{" "}<i class="fa-solid fa-arrow-right text-sm"></i>
                    </button>
                </div>
            </div>
        }
    });

    html! {
        <PageSection>
            <PageIntro
                title="Welcome to RCCG 360 Degrees Youth Church!"
                subtitle="We're so glad you're here. This page is designed to help you get acquainted with our church family." />

            <div class="grid lg:grid-cols-2 gap-16 items-start max-w-6xl mx-auto">
                <div class={classes!(theme::CARD, theme::SHADOW_LG)}>
                    <h2 class={theme::SECTION_TITLE}>{"What to Expect"}</h2>
                    <div class="space-y-6">{ for expectations }</div>
                </div>
                <div class={classes!(theme::CARD, theme::SHADOW_LG)}>
                    <h2 class={theme::SECTION_TITLE}>{"Your Next Steps"}</h2>
                    <div class="space-y-6">{ for steps }</div>
                </div>
            </div>
        </PageSection>
    }
}
