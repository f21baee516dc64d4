use yew::prelude::*;

use crate::components::layout::{PageIntro, PageSection};
use crate::content::FORM_LINKS;
use crate::route::use_navigate;
use crate::theme;

#[function_component(FormsCentrePage)]
pub fn forms_centre_page() -> Html {
    let go = use_navigate();

    let tiles = FORM_LINKS.iter().map(|form| {
        let onclick = {
            let go = go.clone();
            let route = form.route;
            Callback::from(move |_: MouseEvent| go.emit(route))
        };
        html! {
            <div key={form.title} class={classes!(theme::CARD, "flex", "flex-col", "items-center", "text-center", theme::SHADOW_LG, theme::TRANSITION, theme::HOVER_SCALE)}>
                <div class={classes!("bg-indigo-700/10", "p-4", "rounded-full", "mb-4", "text-3xl", theme::ACCENT_MEDIUM)}>
                    <i class={form.icon}></i>
                </div>
                <h2 class={classes!("text-xl", "font-bold", theme::TEXT_DARK, theme::FONT_HEADING)}>{ form.title }</h2>
                <button {onclick} class={classes!(theme::BTN_OUTLINE, "mt-6", "w-full", "py-2", "px-6", "text-base")}>
                    {"Open Form"}
                </button>
            </div>
        }
    });

    html! {
        <PageSection>
            <PageIntro
                title="Forms Centre"
                subtitle="Ready to take your next step? Find the right form below to get started on your journey with us." />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-5xl mx-auto">
                { for tiles }
            </div>
        </PageSection>
    }
}
