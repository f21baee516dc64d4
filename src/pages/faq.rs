use yew::prelude::*;

use crate::components::layout::{PageIntro, PageSection};
use crate::content::FAQS;
use crate::state::accordion::Accordion;
use crate::theme;

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    let accordion = use_state(Accordion::default);

    let items = FAQS.iter().enumerate().map(|(i, faq)| {
        let open = accordion.is_open(i);
        let onclick = {
            let accordion = accordion.clone();
            Callback::from(move |_: MouseEvent| accordion.set(accordion.toggle(i)))
        };
        let chevron = if open { "fa-chevron-up" } else { "fa-chevron-down" };

        html! {
            <div key={i} class={theme::CARD}>
                <button {onclick} aria-expanded={open.to_string()}
                    class="w-full flex justify-between items-center text-left focus:outline-none">
                    <span class={classes!("text-xl", "font-semibold", theme::TEXT_DARK)}>{ faq.question }</span>
                    <i class={classes!("fa-solid", chevron, "transition-transform", "duration-300", theme::ACCENT_LIGHT)}></i>
                </button>
                if open {
                    <p class={classes!("mt-4", "leading-relaxed", theme::TEXT_NORMAL)}>{ faq.answer }</p>
                }
            </div>
        }
    });

    html! {
        <PageSection alt={true}>
            <PageIntro
                title="Frequently Asked Questions"
                subtitle="Find answers to common questions about our church and services." />
            <div class="max-w-3xl mx-auto space-y-6">
                { for items }
            </div>
        </PageSection>
    }
}
