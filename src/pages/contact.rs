use yew::prelude::*;

use crate::components::footer::SocialLinks;
use crate::components::form::GenericForm;
use crate::components::layout::{PageIntro, PageSection};
use crate::config;
use crate::content::CONTACT_FORM;
use crate::theme;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let detail = |icon: &'static str, label: &'static str, value: &'static str| html! {
        <div class="flex items-center gap-3">
            <i class={classes!("fa-solid", icon, "text-2xl", "w-6", "text-center", theme::ACCENT_LIGHT)}></i>
            <div><strong class={theme::TEXT_DARK}>{ label }</strong><br />{ value }</div>
        </div>
    };

    html! {
        <PageSection>
            <PageIntro
                title="Get in Touch"
                subtitle="We'd love to hear from you. Reach out with any questions, prayer requests, or feedback." />

            <div class="grid md:grid-cols-2 gap-12 items-start max-w-5xl mx-auto">
                <div class={classes!(theme::CARD, theme::SHADOW_LG)}>
                    <h2 class={theme::SECTION_TITLE}>{"Contact Information"}</h2>
                    <div class={classes!("space-y-6", theme::TEXT_NORMAL)}>
                        { detail("fa-location-dot", "Location:", config::LOCATION_FULL) }
                        { detail("fa-phone", "Phone:", config::PHONE) }
                        { detail("fa-envelope", "Email:", config::EMAIL) }
                        <div class="mt-8">
                            <h3 class={classes!(theme::CARD_TITLE, "mb-4")}>{"Follow Us"}</h3>
                            <SocialLinks class={classes!(theme::TEXT_NORMAL)} />
                        </div>
                    </div>
                </div>

                <div class={classes!(theme::CARD, theme::SHADOW_LG)}>
                    <h2 class={theme::SECTION_TITLE}>{ CONTACT_FORM.title }</h2>
                    <GenericForm spec={&CONTACT_FORM} />
                </div>
            </div>
        </PageSection>
    }
}
