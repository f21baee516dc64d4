use yew::prelude::*;

use crate::theme;

#[derive(Properties, PartialEq)]
pub struct PageSectionProps {
    #[prop_or_default]
    pub alt: bool,
    pub children: Children,
}

#[function_component(PageSection)]
pub fn page_section(props: &PageSectionProps) -> Html {
    let bg = if props.alt { theme::SECONDARY_BG } else { theme::PRIMARY_BG };
    html! {
        <div class={classes!(theme::SECTION_PADDING, bg, theme::FONT_BODY)}>
            <div class={theme::CONTAINER}>
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageIntroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(PageIntro)]
pub fn page_intro(props: &PageIntroProps) -> Html {
    html! {
        <div class="max-w-4xl mx-auto text-center mb-16">
            <h1 class={theme::HEADING_MAIN}>{ props.title.clone() }</h1>
            <p class={theme::HEADING_SUB}>{ props.subtitle.clone() }</p>
        </div>
    }
}
