use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(HidingImage)]
pub fn hiding_image(props: &ImageProps) -> Html {
    let broken = use_state(|| false);

    let onerror = {
        let broken = broken.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::debug!("image failed to load: {src}");
            broken.set(true);
        })
    };

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            style={(*broken).then_some("display: none")}
            {onerror}
        />
    }
}
