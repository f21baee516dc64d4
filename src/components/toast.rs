use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMsg {
    pub text: AttrValue,
    pub ok: bool,
}

impl ToastMsg {
    pub fn ok(text: impl Into<AttrValue>) -> Self {
        Self { text: text.into(), ok: true }
    }

    pub fn error(text: impl Into<AttrValue>) -> Self {
        Self { text: text.into(), ok: false }
    }
}

/// Current toast plus a callback that shows a new one. Each toast clears
/// itself after `TOAST_MS`; a newer toast replaces (and cancels) the older
/// timer, and unmounting cancels whatever is pending.
#[hook]
pub fn use_toast() -> (Option<ToastMsg>, Callback<ToastMsg>) {
    let toast = use_state(|| None::<ToastMsg>);
    let timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let timer = timer.clone();
        use_effect_with((), move |_| move || drop(timer.borrow_mut().take()));
    }

    let show = {
        let toast = toast.clone();
        Callback::from(move |msg: ToastMsg| {
            toast.set(Some(msg));
            let toast = toast.clone();
            *timer.borrow_mut() = Some(Timeout::new(TOAST_MS, move || toast.set(None)));
        })
    };

    ((*toast).clone(), show)
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub msg: Option<ToastMsg>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(msg) = &props.msg else {
        return html! {};
    };
    let tone = if msg.ok { "bg-indigo-700" } else { "bg-red-600" };

    html! {
        <div role="status" class={classes!("fixed", "bottom-6", "left-1/2", "-translate-x-1/2", "z-50", "text-white", "px-6", "py-3", "rounded-full", "shadow-lg", tone)}>
            { msg.text.clone() }
        </div>
    }
}
