use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::clipboard::{copy_text, BrowserClipboard};
use crate::components::layout::{PageIntro, PageSection};
use crate::components::toast::{use_toast, Toast, ToastMsg};
use crate::content::{BankAccount, GIVING_CHANNELS, GIVING_VERSE, WHY_GIVE};
use crate::theme;

fn account_row(account: &'static BankAccount, on_copy: &Callback<&'static str>) -> Html {
    let onclick = on_copy.reform(move |_: MouseEvent| account.number);
    html! {
        <div key={account.number} class="flex justify-between items-center bg-stone-50 p-3 rounded-lg border border-stone-200">
            <div>
                <p class="text-sm"><strong>{"Bank: "}</strong>{ account.bank }</p>
                <p class="text-sm"><strong>{"Acct Name: "}</strong>{ account.account_name }</p>
                <p class="text-lg font-bold">
                    { account.number }
                    <button {onclick} aria-label={format!("Copy {} account number", account.bank)}
                        class="ml-2 text-indigo-600 hover:text-indigo-800 text-base">
                        <i class="fa-solid fa-copy"></i>
                    </button>
                </p>
                if let Some(swift) = account.swift {
                    <p class="text-sm mt-1"><strong>{"SWIFT/BIC: "}</strong>{ swift }</p>
                }
            </div>
        </div>
    }
}

#[function_component(GivePage)]
pub fn give_page() -> Html {
    let (toast, show_toast) = use_toast();

    let on_copy = Callback::from(move |number: &'static str| {
        let show_toast = show_toast.clone();
        spawn_local(async move {
            match copy_text(&BrowserClipboard, number).await {
                Ok(method) => {
                    log::debug!("copied account number via {method:?}");
                    show_toast.emit(ToastMsg::ok("Account number copied to clipboard!"));
                }
                Err(e) => {
                    log::warn!("failed to copy account number: {e}");
                    show_toast.emit(ToastMsg::error("Failed to copy account number. Please copy manually."));
                }
            }
        });
    });

    let channels = GIVING_CHANNELS.iter().map(|channel| html! {
        <li key={channel.title} class="flex items-start gap-4">
            <i class={classes!(channel.icon, "text-3xl", "mt-1", "flex-shrink-0", theme::ACCENT_LIGHT)}></i>
            <div>
                <h3 class={classes!("font-semibold", "text-xl", "mb-2", theme::TEXT_DARK, theme::FONT_HEADING)}>{ channel.title }</h3>
                <div class="space-y-3">
                    { for channel.accounts.iter().map(|a| account_row(a, &on_copy)) }
                </div>
            </div>
        </li>
    });

    html! {
        <PageSection alt={true}>
            <PageIntro
                title="Partner With Us"
                subtitle="Your generosity enables us to fulfill our vision and impact more lives." />

            <div class="grid md:grid-cols-2 gap-12 items-center max-w-5xl mx-auto">
                <div class={classes!(theme::CARD, theme::SHADOW_LG)}>
                    <h2 class={theme::SECTION_TITLE}>{"Why Your Giving Matters"}</h2>
                    { for WHY_GIVE.iter().map(|p| html! {
                        <p class={classes!(theme::TEXT_NORMAL, "leading-relaxed", "mb-4")}>{ *p }</p>
                    }) }
                </div>
                <div class={classes!(theme::CARD, theme::SHADOW_LG)}>
                    <h2 class={theme::SECTION_TITLE}>{"Ways to Give"}</h2>
                    <ul class={classes!("space-y-6", theme::TEXT_NORMAL)}>{ for channels }</ul>
                </div>
            </div>

            <div class="mt-16 text-center">
                <p class={classes!("max-w-2xl", "mx-auto", "italic", theme::TEXT_NORMAL)}>{ GIVING_VERSE }</p>
            </div>
            <Toast msg={toast} />
        </PageSection>
    }
}
