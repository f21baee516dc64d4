use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_lock::use_body_scroll_lock;
use crate::config;
use crate::content::{NavEntry, NavLink, NAV};
use crate::route::{resolve, use_navigate, Route};
use crate::theme;

const NAV_ITEM: &str = "px-4 py-2 rounded-md font-medium text-stone-700 hover:text-indigo-700 transition-all duration-300 ease-in-out";
const MOBILE_ITEM: &str = "text-stone-700 hover:text-indigo-700 text-xl font-medium flex items-center py-2";

/// Sticky site header: logo, desktop nav with the Explore dropdown, and the
/// mobile menu overlay.
#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let explore_open = use_state(|| false);
    let current = use_location().map(|loc| resolve(loc.path()));
    let navigate = use_navigate();

    use_body_scroll_lock(*menu_open);

    // Back/forward navigation closes overlays too.
    {
        let menu_open = menu_open.clone();
        let explore_open = explore_open.clone();
        use_effect_with(current, move |_| {
            menu_open.set(false);
            explore_open.set(false);
            || ()
        });
    }

    // Every nav action also closes whatever overlay is open.
    let go = {
        let menu_open = menu_open.clone();
        let explore_open = explore_open.clone();
        Callback::from(move |route: Route| {
            menu_open.set(false);
            explore_open.set(false);
            navigate.emit(route);
        })
    };
    let go_to = |route: Route| {
        let go = go.clone();
        Callback::from(move |_: MouseEvent| go.emit(route))
    };

    let is_active = |link: &NavLink| current == Some(link.route);

    let desktop = NAV.iter().map(|entry| match entry {
        NavEntry::Link(link) => {
            let active = is_active(link).then_some("text-indigo-700 bg-stone-100");
            html! {
                <button key={link.title} onclick={go_to(link.route)} class={classes!(NAV_ITEM, active)}>
                    { link.title }
                </button>
            }
        }
        NavEntry::Dropdown { title, items, .. } => {
            let toggle = {
                let explore_open = explore_open.clone();
                Callback::from(move |_: MouseEvent| explore_open.set(!*explore_open))
            };
            let shown = if *explore_open {
                "opacity-100 visible translate-y-0"
            } else {
                "opacity-0 invisible translate-y-1 group-hover:opacity-100 group-hover:visible group-hover:translate-y-0"
            };
            html! {
                <div key={*title} class="relative group">
                    <button onclick={toggle} aria-expanded={explore_open.to_string()} class={classes!(NAV_ITEM, "flex", "items-center")}>
                        { *title }
                        <i class={classes!("fa-solid", "fa-chevron-down", "ml-2", "text-sm", theme::TRANSITION, "group-hover:rotate-180")}></i>
                    </button>
                    <div class={classes!("absolute", "top-full", "left-0", "mt-2", "w-64", "rounded-lg", theme::HEADER_BG, theme::SHADOW_LG, theme::BORDER, theme::TRANSITION, shown)}>
                        { for items.iter().map(|item| html! {
                            <button key={item.title} onclick={go_to(item.route)}
                                class={classes!("w-full", "text-left", "px-4", "py-3", "text-sm", "flex", "items-center", theme::TEXT_NORMAL, "hover:bg-stone-100", "hover:text-indigo-700", theme::TRANSITION)}>
                                <i class={classes!(item.icon, "mr-3", theme::ACCENT_LIGHT)}></i>{ item.title }
                            </button>
                        }) }
                    </div>
                </div>
            }
        }
    });

    let mobile_menu = if *menu_open {
        let close = {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| menu_open.set(false))
        };
        let entries = NAV.iter().map(|entry| match entry {
            NavEntry::Link(link) => {
                let active = is_active(link).then_some(theme::ACCENT_MEDIUM);
                html! {
                    <button key={link.title} onclick={go_to(link.route)} class={classes!(MOBILE_ITEM, active)}>
                        <i class={classes!(link.icon, "w-8", "text-center", theme::ACCENT_LIGHT)}></i>{ link.title }
                    </button>
                }
            }
            NavEntry::Dropdown { title, icon, items } => html! {
                <div key={*title}>
                    <p class={MOBILE_ITEM}>
                        <i class={classes!(*icon, "w-8", "text-center", theme::ACCENT_LIGHT)}></i>{ *title }
                    </p>
                    <div class="ml-8 space-y-2">
                        { for items.iter().map(|item| html! {
                            <button key={item.title} onclick={go_to(item.route)}
                                class={classes!("w-full", "text-left", "text-lg", "flex", "items-center", theme::TEXT_NORMAL, "hover:text-indigo-700", theme::TRANSITION)}>
                                <i class={classes!(item.icon, "mr-2", "text-base", theme::ACCENT_LIGHT)}></i>{ item.title }
                            </button>
                        }) }
                    </div>
                </div>
            },
        });

        html! {
            <div id="mobile-menu" class={classes!("fixed", "inset-0", "h-full", "w-full", "max-w-xs", "z-50", "p-6", "overflow-y-auto", theme::HEADER_BG, theme::SHADOW_LG)}>
                <div class="flex justify-end mb-8">
                    <button onclick={close} class="p-2" aria-label="Close menu">
                        <i class={classes!("fa-solid", "fa-xmark", "text-2xl", theme::TEXT_DARK)}></i>
                    </button>
                </div>
                <nav class="flex flex-col space-y-4">
                    { for entries }
                    <button onclick={go_to(Route::NewMemberForm)}
                        class={classes!(theme::BTN_PRIMARY, "mt-6", "py-3", "px-8", "text-xl", "w-full", "flex", "items-center", "justify-center")}>
                        <i class="fa-solid fa-user-plus mr-2"></i>{"New Member"}
                    </button>
                </nav>
            </div>
        }
    } else {
        html! {}
    };

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    html! {
        <header class={classes!(theme::HEADER_BG, "sticky", "top-0", "z-50", "border-b", theme::SHADOW_LG, theme::BORDER)}>
            <div class={theme::CONTAINER}>
                <div class="flex items-center justify-between h-20">
                    <button onclick={go_to(Route::Home)} class="flex items-center space-x-2" aria-label="Home">
                        <img src={config::LOGO_URL} alt="RCCG 360 Logo" class="h-14 sm:h-16 object-contain" />
                    </button>

                    <nav class="hidden lg:flex items-center space-x-2">
                        { for desktop }
                    </nav>

                    <div class="hidden lg:block">
                        <button onclick={go_to(Route::NewMemberForm)} class={classes!(theme::BTN_OUTLINE, "py-2", "px-6", "text-base")}>
                            {"New Member"}
                        </button>
                    </div>

                    <div class="lg:hidden">
                        <button onclick={open_menu} class="p-2" aria-label="Open menu">
                            <i class={classes!("fa-solid", "fa-bars", "text-xl", theme::TEXT_DARK)}></i>
                        </button>
                    </div>
                </div>
            </div>
            { mobile_menu }
        </header>
    }
}
