use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::form::FormPage;
use crate::pages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/groups-ministries")]
    GroupsMinistries,
    #[at("/im-new")]
    ImNew,
    #[at("/sermons")]
    Sermons,
    #[at("/events")]
    Events,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[at("/give")]
    Give,
    #[at("/forms-centre")]
    FormsCentre,
    #[at("/new-member-form")]
    NewMemberForm,
    #[at("/believers-class-form")]
    BelieversClassForm,
    #[at("/wit-form")]
    WorkersInTrainingForm,
    #[at("/sod-form")]
    SchoolOfDiscipleshipForm,
    #[at("/prayer-form")]
    PrayerForm,
    #[at("/counselling-form")]
    CounsellingForm,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The page a route displays. Unknown paths show the home page.
    pub fn page(self) -> Route {
        match self {
            Route::NotFound => Route::Home,
            other => other,
        }
    }
}

// Paths match case-insensitively, so `/About` renders the about page.
pub fn resolve(path: &str) -> Route {
    Route::recognize(&path.to_ascii_lowercase())
        .or_else(Route::not_found_route)
        .unwrap_or(Route::NotFound)
        .page()
}

pub fn switch(route: Route) -> Html {
    log::debug!("rendering {:?}", route);

    match route.page() {
        Route::Home | Route::NotFound => html! { <pages::home::HomePage /> },
        Route::About => html! { <pages::about::AboutPage /> },
        Route::GroupsMinistries => html! { <pages::groups::GroupsMinistriesPage /> },
        Route::ImNew => html! { <pages::im_new::ImNewPage /> },
        Route::Sermons => html! { <pages::sermons::SermonsPage /> },
        Route::Events => html! { <pages::events::EventsPage /> },
        Route::Faq => html! { <pages::faq::FaqPage /> },
        Route::Contact => html! { <pages::contact::ContactPage /> },
        Route::Give => html! { <pages::give::GivePage /> },
        Route::FormsCentre => html! { <pages::forms_centre::FormsCentrePage /> },
        form_route => match pages::forms::spec_for(form_route) {
            Some(spec) => html! { <FormPage {spec} /> },
            None => html! { <pages::home::HomePage /> },
        },
    }
}

pub fn navigate_to(navigator: &Navigator, route: Route) {
    navigator.push(&route);
    scroll_to_top();
}

/// Renders the page for the current location. Used in place of
/// `Switch<Route>` so lookups go through `resolve`.
#[function_component(RouteView)]
pub fn route_view() -> Html {
    let route = use_location()
        .map(|loc| resolve(loc.path()))
        .unwrap_or(Route::Home);
    switch(route)
}

/// `navigate_to` bound to the current router; a no-op outside one.
#[hook]
pub fn use_navigate() -> Callback<Route> {
    let navigator = use_navigator();
    Callback::from(move |route: Route| {
        if let Some(nav) = &navigator {
            navigate_to(nav, route);
        }
    })
}

pub fn scroll_to_top() {
    if let Some(w) = web_sys::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_path_shows_home() {
        assert_eq!(resolve("/definitely-not-a-page"), resolve("/"));
        assert_eq!(resolve("/about/extra/segments"), Route::Home);
    }

    #[test]
    fn known_paths_resolve_to_their_page() {
        assert_eq!(resolve("/about"), Route::About);
        assert_eq!(resolve("/groups-ministries"), Route::GroupsMinistries);
        assert_eq!(resolve("/wit-form"), Route::WorkersInTrainingForm);
        assert_eq!(resolve("/sod-form"), Route::SchoolOfDiscipleshipForm);
        assert_eq!(resolve("/counselling-form"), Route::CounsellingForm);
    }

    #[test]
    fn paths_match_regardless_of_case() {
        assert_eq!(resolve("/ABOUT"), Route::About);
        assert_eq!(resolve("/Im-New"), Route::ImNew);
        assert_eq!(resolve("/about/"), Route::About);
        assert_eq!(resolve("/NOPE"), Route::Home);
    }

    #[test]
    fn every_form_route_has_a_spec() {
        for route in [
            Route::NewMemberForm,
            Route::BelieversClassForm,
            Route::WorkersInTrainingForm,
            Route::SchoolOfDiscipleshipForm,
            Route::PrayerForm,
            Route::CounsellingForm,
        ] {
            assert!(pages::forms::spec_for(route).is_some(), "{route:?}");
        }
        assert!(pages::forms::spec_for(Route::Give).is_none());
    }
}
