use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::route::RouteView;
use crate::theme;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class={classes!("min-h-screen", theme::FONT_BODY, theme::PRIMARY_BG)}>
                <Header />
                <main>
                    <RouteView />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
