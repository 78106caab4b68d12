use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod chart;
mod config;
mod consent;
mod waitlist;
mod hooks {
    pub mod animation_frame;
    pub mod responsive_transform;
    pub mod scroll_animation;
}
mod components {
    pub mod animated_stats;
    pub mod cookie_banner;
    pub mod faq;
    pub mod kinetic_text;
    pub mod phone_mockup;
    pub mod symptom_chart;
    pub mod waitlist_form;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting MyIBDCompass site");
    hooks::scroll_animation::enable_reveal_styles();
    yew::Renderer::<App>::new().render();
}
