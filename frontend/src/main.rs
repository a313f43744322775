use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod identity;
mod scroll;
mod components {
    pub mod award;
    pub mod footer;
    pub mod hero;
    pub mod indicator;
    pub mod insights;
    pub mod lexology;
    pub mod user_badge;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


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
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
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

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    gloo_console::log!("Starting Park & Choi site");
    yew::Renderer::<App>::new().render();
}
