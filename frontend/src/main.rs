use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};

mod config;
mod wizard {
    pub mod state;
    pub mod fields;
    pub mod submission;
    pub mod view;
}
mod hooks {
    pub mod scroll_reveal;
    pub mod form_modal;
}
mod components {
    pub mod accent;
    pub mod header;
    pub mod hero;
    pub mod problem;
    pub mod solution;
    pub mod pricing;
    pub mod footer;
    pub mod seo;
}
mod pages {
    pub mod home;
    pub mod form;
}

use pages::{
    home::Home,
    form::FormPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/form")]
    Form,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Form => {
            info!("Rendering Form page");
            html! { <FormPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    if !config::has_access_key() {
        warn!("WEB3FORMS_ACCESS_KEY was not set at build time, submissions will be rejected");
    }
    yew::Renderer::<App>::new().render();
}
