use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod components {
    pub mod case_study;
    pub mod loading_dots;
    pub mod mockup;
}
mod mockups {
    pub mod dropdown_focus;
    pub mod filter_caching;
    pub mod form_error;
    pub mod modal_contrast;
    pub mod on_demand_filters;
    pub mod priority_members;
    pub mod report_defaults;
    pub mod responsive_buttons;
    pub mod row_height;
}
mod pages {
    pub mod portfolio;
}

use pages::portfolio::Portfolio;

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
            info!("Rendering portfolio page");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Home} /> }
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

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
