use yew::prelude::*;
use log::{error, info, Level};

mod config;
mod content;
mod head;
mod schema;
mod contact;
mod components;
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    if let Err(e) = head::init() {
        error!("Failed to set up document head: {}", e);
    }
    yew::Renderer::<App>::new().render();
}
