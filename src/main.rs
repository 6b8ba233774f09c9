use log::info;
use yew::prelude::*;

mod catalog;
mod config;
mod notify;
mod state;
mod timer;
mod components {
    pub mod action_button;
    pub mod course_card;
    pub mod hero;
    pub mod nav;
    pub mod reveal;
}
mod pages {
    pub mod landing;
    pub mod styles;
}

use pages::landing::LearnHub;

#[function_component]
fn App() -> Html {
    html! {
        <LearnHub />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("LearnHub by Fazal Shaikh - E-Learning Platform loaded");
    yew::Renderer::<App>::new().render();
}
