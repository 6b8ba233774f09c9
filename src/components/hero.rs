use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::state::parallax;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_sign_up: Callback<()>,
    pub on_navigate: Callback<String>,
}

/// Hero banner whose background scrolls at half speed.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero_ref = use_node_ref();

    {
        let hero_ref = hero_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let target = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let Some(hero) = hero_ref.cast::<HtmlElement>() else {
                            return;
                        };
                        let scrolled = target.scroll_y().unwrap_or_default();
                        let position = parallax::background_position(scrolled);
                        if let Err(err) = hero.style().set_property("background-position-y", &position) {
                            warn!("Failed to move hero background: {:?}", err);
                        }
                    }) as Box<dyn FnMut()>);

                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to register parallax listener: {:?}", err);
                    } else {
                        debug!("Parallax listener registered");
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let sign_up = {
        let on_sign_up = props.on_sign_up.clone();
        Callback::from(move |_: MouseEvent| on_sign_up.emit(()))
    };
    let browse = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("#courses".to_string());
        })
    };

    html! {
        <header class="hero" id="home" ref={hero_ref}>
            <div class="hero-content">
                <h1>{"Learn Without Limits"}</h1>
                <p class="hero-subtitle">
                    {"Build real skills with expert-led courses in development, design, data and marketing."}
                </p>
                <div class="hero-cta-group">
                    <a href="#courses" class="primary-btn hero-browse" onclick={browse}>{"Browse Courses"}</a>
                    <button class="secondary-btn" onclick={sign_up}>{"Get Started Free"}</button>
                </div>
            </div>
        </header>
    }
}
