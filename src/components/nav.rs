use yew::prelude::*;

use crate::state::navigation::NavigationState;

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#courses", "Courses"),
    ("#features", "Features"),
    ("#about", "About"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub state: NavigationState,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<String>,
    pub on_sign_up: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        state,
        on_toggle,
        on_navigate,
        on_sign_up,
    } = props;

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let sign_up = {
        let on_sign_up = on_sign_up.clone();
        Callback::from(move |_: MouseEvent| on_sign_up.emit(()))
    };

    let [bar_top, bar_middle, bar_bottom] = state.bar_styles();

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="logo">{"Learn"}<span>{"Hub"}</span></a>
                <ul class={classes!("nav-menu", state.menu_open().then_some("active"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| {
                        let onclick = {
                            let on_navigate = on_navigate.clone();
                            let href = href.to_string();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_navigate.emit(href.clone());
                            })
                        };
                        html! {
                            <li>
                                <a
                                    href={*href}
                                    class={classes!("nav-link", state.is_active(href).then_some("active"))}
                                    {onclick}
                                >
                                    { *label }
                                </a>
                            </li>
                        }
                    }) }
                    <li><button class="signup-btn" onclick={sign_up}>{"Sign Up"}</button></li>
                </ul>
                <button
                    class={classes!("mobile-toggle", state.toggle_animated().then_some("active"))}
                    onclick={toggle_menu}
                >
                    <span style={bar_top}></span>
                    <span style={bar_middle}></span>
                    <span style={bar_bottom}></span>
                </button>
            </div>
        </nav>
    }
}
