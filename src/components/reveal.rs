use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::state::reveal::{RevealGroup, RevealState};

/// Intersection observer that emits `on_visible` once, the first time its
/// target crosses the reveal threshold. Disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn new(on_visible: Callback<()>) -> Option<Self> {
        let mut state = RevealState::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if state.observe(intersecting) {
                on_visible.emit(());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                None
            }
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Hands `node` to a reveal observer after its group's stagger delay.
#[hook]
pub fn use_reveal(node: NodeRef, group: RevealGroup, index: usize, on_visible: Callback<()>) {
    let delay = group.delay_for(index);
    use_effect_with_deps(
        move |(node, delay)| {
            let registration = node.cast::<Element>().and_then(|element| {
                RevealObserver::new(on_visible).map(|reveal| {
                    let observer = reveal.observer.clone();
                    let pending = Timeout::new(*delay, move || observer.observe(&element));
                    (reveal, pending)
                })
            });
            move || drop(registration)
        },
        (node, delay),
    );
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub group: RevealGroup,
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that starts hidden and fades its children in when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let state = state.clone();
        use_reveal(
            node.clone(),
            props.group,
            props.index,
            Callback::from(move |_| state.set(RevealState::Visible)),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={state.style()}>
            { for props.children.iter() }
        </div>
    }
}
