use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::notify;
use crate::state::action::{ActionButton, ActionKind, ButtonPhase};
use crate::timer;

pub enum ButtonEvent {
    Press,
    Complete,
}

impl Reducible for ActionButton {
    type Action = ButtonEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ButtonEvent::Press => next.press(),
            ButtonEvent::Complete => next.complete(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub kind: ActionKind,
    pub course_title: AttrValue,
}

/// Enroll or preview button running the simulated `Idle -> Busy -> Done` flow.
#[function_component(ActionButtonView)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let kind = props.kind;
    let button = use_reducer(|| ActionButton::new(kind));

    let onclick = {
        let button = button.clone();
        let title = props.course_title.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if button.phase() != ButtonPhase::Idle {
                return;
            }
            info!("{:?} requested for {}", kind, title);
            notify::alert(&kind.message(&title));
            button.dispatch(ButtonEvent::Press);

            let button = button.clone();
            timer::detach(kind.delay_ms(), move || button.dispatch(ButtonEvent::Complete));
        })
    };

    html! {
        <button
            class={kind.class()}
            disabled={button.disabled()}
            style={button.style()}
            {onclick}
        >
            { button.label() }
        </button>
    }
}
