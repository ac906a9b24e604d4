use super::panel::ButtonState;
use crate::components::{Icon, PlayerIcon};
use dioxus::prelude::*;

/// One transport button. `active` adds the highlight used by shuffle and repeat.
#[component]
pub(super) fn TransportButton(
    icon: PlayerIcon,
    state: ButtonState,
    #[props(default)] class: String,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let mut classes = class;
    if state.active {
        classes.push_str(" active");
    }

    rsx! {
        button {
            r#type: "button",
            class: "{classes}",
            disabled: !state.enabled,
            aria_pressed: state.active,
            onclick: move |evt| onclick.call(evt),
            Icon { icon }
        }
    }
}
