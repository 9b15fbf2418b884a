use dioxus::prelude::*;

use crate::state::Quantity;

#[component]
pub fn QuantityControl(
    quantity: Quantity,
    on_decrement: EventHandler<MouseEvent>,
    on_increment: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div { class: "quantity-container",
            button {
                class: "quantity-controller-button",
                r#type: "button",
                "data-testid": "minus",
                aria_label: "Decrease Quantity",
                onclick: move |evt| on_decrement.call(evt),
                "−"
            }
            p { class: "quantity", "{quantity}" }
            button {
                class: "quantity-controller-button",
                r#type: "button",
                "data-testid": "plus",
                aria_label: "Increase Quantity",
                onclick: move |evt| on_increment.call(evt),
                "+"
            }
        }
    }
}
