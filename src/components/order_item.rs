use dioxus::prelude::*;

use crate::shared::types::OrderLineItem;
use crate::utils::format::format_currency;

#[allow(non_snake_case)]
#[component]
pub fn OrderItem(item: OrderLineItem) -> Element {
    rsx! {
        div { class: "flex w-full flex-col items-start justify-start p-8",
            div { class: "flex w-full justify-between",
                div { class: "me-4 flex items-center overflow-hidden rounded-lg",
                    img { src: "{item.img}", alt: "", width: "50", height: "50" }
                    div { class: "ms-4 flex flex-col items-start gap-2",
                        // clamp to two lines
                        p { class: "max-w-xs overflow-hidden text-ellipsis line-clamp-2 text-start text-sm font-normal text-gray-800",
                            "{item.title}"
                        }
                        p { class: "text-start text-sm font-medium text-black", "{format_currency(item.price)}" }
                    }
                }
                p { class: "text-end text-xl font-normal", "x{item.quantity}" }
            }
            div { class: "flex",
                // TODO: link to the product page once the catalog routes exist
                button { class: "p-0 font-semibold normal-case text-gray-500 hover:text-amber-500",
                    "View Product"
                }
            }
        }
    }
}
