use dioxus::prelude::*;

use crate::app::Route;
use crate::EMPTY_ORDER_IMG;

#[allow(non_snake_case)]
#[component]
pub fn EmptyOrders() -> Element {
    let nav = use_navigator();
    rsx! {
        div { class: "flex h-[60vh] w-full flex-col items-center justify-center gap-2",
            div { class: "grid h-[140px] w-[140px] place-items-center rounded-full bg-gray-200",
                img { src: EMPTY_ORDER_IMG, alt: "Empty order", width: "100" }
            }
            p { class: "text-base font-medium text-black", "You have made no orders yet!" }
            p { class: "text-sm font-normal text-black", "Discover our best offers by exploring our categories" }
            button {
                class: "mt-10 rounded-md bg-gray-100 px-4 py-2 font-semibold text-black hover:bg-gray-200",
                onclick: move |_| {
                    nav.push(Route::Home {});
                },
                "Continue shopping"
            }
        }
    }
}
