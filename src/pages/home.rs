use dioxus::prelude::*;

use crate::app::Route;

#[allow(non_snake_case)]
#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "mx-auto flex min-h-[50vh] max-w-6xl flex-col items-start justify-center gap-4 px-12 py-16",
            h1 { class: "text-4xl font-bold tracking-tight text-black", "Discover our best offers" }
            p { class: "max-w-xl text-gray-500",
                "Explore our categories and keep track of everything you have bought."
            }
            Link { class: "rounded-md bg-black px-4 py-2 font-semibold text-white", to: Route::Orders {}, "View my orders" }
        }
    }
}
