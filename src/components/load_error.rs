use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn LoadError(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "mt-8 w-full rounded-md border border-red-100 bg-red-50 p-8 space-y-3",
            p { class: "text-base font-medium text-red-700", "Failed to load orders." }
            p { class: "text-sm text-red-500", "{message}" }
            button {
                class: "rounded-md bg-white px-4 py-2 text-sm font-semibold text-gray-700 shadow-sm hover:text-amber-500",
                onclick: move |_| on_retry.call(()),
                "Try again"
            }
        }
    }
}
