use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn InfoText(subtitle: String, info: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-start",
            p { class: "text-xs font-medium text-gray-500 text-start", "{subtitle}" }
            p { class: "text-sm font-semibold text-black", "{info}" }
        }
    }
}
