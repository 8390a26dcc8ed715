use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn LoadingSkeleton() -> Element {
    rsx! {
        div { class: "mt-8 flex w-full animate-pulse",
            div { class: "flex w-full flex-row items-center gap-2",
                div { class: "h-[250px] w-[250px] shrink-0 rounded bg-gray-50" }
                div { class: "flex flex-col gap-6",
                    for i in 0..4 {
                        div { key: "{i}", class: "h-10 w-[1000px] max-w-full rounded bg-gray-200" }
                    }
                }
            }
        }
    }
}
