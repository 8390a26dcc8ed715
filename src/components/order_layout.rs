use dioxus::prelude::*;

use crate::components::{InfoText, OrderItem};
use crate::shared::types::{Order, OrderLineItem};
use crate::utils::format::{format_currency, format_order_date};

/// Pairs each item with whether a divider follows it (all but the last).
pub fn divided(items: &[OrderLineItem]) -> impl Iterator<Item = (&OrderLineItem, bool)> + '_ {
    let last = items.len().saturating_sub(1);
    items.iter().enumerate().map(move |(i, item)| (item, i != last))
}

#[allow(non_snake_case)]
#[component]
pub fn OrderLayout(order: Order) -> Element {
    rsx! {
        div { class: "my-8 flex w-full flex-row rounded-md border shadow-sm",
            div { class: "flex flex-col gap-8 bg-gray-50 p-8",
                InfoText { subtitle: "Order ID".to_string(), info: format!("#{}", order.pid) }
                InfoText { subtitle: "Date".to_string(), info: format_order_date(&order.date) }
                InfoText { subtitle: "Total Amount".to_string(), info: format_currency(order.total_price) }
            }
            div { class: "flex w-full flex-col",
                for (item, trailing_divider) in divided(&order.items) {
                    Fragment { key: "{item.pid}",
                        OrderItem { item: item.clone() }
                        if trailing_divider {
                            hr { class: "h-px border-0 bg-gray-100" }
                        }
                    }
                }
            }
        }
    }
}
