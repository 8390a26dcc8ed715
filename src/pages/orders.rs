use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{EmptyOrders, LoadError, LoadingSkeleton, OrderLayout};
use crate::store::{mount_orders, use_auth, use_orders, MountAction, OrdersView, ServerOrderSource};

#[allow(non_snake_case)]
#[component]
pub fn Orders() -> Element {
    let auth = use_auth();
    let orders = use_orders();
    let nav = use_navigator();

    // The task belongs to this scope and is dropped with it on unmount.
    let load = move || {
        let auth = auth.peek().clone();
        let mut orders = orders;
        spawn(async move {
            let action =
                mount_orders(&auth, &ServerOrderSource, move |a| orders.write().apply(a)).await;
            if action == MountAction::RedirectToSignup {
                info!("[orders] no session, redirecting to signup");
                nav.replace(Route::Signup {});
            }
        });
    };

    // runs once per mount
    use_hook(load);

    let slice = orders.read();
    let view = slice.view();
    if view == OrdersView::Empty {
        return rsx! { EmptyOrders {} };
    }

    rsx! {
        section { class: "flex w-full flex-col items-start justify-center px-12 py-8",
            h1 { class: "text-2xl font-bold text-black", "Order Details" }
            p { class: "text-sm font-semibold text-gray-500",
                "Check the status of recent and old orders & discover more products"
            }
            div { class: "w-full",
                {
                    match view {
                        OrdersView::Populated(list) => rsx! {
                            for order in list {
                                OrderLayout { key: "{order.pid}", order: order.clone() }
                            }
                        },
                        OrdersView::Failed(err) => rsx! {
                            LoadError { message: err.to_string(), on_retry: move |_| load() }
                        },
                        OrdersView::Loading | OrdersView::Idle | OrdersView::Empty => rsx! {
                            LoadingSkeleton {}
                        },
                    }
                }
            }
        }
    }
}
