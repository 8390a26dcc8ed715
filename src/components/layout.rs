use dioxus::prelude::*;

use crate::app::Route;
use crate::store::{end_session, use_auth, use_orders};

/// Router layout: every routed page renders inside this.
#[allow(non_snake_case)]
#[component]
pub fn Layout() -> Element {
    let route = use_route::<Route>();
    rsx! {
        Chrome {
            route: route,
            navigation: rsx! { Navbar {} },
            site_footer: rsx! { Footer {} },
            Outlet::<Route> {}
        }
    }
}

/// Wraps `children` in a sticky header holding `navigation` and a footer
/// holding `site_footer`, unless `route` opts out.
#[allow(non_snake_case)]
#[component]
pub fn Chrome(route: Route, navigation: Element, site_footer: Element, children: Element) -> Element {
    let chrome = route.shows_chrome();
    rsx! {
        if chrome {
            header { class: "sticky top-0 z-10 bg-white border-b border-gray-100",
                {navigation}
            }
        }
        main { class: "z-0", {children} }
        if chrome {
            footer { class: "border-t border-gray-100 bg-gray-50",
                {site_footer}
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Navbar() -> Element {
    let mut auth = use_auth();
    let mut orders = use_orders();
    let nav = use_navigator();
    let customer = auth.read().customer.clone();

    rsx! {
        nav { class: "mx-auto flex max-w-6xl items-center justify-between px-12 py-4",
            Link { class: "text-xl font-bold tracking-tight text-black", to: Route::Home {}, "Storefront" }
            div { class: "flex items-center gap-6 text-sm font-semibold text-gray-600",
                Link { class: "hover:text-amber-500", to: Route::Home {}, "Home" }
                Link { class: "hover:text-amber-500", to: Route::Orders {}, "Orders" }
                {
                    match customer {
                        Some(email) => rsx! {
                            span { class: "text-xs font-medium text-gray-400", "{email}" }
                            button {
                                class: "rounded-md px-3 py-1 text-gray-500 hover:text-amber-500",
                                onclick: move |_| {
                                    end_session(&mut auth.write(), &mut orders.write());
                                    nav.push(Route::Home {});
                                },
                                "Sign out"
                            }
                        },
                        None => rsx! {
                            Link { class: "rounded-md bg-black px-3 py-1 text-white", to: Route::Login {}, "Sign in" }
                        },
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Footer() -> Element {
    rsx! {
        div { class: "mx-auto flex max-w-6xl flex-col gap-2 px-12 py-8 text-sm text-gray-500 sm:flex-row sm:justify-between",
            p { "Storefront. Shop the best offers across our categories." }
            div { class: "flex gap-4",
                Link { class: "hover:text-amber-500", to: Route::Home {}, "Home" }
                Link { class: "hover:text-amber-500", to: Route::Orders {}, "My orders" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(non_snake_case)]
    #[component]
    fn Page(route: Route) -> Element {
        rsx! {
            Chrome {
                route: route,
                navigation: rsx! { span { "site-nav" } },
                site_footer: rsx! { span { "site-footer" } },
                p { "page body" }
            }
        }
    }

    fn render(route: Route) -> String {
        let mut dom = VirtualDom::new_with_props(Page, PageProps { route });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn chrome_wraps_regular_pages() {
        for route in [Route::Home {}, Route::Orders {}] {
            let html = render(route);
            assert!(html.contains("<header"), "{html}");
            assert!(html.contains("site-nav"));
            assert!(html.contains("<footer"));
            assert!(html.contains("site-footer"));
            assert!(html.contains("page body"));
        }
    }

    #[test]
    fn session_pages_render_content_only() {
        for route in [Route::Login {}, Route::Signup {}] {
            let html = render(route);
            assert!(!html.contains("<header"), "{html}");
            assert!(!html.contains("<footer"));
            assert!(!html.contains("site-nav"));
            assert!(html.contains("page body"));
        }
    }
}
