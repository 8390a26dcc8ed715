use dioxus::prelude::*;

use crate::components::Layout;
use crate::pages::{Home, Login, Orders, Signup};
use crate::store::use_store_provider;
use crate::{FAVICON, TAILWIND_CSS};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/orders")]
        Orders {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
}

impl Route {
    /// Whether the page is wrapped in navigation and footer.
    pub fn shows_chrome(&self) -> bool {
        match self {
            Route::Login {} | Route::Signup {} => false,
            Route::Home {} | Route::Orders {} => true,
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    use_store_provider();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#ffffff" }
        document::Meta { name: "color-scheme", content: "light" }
        div { class: "min-h-screen bg-white text-gray-900",
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn chrome_everywhere_but_session_pages() {
        assert!(Route::Home {}.shows_chrome());
        assert!(Route::Orders {}.shows_chrome());
        assert!(!Route::Login {}.shows_chrome());
        assert!(!Route::Signup {}.shows_chrome());
    }

    #[test]
    fn paths_resolve_to_routes() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
        assert_eq!(Route::from_str("/orders").ok(), Some(Route::Orders {}));
        assert_eq!(Route::from_str("/login").ok(), Some(Route::Login {}));
        assert_eq!(Route::from_str("/signup").ok(), Some(Route::Signup {}));
        assert_eq!(Route::Signup {}.to_string(), "/signup");
    }
}
