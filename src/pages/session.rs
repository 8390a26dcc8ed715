use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::app::Route;
use crate::store::{is_valid_email, start_session, use_auth, use_orders};

#[allow(non_snake_case)]
#[component]
pub fn Login() -> Element {
    rsx! {
        SessionForm {
            title: "Welcome back".to_string(),
            submit_label: "Sign in".to_string(),
            alternate: Route::Signup {},
            alternate_label: "New here? Create an account".to_string(),
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Signup() -> Element {
    rsx! {
        SessionForm {
            title: "Create your account".to_string(),
            submit_label: "Sign up".to_string(),
            alternate: Route::Login {},
            alternate_label: "Already have an account? Sign in".to_string(),
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn SessionForm(
    title: String,
    submit_label: String,
    alternate: Route,
    alternate_label: String,
) -> Element {
    let mut auth = use_auth();
    let mut orders = use_orders();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let value = email.read().trim().to_string();
        if !is_valid_email(&value) {
            error.set(Some("Enter a valid e-mail address".into()));
            return;
        }
        error.set(None);
        start_session(&mut auth.write(), &mut orders.write(), &value);
        info!("[session] signed in as {}", value);
        nav.push(Route::Orders {});
    };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-gray-50 px-6",
            form { class: "w-full max-w-sm space-y-5 rounded-md border bg-white p-8 shadow-sm",
                onsubmit: submit,
                h1 { class: "text-2xl font-bold text-black", "{title}" }
                div { class: "space-y-1",
                    label { class: "text-xs font-medium text-gray-500", r#for: "email", "E-mail" }
                    input {
                        id: "email",
                        r#type: "email",
                        class: "w-full rounded-md border px-3 py-2 text-sm",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    if let Some(msg) = error() {
                        p { class: "text-xs text-red-500", "{msg}" }
                    }
                }
                button { class: "w-full rounded-md bg-black px-4 py-2 font-semibold text-white", r#type: "submit",
                    "{submit_label}"
                }
                div { class: "flex justify-between text-xs text-gray-500",
                    Link { class: "hover:text-amber-500", to: alternate, "{alternate_label}" }
                    Link { class: "hover:text-amber-500", to: Route::Home {}, "Back to store" }
                }
            }
        }
    }
}
