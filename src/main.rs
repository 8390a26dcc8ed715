use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod pages;
mod shared;
mod store;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
pub const EMPTY_ORDER_IMG: Asset = asset!("/assets/package.svg");

#[cfg(feature = "server")]
use std::sync::Arc;

fn main() {
    // keeps the runtime that owns the DB pool alive for the whole process
    #[cfg(feature = "server")]
    let Some(_db_rt) = boot_server() else {
        return;
    };
    dioxus::launch(app::App);
}

/// Connects the global DB and runs CLI subcommands. Returns `None` when a
/// subcommand ran and the process should exit instead of serving.
#[cfg(feature = "server")]
fn boot_server() -> Option<tokio::runtime::Runtime> {
    backend::init_tracing();
    dotenvy::dotenv().ok();

    // Initialize the global DB once at boot
    let db_url = backend::db::resolve_db_url();
    let rt = tokio::runtime::Runtime::new().expect("rt");
    rt.block_on(async {
        match backend::Db::connect(&db_url).await {
            Ok(db) => {
                let _ = backend::GLOBAL_DB.set(Arc::new(db));
                eprintln!("[db] initialized at {db_url}");
            }
            Err(e) => {
                eprintln!("[db] failed to init: {e}");
            }
        }
    });

    let mut args = std::env::args();
    let _bin = args.next();
    if let Some(cmd) = args.next() {
        if cmd == "gen-test-data" {
            // optional: customer e-mail that owns the sample orders
            let customer = args
                .next()
                .unwrap_or_else(|| backend::seed::DEFAULT_SEED_CUSTOMER.to_string());
            rt.block_on(async move {
                let Some(db) = backend::GLOBAL_DB.get() else {
                    eprintln!("[gen-test-data] GLOBAL_DB not initialized");
                    std::process::exit(1);
                };
                if let Err(e) = backend::seed::generate_test_data(db.clone(), &customer).await {
                    eprintln!("[gen-test-data] error generating test data: {e}");
                    std::process::exit(1);
                }
            });
            return None;
        }
    }
    Some(rt)
}
