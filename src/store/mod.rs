pub mod auth;
pub mod order;
pub mod source;

use dioxus::prelude::*;

pub use auth::{
    end_session, is_valid_email, mount_orders, start_session, AuthSlice, MountAction,
};
pub use order::{OrderSlice, OrdersView};
pub use source::ServerOrderSource;

/// Installs the store slices at the root of the component tree.
pub fn use_store_provider() {
    use_context_provider(|| Signal::new(AuthSlice::default()));
    use_context_provider(|| Signal::new(OrderSlice::default()));
}

pub fn use_auth() -> Signal<AuthSlice> {
    use_context::<Signal<AuthSlice>>()
}

pub fn use_orders() -> Signal<OrderSlice> {
    use_context::<Signal<OrderSlice>>()
}
