use once_cell::sync::Lazy;
use regex::Regex;

use crate::store::order::{retrieve_orders, OrderAction, OrderSlice};
use crate::store::source::OrderSource;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s.trim())
}

/// Session state. `is_empty` is true until someone signs in.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSlice {
    pub is_empty: bool,
    pub customer: Option<String>,
}

impl Default for AuthSlice {
    fn default() -> Self {
        Self {
            is_empty: true,
            customer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MountAction {
    RedirectToSignup,
    Retrieve(String),
}

impl AuthSlice {
    pub fn sign_in(&mut self, customer: &str) {
        self.customer = Some(customer.trim().to_lowercase());
        self.is_empty = false;
    }

    pub fn sign_out(&mut self) {
        *self = Self::default();
    }

    /// Decides what the orders page does when it first mounts.
    pub fn on_mount(&self) -> MountAction {
        match (&self.customer, self.is_empty) {
            (Some(customer), false) => MountAction::Retrieve(customer.clone()),
            _ => MountAction::RedirectToSignup,
        }
    }
}

/// Signs `customer` in with an empty order slice.
pub fn start_session(auth: &mut AuthSlice, orders: &mut OrderSlice, customer: &str) {
    auth.sign_in(customer);
    orders.apply(OrderAction::Reset);
}

/// Signs out and drops the orders loaded for the old session.
pub fn end_session(auth: &mut AuthSlice, orders: &mut OrderSlice) {
    auth.sign_out();
    orders.apply(OrderAction::Reset);
}

/// Mount-time work of the orders page: retrieve once, or hand back a redirect.
pub async fn mount_orders<S, D>(auth: &AuthSlice, source: &S, dispatch: D) -> MountAction
where
    S: OrderSource,
    D: FnMut(OrderAction),
{
    let action = auth.on_mount();
    if let MountAction::Retrieve(customer) = &action {
        retrieve_orders(source, customer.clone(), dispatch).await;
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::Order;
    use crate::store::order::OrdersView;
    use crate::store::source::tests::FakeSource;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("  ada@example.com "));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn sign_in_normalises_customer() {
        let mut auth = AuthSlice::default();
        auth.sign_in(" Ada@Example.com ");
        assert!(!auth.is_empty);
        assert_eq!(auth.customer.as_deref(), Some("ada@example.com"));
        auth.sign_out();
        assert_eq!(auth, AuthSlice::default());
    }

    #[test]
    fn next_customer_never_sees_previous_orders() {
        let mut auth = AuthSlice::default();
        auth.sign_in("ada@example.com");
        let ada_order = Order {
            pid: "ADA-1".into(),
            date: "2024-01-01T10:00:00Z".into(),
            total_price: 100,
            items: vec![],
        };
        let source = FakeSource::ok(vec![ada_order]);
        let slice = Rc::new(RefCell::new(OrderSlice::default()));
        let sink = slice.clone();
        block_on(mount_orders(&auth, &source, move |a| {
            sink.borrow_mut().apply(a)
        }));
        assert!(matches!(slice.borrow().view(), OrdersView::Populated(_)));

        end_session(&mut auth, &mut slice.borrow_mut());
        assert_eq!(auth.on_mount(), MountAction::RedirectToSignup);
        assert_eq!(slice.borrow().view(), OrdersView::Idle);

        start_session(&mut auth, &mut slice.borrow_mut(), "bob@example.com");
        assert_eq!(auth.on_mount(), MountAction::Retrieve("bob@example.com".into()));
        assert!(!matches!(slice.borrow().view(), OrdersView::Populated(_)));
    }

    #[test]
    fn unauthenticated_mount_redirects_without_retrieving() {
        let source = FakeSource::ok(vec![]);
        let dispatched = Rc::new(RefCell::new(0usize));
        let sink = dispatched.clone();
        let action = block_on(mount_orders(&AuthSlice::default(), &source, move |_| {
            *sink.borrow_mut() += 1
        }));
        assert_eq!(action, MountAction::RedirectToSignup);
        assert!(source.calls().is_empty());
        assert_eq!(*dispatched.borrow(), 0);
    }

    #[test]
    fn authenticated_mount_retrieves_once() {
        let mut auth = AuthSlice::default();
        auth.sign_in("ada@example.com");
        let source = FakeSource::ok(vec![]);
        let slice = Rc::new(RefCell::new(OrderSlice::default()));
        let sink = slice.clone();
        let action = block_on(mount_orders(&auth, &source, move |a| {
            sink.borrow_mut().apply(a)
        }));
        assert_eq!(action, MountAction::Retrieve("ada@example.com".into()));
        assert_eq!(source.calls().len(), 1);
        assert!(slice.borrow().is_loaded);
    }
}
