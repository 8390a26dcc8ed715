use std::fmt;

use dioxus::logger::tracing::{info, warn};

use crate::shared::types::Order;
use crate::store::source::OrderSource;

#[derive(Debug, Clone, PartialEq)]
pub enum OrderError {
    Unauthenticated,
    Remote(String),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::Unauthenticated => write!(f, "no active session"),
            OrderError::Remote(msg) => write!(f, "could not load orders: {msg}"),
        }
    }
}

/// Lifecycle of one retrieval request.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    Pending,
    Fulfilled(Vec<Order>),
    Rejected(OrderError),
    /// Forget everything, e.g. when the session ends.
    Reset,
}

/// Client-side order state. Only [`OrderSlice::apply`] mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSlice {
    pub is_loading: bool,
    pub is_fetching: bool,
    pub is_loaded: bool,
    pub error: Option<OrderError>,
    pub data: Option<Vec<Order>>,
}

/// What the orders page should render for a given slice.
#[derive(Debug, Clone, PartialEq)]
pub enum OrdersView<'a> {
    Idle,
    Loading,
    Empty,
    Populated(&'a [Order]),
    Failed(&'a OrderError),
}

impl OrderSlice {
    pub fn apply(&mut self, action: OrderAction) {
        match action {
            OrderAction::Pending => {
                self.is_loading = true;
                self.is_fetching = true;
                self.error = None;
            }
            OrderAction::Fulfilled(orders) => {
                self.is_loading = false;
                self.is_fetching = false;
                self.is_loaded = true;
                self.data = Some(orders);
            }
            OrderAction::Rejected(err) => {
                self.is_loading = false;
                self.is_fetching = false;
                self.is_loaded = false;
                self.error = Some(err);
            }
            OrderAction::Reset => *self = Self::default(),
        }
    }

    // "No orders" wins over an in-flight refetch, then loading, then failure.
    pub fn view(&self) -> OrdersView<'_> {
        let data = self.data.as_deref();
        if self.is_loaded && data.is_some_and(|d| d.is_empty()) {
            return OrdersView::Empty;
        }
        if self.is_fetching {
            return OrdersView::Loading;
        }
        if let Some(err) = &self.error {
            return OrdersView::Failed(err);
        }
        match data {
            Some(orders) if self.is_loaded => OrdersView::Populated(orders),
            _ => OrdersView::Idle,
        }
    }
}

/// Runs one retrieval against `source`, reporting each lifecycle step to `dispatch`.
pub async fn retrieve_orders<S, D>(source: &S, customer: String, mut dispatch: D)
where
    S: OrderSource,
    D: FnMut(OrderAction),
{
    dispatch(OrderAction::Pending);
    match source.retrieve(&customer).await {
        Ok(orders) => {
            info!(
                "[orders] retrieved {} order(s) for {}",
                orders.len(),
                customer
            );
            dispatch(OrderAction::Fulfilled(orders));
        }
        Err(e) => {
            warn!("[orders] retrieval failed for {}: {}", customer, e);
            dispatch(OrderAction::Rejected(e));
        }
    }
}
