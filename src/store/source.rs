use std::future::Future;

use crate::shared::types::Order;
use crate::store::order::OrderError;

/// Where the orders page gets its data from.
pub trait OrderSource {
    fn retrieve(&self, customer: &str) -> impl Future<Output = Result<Vec<Order>, OrderError>>;
}

/// Production source: the `RetrieveOrders` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerOrderSource;

impl OrderSource for ServerOrderSource {
    async fn retrieve(&self, customer: &str) -> Result<Vec<Order>, OrderError> {
        if customer.is_empty() {
            return Err(OrderError::Unauthenticated);
        }
        crate::api::retrieve_orders(customer.to_string())
            .await
            .map_err(|e| OrderError::Remote(e.to_string()))
    }
}
