use dioxus::prelude::*;

use crate::shared::types::Order;

#[server(RetrieveOrders)]
pub async fn retrieve_orders(customer: String) -> Result<Vec<Order>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::GLOBAL_DB;

        let Some(db) = GLOBAL_DB.get() else {
            eprintln!("retrieve_orders: DB not initialized");
            return Err(ServerFnError::new("order store unavailable"));
        };
        match db.orders_for_customer(&customer).await {
            Ok(orders) => Ok(orders),
            Err(e) => {
                eprintln!("retrieve_orders query error for {customer}: {e}");
                Err(ServerFnError::new("failed to read orders"))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = customer;
        Ok(vec![])
    }
}
