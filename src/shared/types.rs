use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub pid: String,
    pub img: String, // thumbnail URL
    pub title: String,
    pub price: i64, // unit price, whole naira
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub pid: String,
    pub date: String, // RFC 3339
    #[serde(rename = "totalPrice")]
    pub total_price: i64,
    pub items: Vec<OrderLineItem>,
}
