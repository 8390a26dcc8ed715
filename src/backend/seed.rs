#![cfg(feature = "server")]
use crate::backend::db::Db;
use crate::shared::types::{Order, OrderLineItem};
use std::sync::Arc;

pub const DEFAULT_SEED_CUSTOMER: &str = "demo@example.com";

// (sku, title, unit price in naira)
const CATALOGUE: &[(&str, &str, i64)] = &[
    ("SKU-1001", "Wireless Bluetooth Headphones with Active Noise Cancellation", 45_000),
    ("SKU-1002", "Stainless Steel Electric Kettle 1.7L", 18_500),
    ("SKU-1003", "Men's Classic Leather Loafers", 32_000),
    ("SKU-1004", "Non-stick Frying Pan Set (3 pieces)", 21_750),
    ("SKU-1005", "Smart Fitness Watch with Heart Rate Monitor", 67_900),
    ("SKU-1006", "Ankara Print Maxi Dress", 15_000),
    ("SKU-1007", "Rechargeable Standing Fan 16 inch", 54_300),
    ("SKU-1008", "Organic Shea Butter 500g", 4_200),
    ("SKU-1009", "USB-C Fast Charger 65W", 12_800),
    ("SKU-1010", "Children's Illustrated Storybook Collection", 9_950),
];

/// Stable per-customer seed (FNV-1a), so each customer gets distinct order ids.
pub fn customer_seed(customer: &str) -> u64 {
    customer.bytes().fold(0xcbf2_9ce4_8422_2325u64, |h, b| {
        (h ^ b as u64).wrapping_mul(0x0100_0000_01b3)
    })
}

/// Builds `count` orders spread over the last 120 days, oldest first.
pub fn sample_orders(seed: u64, count: usize) -> Vec<Order> {
    use chrono::{Duration, Utc};
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    let now = Utc::now();
    let mut offsets: Vec<i64> = (0..count).map(|_| rng.gen_range(0..=120 * 24 * 60)).collect();
    offsets.sort_unstable_by(|a, b| b.cmp(a));

    offsets
        .into_iter()
        .enumerate()
        .map(|(n, minutes_ago)| {
            let k = rng.gen_range(1..=4);
            let items: Vec<OrderLineItem> = CATALOGUE
                .choose_multiple(&mut rng, k)
                .map(|(sku, title, price)| OrderLineItem {
                    pid: sku.to_string(),
                    img: format!("https://picsum.photos/seed/{sku}/100/100"),
                    title: title.to_string(),
                    price: *price,
                    quantity: rng.gen_range(1..=3),
                })
                .collect();
            let total_price = items.iter().map(|i| i.price * i.quantity as i64).sum();
            Order {
                pid: format!("{:012X}-{:02}", seed & 0xFFFF_FFFF_FFFF, n + 1),
                date: (now - Duration::minutes(minutes_ago)).to_rfc3339(),
                total_price,
                items,
            }
        })
        .collect()
}

pub async fn generate_test_data(db: Arc<Db>, customer: &str) -> anyhow::Result<()> {
    use dotenvy::dotenv;
    dotenv().ok();
    let mut inserted = 0usize;
    let orders = sample_orders(customer_seed(customer), 6);
    for order in orders.iter() {
        if db.insert_order(customer, order).await? {
            inserted += 1;
        }
    }
    eprintln!(
        "Inserted {} of {} sample orders for {}",
        inserted,
        orders.len(),
        customer
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_orders_are_consistent() {
        let orders = sample_orders(7, 5);
        assert_eq!(orders.len(), 5);
        for o in &orders {
            assert!((1..=4).contains(&o.items.len()));
            let sum: i64 = o.items.iter().map(|i| i.price * i.quantity as i64).sum();
            assert_eq!(o.total_price, sum);
        }
        // oldest first
        assert!(orders.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn seeding_is_deterministic_per_seed() {
        let a = sample_orders(42, 3);
        let b = sample_orders(42, 3);
        let pids_a: Vec<_> = a.iter().map(|o| &o.pid).collect();
        let pids_b: Vec<_> = b.iter().map(|o| &o.pid).collect();
        assert_eq!(pids_a, pids_b);
        assert_eq!(a[0].items, b[0].items);
    }

    #[test]
    fn customers_get_distinct_order_ids() {
        let ada = sample_orders(customer_seed("ada@example.com"), 6);
        let bob = sample_orders(customer_seed("bob@example.com"), 6);
        assert!(ada.iter().all(|a| bob.iter().all(|b| a.pid != b.pid)));
    }

    #[tokio::test]
    async fn seeds_every_customer() {
        let db = Arc::new(Db::connect("sqlite::memory:").await.unwrap());
        generate_test_data(db.clone(), "ada@example.com").await.unwrap();
        generate_test_data(db.clone(), "bob@example.com").await.unwrap();
        for customer in ["ada@example.com", "bob@example.com"] {
            let got = db.orders_for_customer(customer).await.unwrap();
            assert_eq!(got.len(), 6, "{customer}");
        }
    }

    #[tokio::test]
    async fn seeding_twice_inserts_once() {
        let db = Arc::new(Db::connect("sqlite::memory:").await.unwrap());
        generate_test_data(db.clone(), DEFAULT_SEED_CUSTOMER).await.unwrap();
        generate_test_data(db.clone(), DEFAULT_SEED_CUSTOMER).await.unwrap();
        let got = db.orders_for_customer(DEFAULT_SEED_CUSTOMER).await.unwrap();
        assert_eq!(got.len(), 6);
    }
}
