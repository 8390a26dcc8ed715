#![cfg(feature = "server")]
use anyhow::Result;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{sqlite::SqlitePoolOptions, Pool, Row, Sqlite};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::shared::types::{Order, OrderLineItem};

pub static GLOBAL_DB: OnceCell<Arc<Db>> = OnceCell::new();

pub fn resolve_db_url() -> String {
    use std::{env, fs, path::PathBuf};
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }
    // Place DB under project_root/data/orders.db
    let root = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(root);
    path.push("data");
    let _ = fs::create_dir_all(&path);
    path.push("orders.db");
    // SQLx expects absolute paths in the form sqlite:///abs/path
    let path_str = path.to_string_lossy();
    let trimmed = path_str
        .strip_prefix('/')
        .map(|s| s.to_string())
        .unwrap_or_else(|| path_str.to_string());
    format!("sqlite:///{}?mode=rwc", trimmed)
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: Pool<Sqlite>,
}

impl Db {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .foreign_keys(true);

        // every in-memory connection is its own database
        let max_connections = if database_url.contains(":memory:") { 1 } else { 3 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?;
        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                pid TEXT NOT NULL UNIQUE,
                customer TEXT NOT NULL,
                date_time TEXT NOT NULL,
                total_price INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS order_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                order_pid TEXT NOT NULL REFERENCES orders(pid) ON DELETE CASCADE,
                pid TEXT NOT NULL,
                img TEXT NOT NULL,
                title TEXT NOT NULL,
                price INTEGER NOT NULL,
                quantity INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS orders_customer ON orders(customer)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Stores an order with its items. Returns false if `order.pid` already exists.
    pub async fn insert_order(&self, customer: &str, order: &Order) -> Result<bool> {
        let date_time = DateTime::parse_from_rfc3339(&order.date)?.with_timezone(&Utc);
        let mut tx = self.pool.begin().await?;
        let rec = sqlx::query(
            r#"INSERT OR IGNORE INTO orders
            (pid, customer, date_time, total_price)
            VALUES (?1, ?2, ?3, ?4)"#,
        )
        .bind(&order.pid)
        .bind(customer)
        .bind(date_time.to_rfc3339())
        .bind(order.total_price)
        .execute(&mut *tx)
        .await?;
        if rec.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }
        for item in &order.items {
            sqlx::query(
                r#"INSERT INTO order_items
                (order_pid, pid, img, title, price, quantity)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
            )
            .bind(&order.pid)
            .bind(&item.pid)
            .bind(&item.img)
            .bind(&item.title)
            .bind(item.price)
            .bind(item.quantity as i64)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(true)
    }

    /// All orders of `customer`, newest first, items in the order they were stored.
    pub async fn orders_for_customer(&self, customer: &str) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"SELECT pid, date_time, total_price
            FROM orders
            WHERE customer = ?1
            ORDER BY date_time DESC, id DESC"#,
        )
        .bind(customer)
        .fetch_all(&self.pool)
        .await?;

        let item_rows = sqlx::query(
            r#"SELECT i.order_pid, i.pid, i.img, i.title, i.price, i.quantity
            FROM order_items i
            JOIN orders o ON o.pid = i.order_pid
            WHERE o.customer = ?1
            ORDER BY i.id ASC"#,
        )
        .bind(customer)
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<String, Vec<OrderLineItem>> = HashMap::new();
        for r in item_rows {
            let order_pid: String = r.try_get("order_pid")?;
            let quantity: i64 = r.try_get("quantity")?;
            items_by_order
                .entry(order_pid)
                .or_default()
                .push(OrderLineItem {
                    pid: r.try_get("pid")?,
                    img: r.try_get("img")?,
                    title: r.try_get("title")?,
                    price: r.try_get("price")?,
                    quantity: u32::try_from(quantity)?,
                });
        }

        let mut out = Vec::with_capacity(rows.len());
        for r in rows {
            let pid: String = r.try_get("pid")?;
            let date_time_str: String = r.try_get("date_time")?;
            let date_time =
                DateTime::parse_from_rfc3339(&date_time_str).map(|dt| dt.with_timezone(&Utc))?;
            let items = items_by_order.remove(&pid).unwrap_or_default();
            out.push(Order {
                pid,
                date: date_time.to_rfc3339(),
                total_price: r.try_get("total_price")?,
                items,
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(pid: &str, price: i64, quantity: u32) -> OrderLineItem {
        OrderLineItem {
            pid: pid.into(),
            img: format!("/img/{pid}.png"),
            title: format!("Product {pid}"),
            price,
            quantity,
        }
    }

    fn order(pid: &str, date: &str, items: Vec<OrderLineItem>) -> Order {
        let total_price = items.iter().map(|i| i.price * i.quantity as i64).sum();
        Order {
            pid: pid.into(),
            date: date.into(),
            total_price,
            items,
        }
    }

    #[tokio::test]
    async fn orders_round_trip_newest_first() {
        let db = Db::connect("sqlite::memory:").await.unwrap();
        let older = order(
            "ORD-1",
            "2024-01-01T10:00:00+00:00",
            vec![item("P1", 1000, 2), item("P2", 500, 1)],
        );
        let newer = order("ORD-2", "2024-02-01T10:00:00+00:00", vec![item("P3", 7500, 1)]);
        assert!(db.insert_order("ada@example.com", &older).await.unwrap());
        assert!(db.insert_order("ada@example.com", &newer).await.unwrap());

        let got = db.orders_for_customer("ada@example.com").await.unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].pid, "ORD-2");
        assert_eq!(got[1].pid, "ORD-1");
        assert_eq!(got[1].total_price, 2500);
        let item_pids: Vec<_> = got[1].items.iter().map(|i| i.pid.as_str()).collect();
        assert_eq!(item_pids, ["P1", "P2"]);
    }

    #[tokio::test]
    async fn duplicate_order_is_ignored() {
        let db = Db::connect("sqlite::memory:").await.unwrap();
        let o = order("ORD-1", "2024-01-01T10:00:00Z", vec![item("P1", 100, 1)]);
        assert!(db.insert_order("ada@example.com", &o).await.unwrap());
        assert!(!db.insert_order("ada@example.com", &o).await.unwrap());
        let got = db.orders_for_customer("ada@example.com").await.unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].items.len(), 1);
    }

    #[tokio::test]
    async fn customers_only_see_their_orders() {
        let db = Db::connect("sqlite::memory:").await.unwrap();
        let o = order("ORD-1", "2024-01-01T10:00:00Z", vec![item("P1", 100, 1)]);
        db.insert_order("ada@example.com", &o).await.unwrap();
        assert!(db
            .orders_for_customer("bob@example.com")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn rejects_bad_dates() {
        let db = Db::connect("sqlite::memory:").await.unwrap();
        let o = order("ORD-1", "last tuesday", vec![]);
        assert!(db.insert_order("ada@example.com", &o).await.is_err());
    }
}
