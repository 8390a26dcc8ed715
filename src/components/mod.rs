pub mod empty_orders;
pub mod info_text;
pub mod layout;
pub mod load_error;
pub mod loading_skeleton;
pub mod order_item;
pub mod order_layout;

pub use empty_orders::EmptyOrders;
pub use info_text::InfoText;
pub use layout::Layout;
pub use load_error::LoadError;
pub use loading_skeleton::LoadingSkeleton;
pub use order_item::OrderItem;
pub use order_layout::OrderLayout;
