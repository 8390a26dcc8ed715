pub mod home;
pub mod orders;
pub mod session;

pub use home::Home;
pub use orders::Orders;
pub use session::{Login, Signup};
