pub mod cart;
pub mod menu;
pub mod session;

pub use cart::*;
pub use menu::*;
pub use session::*;
