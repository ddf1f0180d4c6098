//! Command implementations.

pub mod resolve;
pub mod route;
pub mod screen;

pub use self::resolve::execute_resolve;
pub use self::route::execute_route;
pub use self::screen::{execute_screen, screen_bid};
