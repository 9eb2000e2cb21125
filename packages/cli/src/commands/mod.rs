pub mod list;
pub mod replay;

pub use list::{list, ListArgs};
pub use replay::{replay, ReplayArgs};
