pub mod endpoint;
pub mod item;
pub mod page;
pub mod player;

pub use endpoint::*;
pub use item::*;
pub use page::*;
pub use player::*;
