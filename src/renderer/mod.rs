//! Typed view of the upstream response tree.
//!
//! Every field is optional and list entries are decoded one by one, so a
//! node in an unknown shape only loses itself.

pub mod common;
pub mod headers;
pub mod items;
pub mod lenient;
pub mod responses;
pub mod sections;

pub use common::*;
pub use headers::*;
pub use items::*;
pub use responses::*;
pub use sections::*;
