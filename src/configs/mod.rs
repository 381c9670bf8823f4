pub mod base;
pub mod filters;
pub mod innertube;
pub mod logging;

pub use base::*;
pub use filters::*;
pub use innertube::*;
pub use logging::*;
