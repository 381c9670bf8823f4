//! YouTube Music client over the InnerTube API.
//!
//! [`music::YouTubeMusic`] is the entry point. The modules below it can be
//! used on their own: [`renderer`] and [`resolver`] turn raw responses into
//! [`models`], [`pagination`] walks continuation chains and [`aggregation`]
//! merges the results of many calls.

pub mod aggregation;
pub mod common;
pub mod configs;
pub mod filters;
pub mod innertube;
pub mod models;
pub mod music;
pub mod pages;
pub mod pagination;
pub mod renderer;
pub mod resolver;

pub use common::{Error, Result, TransportError};
pub use configs::Config;
pub use music::YouTubeMusic;
