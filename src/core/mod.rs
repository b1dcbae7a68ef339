pub mod client;
pub mod engine;
pub mod model;
pub mod ports;
pub mod render;

pub use crate::core::model::{Coordinates, Pass};
pub use crate::core::ports::{ConfigProvider, SpotterApi};
pub use crate::utils::error::Result;
