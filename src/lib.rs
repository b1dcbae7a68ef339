pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use core::render;
pub use core::{client::SpotterClient, engine::SpotterEngine};
pub use core::{Coordinates, Pass};
pub use utils::error::{Result, SpotterError, Stage};
