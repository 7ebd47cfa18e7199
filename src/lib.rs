pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::app::menu::{MenuChoice, MenuSession};
pub use crate::config::toml_config::FleetConfig;
pub use crate::core::service::RentalService;
pub use crate::domain::model::{
    Claimant, Customer, Rental, RentalView, ReturnPolicy, Vehicle, VehicleStatus,
};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::{RentalError, Result};
