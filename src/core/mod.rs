pub mod service;

pub use crate::domain::model::{
    Claimant, Customer, Rental, RentalView, ReturnPolicy, Vehicle, VehicleStatus,
};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
