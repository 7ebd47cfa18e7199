use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("Vehicle {vehicle_id} is currently unavailable")]
    VehicleUnavailable { vehicle_id: String },

    #[error("Vehicle {vehicle_id} not found")]
    VehicleNotFound { vehicle_id: String },

    #[error("Vehicle {vehicle_id} is not currently rented")]
    RentalNotFound { vehicle_id: String },

    #[error("Returning customer does not match the renter of vehicle {vehicle_id}")]
    IdentityMismatch { vehicle_id: String },

    #[error("Invalid menu selection: {input}")]
    InvalidSelection { input: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RentalError {
    /// Message shown to the person at the desk.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RentalError::VehicleUnavailable { .. } => {
                "Sorry, the vehicle is currently unavailable.".to_string()
            }
            RentalError::VehicleNotFound { vehicle_id } => {
                format!("No vehicle with ID '{}' exists.", vehicle_id)
            }
            RentalError::RentalNotFound { .. } => "This vehicle was not rented out.".to_string(),
            RentalError::IdentityMismatch { .. } => {
                "Return rejected: name or phone number does not match the rental record."
                    .to_string()
            }
            RentalError::InvalidSelection { .. } => {
                "Invalid option. Please try again.".to_string()
            }
            RentalError::ValidationError { field, reason, .. } => {
                format!("Invalid {}: {}.", field, reason)
            }
            RentalError::ConfigError { message } => format!("Configuration problem: {}", message),
            RentalError::IoError(e) => format!("Console I/O failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RentalError::VehicleUnavailable { .. } => {
                "Pick one of the vehicles listed as available."
            }
            RentalError::VehicleNotFound { .. } => "Check the vehicle ID and try again.",
            RentalError::RentalNotFound { .. } => {
                "Only vehicles that are currently rented can be returned."
            }
            RentalError::IdentityMismatch { .. } => {
                "Enter the name and phone number used when the vehicle was rented."
            }
            RentalError::InvalidSelection { .. } => "Choose an option between 1 and 5.",
            RentalError::ValidationError { .. } => "Correct the value and retry the operation.",
            RentalError::ConfigError { .. } => {
                "Fix the fleet configuration file or run without --config."
            }
            RentalError::IoError(_) => "Check that the terminal is still attached.",
        }
    }

    /// Domain failures end the current operation only; I/O and
    /// configuration failures end the program.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            RentalError::IoError(_) | RentalError::ConfigError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;
