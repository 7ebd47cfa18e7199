use crate::core::{ConfigProvider, ReturnPolicy, Vehicle};
use crate::utils::error::{RentalError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DESK_NAME: &str = "Car Rental Service";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    #[serde(default)]
    pub desk: DeskConfig,
    #[serde(default)]
    pub vehicles: Vec<VehicleConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskConfig {
    pub name: Option<String>,
    pub currency_symbol: Option<String>,
    pub return_policy: Option<ReturnPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub price_per_day: Decimal,
}

impl VehicleConfig {
    fn new(id: &str, brand: &str, model: &str, price_per_day: i64) -> Self {
        Self {
            id: id.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            price_per_day: Decimal::from(price_per_day),
        }
    }
}

impl FleetConfig {
    /// 從 TOML 檔案載入車隊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| RentalError::ConfigError {
            message: format!(
                "cannot read fleet file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RentalError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// The fleet the desk opens with when no file is given.
    pub fn builtin() -> Self {
        Self {
            desk: DeskConfig::default(),
            vehicles: vec![
                VehicleConfig::new("V001", "Toyota", "Corolla", 50),
                VehicleConfig::new("V002", "Honda", "Civic", 65),
                VehicleConfig::new("V003", "Kawasaki", "Ninja ZX-6R", 80),
                VehicleConfig::new("V004", "Yamaha", "MT-07", 70),
                VehicleConfig::new("V005", "Vespa", "Primavera", 40),
                VehicleConfig::new("V006", "Honda", "Activa", 35),
            ],
        }
    }

    /// 替換環境變數 (例如 ${DESK_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RentalError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.vehicles.is_empty() {
            return Err(RentalError::ConfigError {
                message: "the fleet must contain at least one vehicle".to_string(),
            });
        }

        for vehicle in &self.vehicles {
            validation::validate_non_empty_string("vehicles.id", &vehicle.id)?;
            validation::validate_non_empty_string("vehicles.brand", &vehicle.brand)?;
            validation::validate_non_empty_string("vehicles.model", &vehicle.model)?;
            validation::validate_price_per_day("vehicles.price_per_day", vehicle.price_per_day)?;
        }

        validation::validate_unique_ids("vehicles.id", self.vehicles.iter().map(|v| v.id.as_str()))?;

        if let Some(symbol) = &self.desk.currency_symbol {
            validation::validate_non_empty_string("desk.currency_symbol", symbol)?;
        }

        Ok(())
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ConfigProvider for FleetConfig {
    fn desk_name(&self) -> &str {
        self.desk.name.as_deref().unwrap_or(DEFAULT_DESK_NAME)
    }

    fn currency_symbol(&self) -> &str {
        self.desk
            .currency_symbol
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    fn return_policy(&self) -> ReturnPolicy {
        self.desk.return_policy.unwrap_or_default()
    }

    fn fleet(&self) -> Vec<Vehicle> {
        self.vehicles
            .iter()
            .map(|v| Vehicle::new(v.id.as_str(), v.brand.as_str(), v.model.as_str(), v.price_per_day))
            .collect()
    }
}

impl Validate for FleetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
