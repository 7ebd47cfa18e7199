use crate::config::toml_config::FleetConfig;
use crate::core::ReturnPolicy;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rental-desk")]
#[command(about = "In-memory vehicle rental desk driven by a text menu")]
pub struct CliConfig {
    /// TOML file describing the fleet; the built-in fleet is used otherwise
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Return policy, overrides the fleet file
    #[arg(long, value_enum)]
    pub policy: Option<ReturnPolicy>,

    /// Currency symbol printed before amounts, overrides the fleet file
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the fleet file (or the built-in fleet) and applies flag overrides.
    pub fn load_fleet(&self) -> Result<FleetConfig> {
        let mut fleet = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading fleet from: {}", path.display());
                FleetConfig::from_file(path)?
            }
            None => FleetConfig::builtin(),
        };

        if let Some(policy) = self.policy {
            fleet.desk.return_policy = Some(policy);
            tracing::info!("🔧 Return policy overridden to: {:?}", policy);
        }
        if let Some(symbol) = &self.currency {
            fleet.desk.currency_symbol = Some(symbol.clone());
        }

        Ok(fleet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_defaults_use_builtin_fleet() {
        let config = CliConfig::parse_from(["rental-desk"]);
        let fleet = config.load_fleet().unwrap();

        assert_eq!(fleet.vehicles.len(), 6);
        assert_eq!(fleet.return_policy(), ReturnPolicy::Simple);
        assert!(!config.verbose);
    }

    #[test]
    fn test_flags_override_fleet_settings() {
        let config =
            CliConfig::parse_from(["rental-desk", "--policy", "verified", "--currency", "£", "-v"]);
        let fleet = config.load_fleet().unwrap();

        assert_eq!(fleet.return_policy(), ReturnPolicy::Verified);
        assert_eq!(fleet.currency_symbol(), "£");
        assert!(config.verbose);
    }
}
