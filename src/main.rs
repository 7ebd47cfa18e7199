use clap::Parser;
use rental_desk::utils::{logger, validation::Validate};
use rental_desk::{CliConfig, MenuSession, RentalService};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rental-desk");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let fleet = match config.load_fleet() {
        Ok(fleet) => fleet,
        Err(e) => {
            tracing::error!("❌ Failed to load fleet: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = fleet.validate() {
        tracing::error!("❌ Fleet validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let mut service = RentalService::from_config(&fleet);

    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session =
            MenuSession::with_config(&mut service, stdin.lock(), stdout.lock(), &fleet);
        session.run()?;
    }

    tracing::info!(
        open_rentals = service.open_rental_count(),
        "Rental desk closed"
    );
    Ok(())
}
