use clap::Parser;
use donation_desk::utils::error::{DeskError, ErrorSeverity};
use donation_desk::utils::logger;
use donation_desk::{CliConfig, DonationRegistry, Session};

fn exit_code(e: &DeskError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    if settings.log_json {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting donation-desk");
    tracing::debug!("Settings: {:?}", settings);

    let registry = DonationRegistry::from_config(&settings);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), registry)
        .with_format(settings.format)
        .with_batch(settings.batch);

    match session.run() {
        Ok(summary) => {
            let registry = session.registry();
            tracing::info!(
                "Session closed: {} donations recorded across {} campaigns ({} rejected), Rs{} raised",
                summary.donations,
                registry.len(),
                summary.rejected,
                registry.total_raised()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "Session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}
