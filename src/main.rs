use clap::Parser;
use ist_london_clock::adapters::terminal::{render_frame, TerminalSink};
use ist_london_clock::app::formatters::{format_offset_delta, time_options};
use ist_london_clock::config::Command;
use ist_london_clock::domain::model::{ClockFrame, FrameSource};
use ist_london_clock::utils::error::ErrorSeverity;
use ist_london_clock::utils::{logger, validation::Validate};
use ist_london_clock::{
    ClockConfig, ClockError, ClockSession, CliConfig, SystemClock, Ticker, TimeConversionEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI args: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = run(cli.command, config).await {
        exit_with(&e);
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> ist_london_clock::Result<ClockConfig> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            ClockConfig::from_file(path)?
        }
        None => ClockConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

async fn run(command: Command, mut config: ClockConfig) -> ist_london_clock::Result<()> {
    let default_zone = config.default_source_zone()?;
    let engine = TimeConversionEngine::new(SystemClock::new())
        .with_precision(config.conversion.dst_precision);

    match command {
        Command::Live {
            ticks,
            interval_ms,
            custom,
        } => {
            if let Some(interval_ms) = interval_ms {
                config.ticker.interval_ms = interval_ms;
                config.validate()?;
            }

            let mut session = ClockSession::new(engine);
            if let Some(request) = custom.into_request(default_zone) {
                session.submit(request)?;
            }

            let sink = TerminalSink::stdout(config.render_options());
            let mut ticker = Ticker::new(session, sink)
                .with_period(config.tick_period())
                .with_max_ticks(ticks.or(config.ticker.max_ticks));

            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        tracing::info!("🛑 Shutdown signal received, stopping clock...");
                        let _ = shutdown_tx.send(true);
                    }
                    Err(err) => {
                        tracing::error!("❌ Unable to listen for shutdown signal: {}", err);
                    }
                }
            });

            ticker.run(shutdown_rx).await?;
        }
        Command::Convert { custom, json } => {
            let request = custom.into_request(default_zone, engine.now(), engine.precision());
            let result = engine.convert_custom(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let frame = ClockFrame {
                    source: FrameSource::Custom,
                    result,
                    offset_delta_hours: engine.utc_offset_delta_hours(),
                };
                print!("{}", render_frame(&frame, &config.render_options()));
            }
        }
        Command::Offset => {
            println!(
                "IST is {} ahead of London",
                format_offset_delta(engine.utc_offset_delta_hours())
            );
        }
        Command::Times => {
            for (value, label) in time_options() {
                println!("{}  {}", value, label);
            }
        }
    }

    Ok(())
}

fn exit_with(e: &ClockError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
