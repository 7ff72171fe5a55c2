use clap::Parser;
use contact_form::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contact-form", about = "Terminal contact form")]
struct Args {
    /// Simulated submission delay in milliseconds
    #[arg(long)]
    submit_delay_ms: Option<u64>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring config file: {e}");
        config::FormConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            submit_delay_ms: args.submit_delay_ms,
            log_file: args.log_file,
            log_level: args.log_level,
        },
    );

    // The terminal belongs to the TUI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Contact form starting up");
    log::debug!("Resolved config: {:?}", resolved);

    contact_form::tui::run(resolved)
}
