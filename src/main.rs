use anyhow::Context;
use clap::Parser;
use grade_tracker::utils::{logger, validation::Validate};
use grade_tracker::{CliConfig, GradeTracker, RosterConfig, TrackerError};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let _config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger();

    if let Err(e) = run() {
        tracing::error!("❌ Grade tracker failed: {} (Severity: {:?})", e, e.severity());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    std::io::stdout()
        .flush()
        .context("failed to flush stdout")?;

    Ok(())
}

fn run() -> Result<(), TrackerError> {
    let roster = RosterConfig::builtin()?;
    roster.validate()?;

    let tracker = GradeTracker::new(roster);
    let mut out = std::io::stdout().lock();
    tracker.run(&mut out)?;

    Ok(())
}
