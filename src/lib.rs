pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod journal;
pub mod notify;
pub mod reminder;
pub mod scheduler;
pub mod settings;
pub mod sound;

use clap::Parser;
use cli::Cli;
use error::{AppError, AppResult};
use log::{info, warn};
use notify::DesktopNotifier;
use scheduler::{general_period_secs, git_interval_secs, Dispatcher};
use settings::{load_settings, save_settings, Settings};
use signal_hook::consts::{SIGINT, SIGTERM};
use sound::KiraPlayer;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Outcome of combining the settings file with the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Startup {
    /// Start the reminder loop with these settings
    Run(Settings),
    /// `--write-config` saved the settings here; exit without looping
    ConfigWritten(PathBuf),
}

/// Load settings, overlay flags, and handle `--write-config`
pub fn prepare(cli: &Cli) -> AppResult<Startup> {
    let mut settings = load_settings(cli.config.as_deref())?;
    cli.apply(&mut settings);

    if let Some(path) = &cli.write_config {
        save_settings(&settings, path)?;
        return Ok(Startup::ConfigWritten(path.clone()));
    }
    Ok(Startup::Run(settings))
}

/// Settings that are accepted but probably not what the user meant
pub fn startup_warnings(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();

    let frequency = settings.general.frequency;
    if frequency == 0 {
        warnings.push(
            "General reminder frequency is 0, only git reminders will fire".to_string(),
        );
    } else if general_period_secs(settings).is_none() {
        warnings.push(format!(
            "General reminder frequency of {} minutes is too large, it will never fire",
            frequency
        ));
    }

    if !settings.developer.git_reminders {
        return warnings;
    }
    let interval = settings.developer.git_interval;
    if interval == 0 {
        warnings.push(
            "Git reminder interval is 0, git reminders will fire every tick".to_string(),
        );
    } else if git_interval_secs(settings).is_none() {
        warnings.push(format!(
            "Git reminder interval of {} minutes is too large, it will never fire",
            interval
        ));
    }

    warnings
}

fn print_banner(settings: &Settings) {
    println!("🚀 Developer Reminder Started!");
    println!(
        "🔔 General reminders every {} minutes",
        settings.general.frequency
    );
    if settings.developer.git_reminders {
        println!(
            "💾 Git reminders every {} minutes",
            settings.developer.git_interval
        );
    }
    println!("⏹ Press Ctrl+C to stop\n");
}

/// Raise the returned flag on Ctrl+C or SIGTERM
fn install_stop_flag() -> AppResult<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&stop))
            .map_err(|e| AppError::signal(format!("signal {}: {}", signal, e)))?;
    }
    Ok(stop)
}

pub fn run() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let settings = match prepare(&Cli::parse())? {
        Startup::Run(settings) => settings,
        Startup::ConfigWritten(path) => {
            info!("Settings written to {}", path.display());
            return Ok(());
        }
    };

    for warning in startup_warnings(&settings) {
        warn!("{}", warning);
    }

    let stop = install_stop_flag()?;
    print_banner(&settings);

    let dispatcher = Dispatcher::new(DesktopNotifier, KiraPlayer);
    scheduler::run_loop(&settings, &dispatcher, &stop);
    Ok(())
}
