mod app_state;
mod cli;

use std::fs::File;
use std::io::{self, BufReader};

use regform_config::RegformConfig;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> Result<RegformConfig, regform_common::ConfigError> {
    match &args.config {
        Some(path) => regform_config::load_config_from(path),
        None => regform_config::load_config(),
    }
}

fn main() -> regform_common::Result<()> {
    let args = cli::parse();

    // Config decides the default log level, so it is read before logging starts.
    let config = load_config(&args);

    let log_directive = args.log_level.clone().unwrap_or_else(|| {
        config
            .as_ref()
            .map(|c| c.logging.level)
            .unwrap_or_default()
            .directive()
            .to_string()
    });
    let filter = match log_directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("ignoring invalid log directive '{log_directive}': {e}");
            EnvFilter::from_default_env()
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("regform v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        RegformConfig::default()
    });

    let mut app = app_state::RegistrationApp::new(config);
    let mut stdout = io::stdout().lock();

    match &args.script {
        Some(path) => {
            tracing::info!("reading commands from {}", path.display());
            let file = File::open(path)?;
            app.run(BufReader::new(file), &mut stdout)?;
        }
        None => app.run(io::stdin().lock(), &mut stdout)?,
    }

    tracing::info!(
        submissions = app.submission_count(),
        phase = ?app.store().phase(),
        profile_image = app.profile().has_image(),
        cover_image = app.cover().has_image(),
        "Shutdown complete"
    );
    Ok(())
}
