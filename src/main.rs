use clap::Parser;
use slider_assets::{
    assets,
    cli::{commands, Cli, Commands},
    config::Settings,
    Result,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging on stderr so stdout only carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,slider_assets=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e.log_safe());
        let _ = commands::report_error(&e, &mut std::io::stderr());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = match &cli.env_file {
        Some(path) => Settings::from_env_file(path)?,
        None => Settings::from_env()?,
    };

    // Override settings with CLI arguments
    if let Some(base_url) = cli.base_url {
        settings.override_base_url(base_url);
    }

    info!("Base URL: '{}'", settings.assets.base_url);

    let catalog = assets::init_global(&settings);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Resolve { paths } => commands::resolve(catalog, &paths, &mut out),
        Commands::Slider { json } => commands::slider(catalog, json, &mut out),
    }
}
