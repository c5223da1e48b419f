use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use imgcheck::{
    ConfigOverrides, DetailLevel, Locale, MockAnalyzer, ReviewConfig, ReviewSession, render,
};

#[derive(Parser)]
#[command(name = "imgcheck")]
#[command(about = "Check an image for content problems before publishing")]
struct Cli {
    /// TOML file with panel settings
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Review one image and print the report
    Check {
        /// Path to input image file
        #[arg(value_name = "IMAGE")]
        image_path: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Open the review window
    #[cfg(feature = "gui")]
    Gui {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

#[derive(Args, Default)]
struct SettingsArgs {
    /// Report language
    #[arg(long, value_enum)]
    locale: Option<LocaleArg>,

    /// How much of the report to show
    #[arg(long, value_enum)]
    detail: Option<DetailArg>,

    /// Simulated analysis time in milliseconds
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LocaleArg {
    En,
    Bn,
}

#[derive(Clone, Copy, ValueEnum)]
enum DetailArg {
    Minimal,
    Detailed,
}

impl SettingsArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            locale: self.locale.map(|locale| match locale {
                LocaleArg::En => Locale::En,
                LocaleArg::Bn => Locale::Bn,
            }),
            detail: self.detail.map(|detail| match detail {
                DetailArg::Minimal => DetailLevel::Minimal,
                DetailArg::Detailed => DetailLevel::Detailed,
            }),
            latency_ms: self.latency_ms,
        }
    }
}

fn load_config(path: Option<&PathBuf>, settings: &SettingsArgs) -> anyhow::Result<ReviewConfig> {
    let config = ReviewConfig::load_or_default(path.map(PathBuf::as_path))
        .context("Failed to load configuration")?;
    Ok(config.apply_overrides(settings.overrides()))
}

async fn check(config: ReviewConfig, image_path: PathBuf, json: bool) -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new(config.latency()));
    let mut session = ReviewSession::new(analyzer, config.profile());

    if !session.select(&image_path) {
        anyhow::bail!("Not an image file: {}", image_path.display());
    }

    let report = session
        .analyze()
        .await?
        .context("Nothing was selected for analysis")?;

    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render::to_text(report));
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn open_window(config: ReviewConfig) -> anyhow::Result<()> {
    let analyzer = Arc::new(MockAnalyzer::new(config.latency()));
    imgcheck::gui::run(config, analyzer).map_err(|e| anyhow::anyhow!("Window failed: {}", e))
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    imgcheck::logging::init(args.verbose);

    match args.command {
        Some(Command::Check {
            image_path,
            json,
            settings,
        }) => {
            let config = load_config(args.config.as_ref(), &settings)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(check(config, image_path, json))
        }
        #[cfg(feature = "gui")]
        Some(Command::Gui { settings }) => open_window(load_config(args.config.as_ref(), &settings)?),
        #[cfg(feature = "gui")]
        None => open_window(load_config(args.config.as_ref(), &SettingsArgs::default())?),
        #[cfg(not(feature = "gui"))]
        None => anyhow::bail!("Built without the window; use `imgcheck check <IMAGE>`"),
    }
}
