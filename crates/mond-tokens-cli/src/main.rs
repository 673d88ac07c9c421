use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use mond_tokens_core::config::source_date_epoch;
use mond_tokens_core::{generator, BuildConfig, FsSourceLoader};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compile design tokens into CSS variables and theme objects", long_about = None)]
struct Cli {
    /// Directory holding primitives/, semantic/ and brands/
    #[arg(long, env = "MOND_TOKENS_DIR", default_value = "tokens")]
    tokens_dir: PathBuf,

    /// Directory the artifacts are written to
    #[arg(long, env = "MOND_TOKENS_OUT", default_value = "dist")]
    out_dir: PathBuf,

    /// Custom-property prefix
    #[arg(long, default_value = "mond")]
    prefix: String,

    /// Brand whose primitives feed tokens.css
    #[arg(long, default_value = "default")]
    css_brand: String,

    /// Leave the generation timestamp out of artifact headers
    #[arg(long)]
    no_timestamp: bool,

    /// Fail on unresolved references inside gradients too
    #[arg(long)]
    strict: bool,

    /// Also emit the colour palette into :root
    #[arg(long)]
    include_palette: bool,

    /// Resolve everything but write nothing
    #[arg(long)]
    check: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

impl Cli {
    fn build_config(&self, now: DateTime<Utc>) -> BuildConfig {
        let timestamp = if self.no_timestamp {
            None
        } else {
            Some(source_date_epoch().unwrap_or(now))
        };
        BuildConfig {
            tokens_dir: self.tokens_dir.clone(),
            out_dir: self.out_dir.clone(),
            prefix: self.prefix.clone(),
            css_brand: self.css_brand.clone(),
            timestamp,
            strict: self.strict,
            include_palette: self.include_palette,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum LogFormat {
    Pretty,
    Json,
}

fn init_logging(level: LogLevel, format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.to_string().parse()?)
        .from_env_lossy();

    let subscriber_builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => subscriber_builder.json().init(),
        LogFormat::Pretty => subscriber_builder.pretty().init(),
    }
    Ok(())
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.build_config(Utc::now());

    info!("Tokens: {:?}", config.tokens_dir);
    info!("Output: {:?}", config.out_dir);

    let artifacts = generator::build(&FsSourceLoader, &config).with_context(|| {
        format!("generating tokens from {}", config.tokens_dir.display())
    })?;

    if cli.check {
        for artifact in &artifacts {
            info!(path = %artifact.path.display(), bytes = artifact.contents.len(), "Checked");
        }
        info!("Check passed; {} artifacts not written.", artifacts.len());
        return Ok(());
    }

    generator::write_artifacts(&config.out_dir, &artifacts)
        .with_context(|| format!("writing artifacts to {}", config.out_dir.display()))?;
    info!("Generation complete: {} artifacts.", artifacts.len());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level, cli.log_format) {
        eprintln!("Failed to initialize logging: {:?}", e);
        std::process::exit(1);
    }

    if let Err(e) = execute(&cli) {
        error!("Generation failed: {:?}", e);
        std::process::exit(1);
    }
}
