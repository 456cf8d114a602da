// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use ytcaptions::app_config::{self, Config};
use ytcaptions::errors::ResolveError;
use ytcaptions::language_utils::get_language_name;
use ytcaptions::{Controller, TranscriptRequest, VideoId, server};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the transcript of a video and print the JSON response
    Fetch(FetchArgs),

    /// List the caption tracks a video advertises
    Tracks {
        /// Video URL or identifier
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Serve transcripts over HTTP
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate shell completions for ytcaptions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct FetchArgs {
    /// Video URL or identifier
    #[arg(value_name = "INPUT")]
    input: String,

    /// Preferred caption language (e.g. 'en', 'fr', 'pt-BR')
    #[arg(short, long)]
    lang: Option<String>,

    /// Include considered tracks and attempted languages
    #[arg(short, long)]
    debug: bool,

    /// Print only the transcript text
    #[arg(short, long)]
    text_only: bool,
}

/// ytcaptions - plain-text captions for YouTube videos
#[derive(Parser, Debug)]
#[command(name = "ytcaptions")]
#[command(version)]
#[command(about = "Resolve YouTube videos into plain-text captions")]
#[command(long_about = "ytcaptions finds the best caption track of a video and prints its text.

EXAMPLES:
    ytcaptions fetch https://youtu.be/dQw4w9WgXcQ       # Best available transcript
    ytcaptions fetch -l fr dQw4w9WgXcQ                  # Prefer French, translate if needed
    ytcaptions fetch -d 'https://www.youtube.com/watch?v=dQw4w9WgXcQ'
    ytcaptions tracks dQw4w9WgXcQ                       # List advertised tracks
    ytcaptions serve --port 8080                        # GET /api/transcript?url=...
    ytcaptions completions bash > ytcaptions.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't
    exist, a default one is created.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Coloured stderr logger
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, tag) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                colour, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the configuration says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell.clone(), &mut cmd, "ytcaptions", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = load_config(&cli.config_path)?;
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(level_filter(&config.log_level));

    match cli.command {
        Commands::Fetch(args) => run_fetch(config, args).await,
        Commands::Tracks { input } => run_tracks(config, &input).await,
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            run_serve(config).await
        }
        Commands::Completions { .. } => Ok(()),
    }
}

// Load the config file, writing a default one when it doesn't exist
fn load_config(config_path: &str) -> Result<Config> {
    let config = if Path::new(config_path).exists() {
        Config::load(config_path)
            .with_context(|| format!("Failed to load config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config
            .save(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

async fn run_fetch(config: Config, args: FetchArgs) -> Result<()> {
    let controller = Controller::with_config(config)?;

    let mut request = TranscriptRequest {
        lang: args.lang,
        debug: args.debug.then(|| "1".to_string()),
        ..Default::default()
    };
    match VideoId::from_input(&args.input) {
        Some(video_id) => request.id = Some(video_id.to_string()),
        None => request.url = Some(args.input),
    }

    let response = controller.handle(request).await;

    match (&response.body.text, args.text_only) {
        (Some(text), true) => println!("{}", text),
        _ => println!("{}", serde_json::to_string_pretty(&response.body)?),
    }

    if response.is_success() {
        Ok(())
    } else {
        Err(anyhow!(
            "Request failed with status {}: {}",
            response.status,
            response.body.error.unwrap_or_default()
        ))
    }
}

async fn run_tracks(config: Config, input: &str) -> Result<()> {
    let controller = Controller::with_config(config)?;
    let video_id = VideoId::from_input(input).ok_or(ResolveError::NoIdentifier)?;

    let tracks = controller.resolver().list_tracks(&video_id).await;
    if tracks.is_empty() {
        warn!("No caption tracks listed for {}", video_id);
        return Ok(());
    }

    info!("Found {} caption track(s) for {}", tracks.len(), video_id);
    for track in &tracks {
        let language = get_language_name(&track.language_code).unwrap_or_else(|_| "unknown".to_string());
        let kind = if track.is_auto_generated() { "asr" } else { "human" };
        println!(
            "{:<10} {:<20} {:<6} {}",
            track.language_code,
            language,
            kind,
            track.name.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

async fn run_serve(config: Config) -> Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let controller = Arc::new(Controller::with_config(config)?);

    server::serve(controller, &host, port).await
}
