use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use sandpit_core::layout::DEFAULT_EXPANDED_PRESET;
use sandpit_term::{
    start_loop, Config, ConfigKey, EditorTab, EditorTheme, SessionProps, TerminalFullscreenHost,
    TextAreaEditor,
};
use tokio::fs;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser, Debug)]
#[clap(
    name = "sandpit",
    version,
    about = "A terminal code sandbox for learners: edit, run, and preview small programs without leaving your shell."
)]
struct Cli {
    #[clap(help = "Files to open as tabs")]
    files: Vec<PathBuf>,

    #[clap(long, help = "Color theme for the editor pane [default: dark]", value_parser = ["dark", "light"])]
    theme: Option<String>,

    #[clap(long, help = "Language for new buffers [default: python]")]
    language: Option<String>,

    #[clap(long, help = "Expanded height of the output panel, in rows [default: 15]")]
    output_height: Option<String>,

    #[clap(long, help = "Path to the configuration file")]
    config_file: Option<String>,

    #[clap(long, help = "Print the default configuration and exit")]
    print_default_config: bool,
}

fn init_tracing() -> Result<Option<WorkerGuard>> {
    let Some(cache_dir) = dirs::cache_dir() else {
        return Ok(None);
    };
    let log_dir = cache_dir.join("sandpit");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&log_dir, "sandpit.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    if cli.print_default_config {
        println!("{}", Config::serialize_default());
        return Ok(());
    }

    let _log_guard = init_tracing()?;
    Config::load(vec![&matches]).await?;

    let mut tabs = Vec::new();
    for path in &cli.files {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        tabs.push(EditorTab::from_file(path, content));
    }
    if tabs.is_empty() {
        tabs.push(EditorTab::new(
            "untitled-1",
            &Config::get(ConfigKey::Language),
            "",
        ));
    }

    let expanded_output_height = Config::get(ConfigKey::OutputHeight)
        .parse::<u16>()
        .unwrap_or(DEFAULT_EXPANDED_PRESET);

    let props = SessionProps {
        tabs,
        editor: Box::new(TextAreaEditor::new()),
        theme: EditorTheme::named(&Config::get(ConfigKey::Theme)),
        fullscreen_host: Box::new(TerminalFullscreenHost),
        expanded_output_height,
        default_language: Config::get(ConfigKey::Language),
    };

    start_loop(props).await
}
