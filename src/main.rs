//! Linemark - render markdown to HTML for live preview.
//!
//! # Usage
//!
//! ```bash
//! linemark README.md
//! linemark README.md -o README.html
//! linemark --watch README.md -o preview.html
//! cat notes.md | linemark -
//! ```

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use linemark::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use linemark::export::{self, ExportFormat};
use linemark::perf;
use linemark::render::{LineBreak, RenderOptions};
use linemark::watcher::{DEFAULT_DEBOUNCE, FileWatcher, POLL_INTERVAL};

/// Render markdown to HTML
#[derive(Parser, Debug)]
#[command(name = "linemark", version, about, long_about = None)]
struct Cli {
    /// Markdown file to render, or `-` for stdin
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Marker appended after each plain line
    #[arg(long, value_enum)]
    line_break: Option<LineBreak>,

    /// Apply inline formatting inside headers and blockquotes
    #[arg(long)]
    inline_blocks: bool,

    /// Watch the file and re-render on every change
    #[arg(short, long)]
    watch: bool,

    /// Report render timings
    #[arg(long)]
    perf: bool,

    /// Write detailed render/watch events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }
    Ok(export::load(path)?)
}

fn write_output(output: Option<&Path>, payload: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, payload)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(payload.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn render_once(
    path: &Path,
    output: Option<&Path>,
    format: ExportFormat,
    options: &RenderOptions,
) -> Result<()> {
    let source = read_source(path)?;
    let payload = {
        let _scope = perf::scope("render");
        export::export(&source, format, options)
    };
    perf::log_event(
        "render.done",
        format!("bytes_in={} bytes_out={}", source.len(), payload.len()),
    );
    write_output(output, &payload)
}

fn watch(
    path: &Path,
    output: Option<&Path>,
    format: ExportFormat,
    options: &RenderOptions,
) -> Result<()> {
    let mut watcher = FileWatcher::new(path, DEFAULT_DEBOUNCE)
        .with_context(|| format!("Failed to watch {}", path.display()))?;
    tracing::info!(path = %watcher.target_path().display(), "watching for changes");

    loop {
        std::thread::sleep(POLL_INTERVAL);
        if !watcher.poll_changed() {
            continue;
        }
        // A failed re-render keeps the watch alive; the next save retries.
        match render_once(path, output, format, options) {
            Ok(()) => tracing::info!(path = %path.display(), "re-rendered"),
            Err(err) => tracing::warn!("re-render failed: {err:#}"),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_enabled(effective.perf);
    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("LINEMARK_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        tracing::warn!(
            "Failed to initialize render debug log {}: {err}",
            render_debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
        );
    }

    let options = effective.render_options();
    let format = effective
        .format
        .or_else(|| cli.output.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or_default();

    if !is_stdin(&cli.file) && !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    if effective.watch && is_stdin(&cli.file) {
        anyhow::bail!("--watch needs a file, not stdin");
    }

    render_once(&cli.file, cli.output.as_deref(), format, &options)?;

    if effective.watch {
        watch(&cli.file, cli.output.as_deref(), format, &options)?;
    }
    Ok(())
}
