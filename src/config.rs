use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::export::ExportFormat;
use crate::render::{LineBreak, RenderOptions};

/// Flags that can be saved as defaults in a config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub perf: bool,
    pub inline_blocks: bool,
    pub line_break: Option<LineBreak>,
    pub format: Option<ExportFormat>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: booleans are OR-ed, options from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            perf: self.perf || other.perf,
            inline_blocks: self.inline_blocks || other.inline_blocks,
            line_break: other.line_break.or(self.line_break),
            format: other.format.or(self.format),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }

    /// Render options described by these flags.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_line_break(self.line_break.unwrap_or_default())
            .with_inline_block_content(self.inline_blocks)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("linemark").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("linemark")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("linemark").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("linemark").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".linemarkrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# linemark defaults (saved with --save)".to_string()];
    if flags.watch {
        lines.push("--watch".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if flags.inline_blocks {
        lines.push("--inline-blocks".to_string());
    }
    if let Some(line_break) = flags.line_break {
        lines.push(format!("--line-break {}", line_break_name(line_break)));
    }
    if let Some(format) = flags.format {
        lines.push(format!("--format {}", format.extension()));
    }
    if let Some(path) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the known flags out of a token list; anything else is ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let next = tokens.get(i + 1).map(String::as_str);
        match token {
            "--watch" | "-w" => flags.watch = true,
            "--perf" => flags.perf = true,
            "--inline-blocks" => flags.inline_blocks = true,
            "--line-break" => {
                if let Some(value) = next {
                    flags.line_break = parse_line_break(value);
                    i += 1;
                }
            }
            "--format" => {
                if let Some(value) = next {
                    flags.format = parse_format(value);
                    i += 1;
                }
            }
            "--render-debug-log" => {
                if let Some(value) = next {
                    flags.render_debug_log = Some(PathBuf::from(value));
                    i += 1;
                }
            }
            _ => {
                if let Some(value) = token.strip_prefix("--line-break=") {
                    flags.line_break = parse_line_break(value);
                } else if let Some(value) = token.strip_prefix("--format=") {
                    flags.format = parse_format(value);
                } else if let Some(value) = token.strip_prefix("--render-debug-log=") {
                    flags.render_debug_log = Some(PathBuf::from(value));
                }
            }
        }
        i += 1;
    }
    flags
}

const fn line_break_name(line_break: LineBreak) -> &'static str {
    match line_break {
        LineBreak::Br => "br",
        LineBreak::Newline => "newline",
    }
}

fn parse_line_break(s: &str) -> Option<LineBreak> {
    match s {
        "br" => Some(LineBreak::Br),
        "newline" => Some(LineBreak::Newline),
        _ => None,
    }
}

fn parse_format(s: &str) -> Option<ExportFormat> {
    match s {
        "html" => Some(ExportFormat::Html),
        "md" => Some(ExportFormat::Markdown),
        _ => None,
    }
}
