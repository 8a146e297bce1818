//! Marksmith - rich-text formatting hotkeys in a terminal editor.
//!
//! # Usage
//!
//! ```bash
//! marksmith
//! marksmith --modifier super --theme light
//! marksmith --log-file marksmith.log --save
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use marksmith::app::App;
use marksmith::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use marksmith::input::{Binding, PrimaryModifier};

/// Rich-text formatting hotkeys over a sample document
#[derive(Parser, Debug)]
#[command(name = "marksmith", version, about, long_about = None)]
struct Cli {
    /// Modifier that `mod` resolves to. Defaults to super on macOS when the
    /// terminal reports super (kitty keyboard protocol), ctrl otherwise
    #[arg(long, value_enum)]
    modifier: Option<PrimaryModifier>,

    /// Color theme for the editor surface
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Write tracing output to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Extra hotkey checked before the defaults, e.g. `mod+k=code` (repeatable)
    #[arg(long = "bind", value_name = "CHORD=MARK")]
    bind: Vec<Binding>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Installed first so config warnings are reported.
    let log_output = marksmith::logging::init();

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
    let effective = file_flags.union(&ConfigFlags {
        modifier: cli.modifier,
        theme: cli.theme,
        log_file: cli.log_file,
        bindings: cli.bind,
    });

    log_output.redirect(effective.log_file.as_deref())?;
    tracing::info!(
        global = %global_path.display(),
        local = %local_path.display(),
        ?effective,
        "resolved config"
    );

    let mut app = App::new(marksmith::document::sample())
        .with_primary_modifier(effective.modifier)
        .with_bindings(effective.bindings)
        .with_theme(effective.theme.unwrap_or_default());

    app.run().context("Application error")
}
