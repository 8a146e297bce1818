use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::input::{Binding, PrimaryModifier};

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    const fn flag_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub modifier: Option<PrimaryModifier>,
    pub theme: Option<ThemeMode>,
    pub log_file: Option<PathBuf>,
    /// Extra hotkeys, checked before the defaults
    pub bindings: Vec<Binding>,
}

impl ConfigFlags {
    /// Merge two flag sets, `other` winning where both are set.
    ///
    /// Bindings accumulate, with `other`'s checked first.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            modifier: other.modifier.or(self.modifier),
            theme: other.theme.or(self.theme),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
            bindings: other
                .bindings
                .iter()
                .chain(&self.bindings)
                .copied()
                .collect(),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("marksmith").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("marksmith")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("marksmith").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("marksmith")
                .join("config");
        }
    }

    PathBuf::from(".marksmithrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".marksmithrc")
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
    let mut lines = vec!["# marksmith defaults (saved with --save)".to_string()];
    if let Some(modifier) = flags.modifier {
        lines.push(format!("--modifier {}", modifier.flag_value()));
    }
    if let Some(theme) = flags.theme {
        lines.push(format!("--theme {}", theme.flag_value()));
    }
    if let Some(log_file) = &flags.log_file {
        lines.push(format!("--log-file {}", log_file.display()));
    }
    for binding in &flags.bindings {
        lines.push(format!("--bind {binding}"));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
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

/// Pick known flags out of a token list.
///
/// Unknown tokens are skipped so the program name and positional
/// arguments can be passed straight through. Both `--flag value` and
/// `--flag=value` are accepted.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        if matches!(name, "--modifier" | "--theme" | "--log-file" | "--bind") {
            let value = match inline {
                Some(value) => Some(value),
                None => {
                    i += 1;
                    tokens.get(i).map(String::as_str)
                }
            };
            if let Some(value) = value {
                apply_flag(&mut flags, name, value);
            }
        }
        i += 1;
    }
    flags
}

fn apply_flag(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--modifier" => match parse_modifier(value) {
            Some(modifier) => flags.modifier = Some(modifier),
            None => tracing::warn!(value, "ignoring unknown --modifier"),
        },
        "--theme" => match parse_theme(value) {
            Some(theme) => flags.theme = Some(theme),
            None => tracing::warn!(value, "ignoring unknown --theme"),
        },
        "--log-file" => flags.log_file = Some(PathBuf::from(value)),
        "--bind" => match value.parse::<Binding>() {
            Ok(binding) => flags.bindings.push(binding),
            Err(err) => tracing::warn!(value, %err, "ignoring invalid --bind"),
        },
        _ => {}
    }
}

fn parse_modifier(s: &str) -> Option<PrimaryModifier> {
    match s {
        "ctrl" => Some(PrimaryModifier::Control),
        "super" => Some(PrimaryModifier::Super),
        _ => None,
    }
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = tokens(&[
            "marksmith",
            "--modifier",
            "super",
            "--theme",
            "light",
            "--log-file=debug.log",
            "--save",
        ]);
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.modifier, Some(PrimaryModifier::Super));
        assert_eq!(flags.theme, Some(ThemeMode::Light));
        assert_eq!(flags.log_file, Some(PathBuf::from("debug.log")));
    }

    #[test]
    fn test_parse_flag_tokens_skips_unknown_values() {
        let flags = parse_flag_tokens(&tokens(&["--modifier", "hyper", "--theme=auto"]));
        assert_eq!(flags, ConfigFlags::default());
    }

    #[test]
    fn test_parse_flag_tokens_tolerates_missing_value() {
        let flags = parse_flag_tokens(&tokens(&["--theme", "dark", "--modifier"]));
        assert_eq!(flags.theme, Some(ThemeMode::Dark));
        assert_eq!(flags.modifier, None);
    }

    #[test]
    fn test_parse_flag_tokens_collects_bindings() {
        let flags = parse_flag_tokens(&tokens(&[
            "--bind",
            "mod+k=code",
            "--bind=mod+e=italic",
            "--bind",
            "mod+k",
        ]));
        let bound: Vec<String> = flags.bindings.iter().map(ToString::to_string).collect();
        assert_eq!(bound, vec!["mod+k=code", "mod+e=italic"]);
    }

    #[test]
    fn test_config_union_checks_later_bindings_first() {
        let file = ConfigFlags {
            bindings: vec!["mod+k=code".parse().unwrap()],
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            bindings: vec!["mod+k=bold".parse().unwrap()],
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.bindings, vec![cli.bindings[0], file.bindings[0]]);
    }

    #[test]
    fn test_config_union_prefers_later_values() {
        let file = ConfigFlags {
            modifier: Some(PrimaryModifier::Super),
            theme: Some(ThemeMode::Light),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            theme: Some(ThemeMode::Dark),
            log_file: Some(PathBuf::from("cli.log")),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.modifier, Some(PrimaryModifier::Super));
        assert_eq!(merged.theme, Some(ThemeMode::Dark));
        assert_eq!(merged.log_file, Some(PathBuf::from("cli.log")));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            modifier: Some(PrimaryModifier::Control),
            theme: Some(ThemeMode::Light),
            log_file: Some(PathBuf::from("marksmith.log")),
            bindings: vec!["mod+k=code".parse().unwrap(), "alt+b=bold".parse().unwrap()],
        };

        save_config_flags(&path, &flags).unwrap();
        assert_eq!(load_config_flags(&path).unwrap(), flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(load_config_flags(&path).unwrap(), ConfigFlags::default());
    }

    #[test]
    fn test_clear_missing_config_is_ok() {
        let dir = tempdir().unwrap();
        assert!(clear_config_flags(&dir.path().join("absent")).is_ok());
    }
}
