//! Demo configuration: button labels, classes and action timing.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/async-button/config.toml` (default
//! `~/.config/async-button/config.toml`).

use std::path::{Path, PathBuf};

use crate::core::props::{
    ButtonProps, DEFAULT_FULFILLED_CLASS, DEFAULT_LOADING_CLASS, DEFAULT_REJECTED_CLASS,
};

// ───────────────────────────────────────── config ────────────

/// Everything the demo reads from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub text: String,
    pub pending_text: Option<String>,
    pub fulfilled_text: Option<String>,
    pub rejected_text: Option<String>,
    pub class_name: Option<String>,
    pub loading_class: String,
    pub fulfilled_class: String,
    pub rejected_class: String,
    pub disabled: bool,
    /// Border title of the button, forwarded as the `title` attribute.
    pub title: Option<String>,
    /// How long the demo action takes before settling.
    pub delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            text: "Run".into(),
            pending_text: Some("Running".into()),
            fulfilled_text: Some("Done".into()),
            rejected_text: Some("Failed".into()),
            class_name: Some("AsyncButton".into()),
            loading_class: DEFAULT_LOADING_CLASS.into(),
            fulfilled_class: DEFAULT_FULFILLED_CLASS.into(),
            rejected_class: DEFAULT_REJECTED_CLASS.into(),
            disabled: false,
            title: Some("async-button".into()),
            delay_ms: 1200,
        }
    }
}

impl AppConfig {
    /// Props for the demo button.
    pub fn button_props(&self) -> ButtonProps {
        let mut props = ButtonProps {
            text: Some(self.text.clone()),
            pending_text: self.pending_text.clone(),
            fulfilled_text: self.fulfilled_text.clone(),
            rejected_text: self.rejected_text.clone(),
            class_name: self.class_name.clone(),
            loading_class: self.loading_class.clone(),
            fulfilled_class: self.fulfilled_class.clone(),
            rejected_class: self.rejected_class.clone(),
            disabled: self.disabled,
            ..ButtonProps::default()
        };
        if let Some(title) = &self.title {
            props = props.attribute("title", title.clone());
        }
        props
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse_config(&contents),
            Err(err) => {
                tracing::debug!("no config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Persist current config to the default location.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&config_path())
    }

    /// Save to `path` when given, otherwise to the default location.
    /// Returns where the file was written.
    pub fn persist(&self, path: Option<&Path>) -> anyhow::Result<PathBuf> {
        match path {
            Some(path) => {
                self.save_to(path)?;
                Ok(path.to_path_buf())
            }
            None => {
                self.save()?;
                Ok(config_path())
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = unquote(value.trim());
            let value = value.as_str();

            // Empty value clears an optional field.
            let optional = || (!value.is_empty()).then(|| value.to_string());

            match key {
                "text" => config.text = value.to_string(),
                "pending_text" => config.pending_text = optional(),
                "fulfilled_text" => config.fulfilled_text = optional(),
                "rejected_text" => config.rejected_text = optional(),
                "class_name" => config.class_name = optional(),
                "loading_class" => config.loading_class = value.to_string(),
                "fulfilled_class" => config.fulfilled_class = value.to_string(),
                "rejected_class" => config.rejected_class = value.to_string(),
                "title" => config.title = optional(),
                "disabled" => config.disabled = value == "true",
                "delay_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.delay_ms = v.min(60_000);
                    }
                }
                other => tracing::debug!("ignoring unknown config key {other:?}"),
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let opt = |v: &Option<String>| quote(v.as_deref().unwrap_or_default());
        let lines = [
            "# async-button configuration".to_string(),
            String::new(),
            "# Labels (empty value = fall back to `text`)".to_string(),
            format!("text = {}", quote(&self.text)),
            format!("pending_text = {}", opt(&self.pending_text)),
            format!("fulfilled_text = {}", opt(&self.fulfilled_text)),
            format!("rejected_text = {}", opt(&self.rejected_text)),
            String::new(),
            "# Classes".to_string(),
            format!("class_name = {}", opt(&self.class_name)),
            format!("loading_class = {}", quote(&self.loading_class)),
            format!("fulfilled_class = {}", quote(&self.fulfilled_class)),
            format!("rejected_class = {}", quote(&self.rejected_class)),
            String::new(),
            "# Behaviour".to_string(),
            format!("disabled = {}", self.disabled),
            format!("delay_ms = {}", self.delay_ms),
            format!("title = {}", opt(&self.title)),
            String::new(),
        ];
        lines.join("\n")
    }
}

/// Wrap `s` in double quotes, escaping backslashes and double quotes.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Inverse of [`quote`].  Values without a surrounding quote pair are taken
/// verbatim.
fn unquote(s: &str) -> String {
    let Some(inner) = s
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return s.to_string();
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Return the config file path (`$XDG_CONFIG_HOME/async-button/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("async-button").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_unknown_keys() {
        let cfg = AppConfig::parse_config(
            "# header\n[button]\ntext = \"Upload\"\nwhatever = 3\nnot a pair\ndelay_ms = 250\n",
        );
        assert_eq!(cfg.text, "Upload");
        assert_eq!(cfg.delay_ms, 250);
        assert_eq!(cfg.loading_class, DEFAULT_LOADING_CLASS);
    }

    #[test]
    fn empty_value_clears_optional_label() {
        let cfg = AppConfig::parse_config("pending_text =\ndisabled = true\n");
        assert_eq!(cfg.pending_text, None);
        assert!(cfg.disabled);
    }

    #[test]
    fn only_one_quote_pair_is_stripped() {
        let cfg = AppConfig::parse_config("text = \"\"quoted\"\"\ntitle = plain\n");
        assert_eq!(cfg.text, "\"quoted\"");
        assert_eq!(cfg.title.as_deref(), Some("plain"));
    }

    #[test]
    fn bad_delay_keeps_default() {
        let cfg = AppConfig::parse_config("delay_ms = soon");
        assert_eq!(cfg.delay_ms, AppConfig::default().delay_ms);
    }

    #[test]
    fn serialised_form_parses_back() {
        let mut cfg = AppConfig::default();
        cfg.text = "Say \"hi\"".into();
        cfg.pending_text = Some("C:\\temp \"".into());
        cfg.rejected_text = None;
        cfg.delay_ms = 900;
        assert_eq!(AppConfig::parse_config(&cfg.serialise()), cfg);
    }

    #[test]
    fn props_carry_title_attribute() {
        let props = AppConfig::default().button_props();
        assert_eq!(props.text.as_deref(), Some("Run"));
        assert_eq!(props.attributes.get("title").map(String::as_str), Some("async-button"));
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = std::env::temp_dir().join(format!("async-button-cfg-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.title = None;
        let written = cfg.persist(Some(&path)).unwrap();
        assert_eq!(written, path);
        assert_eq!(AppConfig::load_from(&path), cfg);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = AppConfig::load_from(Path::new("/definitely/not/here/config.toml"));
        assert_eq!(cfg, AppConfig::default());
    }
}
