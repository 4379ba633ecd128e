use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellSettings {
    audio_enabled: bool,
    taskbar_height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowLayout {
    origin: i32,
    cascade_step: i32,
    default_width: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BootConfig {
    initial_delay_ms: u32,
    line_delay_min_ms: u32,
    line_delay_jitter_ms: u32,
    progress_interval_ms: u32,
    progress_step_max: f64,
    launch_delay_ms: u32,
    lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppLink {
    text: String,
    url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    id: String,
    title: String,
    icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extended_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(default)]
    links: Vec<AppLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    #[serde(default = "default_true")]
    show_on_desktop: bool,
    #[serde(default = "default_true")]
    show_in_start_menu: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellCatalog {
    schema_version: u32,
    shell: ShellSettings,
    window: WindowLayout,
    boot: BootConfig,
    apps: Vec<AppEntry>,
}

fn default_true() -> bool {
    true
}

fn validate(catalog: &ShellCatalog) -> Result<(), String> {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(format!(
            "catalog schema mismatch: expected {CATALOG_SCHEMA_VERSION} found {}",
            catalog.schema_version
        ));
    }
    if catalog.boot.lines.is_empty() {
        return Err("boot.lines must not be empty".to_string());
    }
    if catalog.boot.progress_interval_ms == 0 || catalog.boot.progress_step_max <= 0.0 {
        return Err(
            "boot.progress_interval_ms and boot.progress_step_max must be positive".to_string(),
        );
    }
    if catalog.window.default_width <= 0 || catalog.shell.taskbar_height < 0 {
        return Err("window.default_width and shell.taskbar_height must be positive".to_string());
    }

    let mut seen = BTreeSet::new();
    for app in &catalog.apps {
        if app.id.trim().is_empty() || app.title.trim().is_empty() {
            return Err(format!("app `{}` needs a non-empty id and title", app.id));
        }
        if !seen.insert(app.id.as_str()) {
            return Err(format!("duplicate app id `{}`", app.id));
        }
        if app.body.is_none() && app.description.is_none() {
            return Err(format!("app `{}` needs a description or a body", app.id));
        }
        for link in &app.links {
            if !(link.url.starts_with("https://") || link.url.starts_with("http://")) {
                return Err(format!("app `{}` link `{}` is not http(s)", app.id, link.url));
            }
        }
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("content").join("catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: ShellCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&catalog) {
        panic!("invalid catalog {}: {err}", path.display());
    }

    let json = serde_json::to_string_pretty(&catalog).expect("serialize shell catalog");
    let generated = format!(
        "/// Build-time generated shell catalog JSON.\n\
pub const SHELL_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
