//! Built-in shell catalog generated at build time from `content/catalog.toml`.

use std::sync::OnceLock;

use leptos::logging;
use serde::Deserialize;

use crate::{
    apps::{AppDescriptor, ContentRegistry, RegistryError},
    boot::BootConfig,
    model::{DesktopState, ShellSettings, WindowLayout},
};

include!(concat!(env!("OUT_DIR"), "/shell_catalog_generated.rs"));

/// Shell configuration plus the content registry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellCatalog {
    pub settings: ShellSettings,
    pub layout: WindowLayout,
    pub boot: BootConfig,
    pub registry: ContentRegistry,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    shell: ShellSettings,
    window: WindowLayout,
    boot: BootConfig,
    apps: Vec<AppDescriptor>,
}

impl ShellCatalog {
    /// Decodes a catalog from its JSON form.
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let raw: RawCatalog = serde_json::from_str(raw)?;
        raw.boot.validate().map_err(RegistryError::InvalidBoot)?;
        Ok(Self {
            settings: raw.shell,
            layout: raw.window,
            boot: raw.boot,
            registry: ContentRegistry::new(raw.apps)?,
        })
    }

    /// Fresh desktop state configured from this catalog.
    pub fn initial_state(&self) -> DesktopState {
        DesktopState::new(self.settings, self.layout)
    }
}

/// Returns the catalog embedded at build time.
///
/// A catalog that fails to decode yields an empty registry with default settings.
pub fn builtin_catalog() -> &'static ShellCatalog {
    static CATALOG: OnceLock<ShellCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| match ShellCatalog::from_json(SHELL_CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("built-in shell catalog rejected: {err}");
            ShellCatalog::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::AppId;

    #[test]
    fn builtin_catalog_decodes_every_app() {
        let catalog = ShellCatalog::from_json(SHELL_CATALOG_JSON).expect("catalog decodes");
        assert_eq!(catalog.registry.len(), 13);
        assert_eq!(catalog.layout, WindowLayout::default());
        assert_eq!(catalog.settings, ShellSettings::default());
        assert_eq!(catalog.boot, BootConfig::default());
    }

    #[test]
    fn builtin_catalog_keeps_display_titles() {
        let registry = &builtin_catalog().registry;
        let title = |id: &str| registry.get(&AppId::from(id)).map(|app| app.title.clone());
        assert_eq!(title("blazy").as_deref(), Some("Blazy Agent"));
        assert_eq!(title("recycle").as_deref(), Some("Recycle Bin"));
        assert_eq!(title("sapo").as_deref(), Some("Sapo Protocol"));
        assert!(registry
            .get(&AppId::from("verde"))
            .map(|app| app.links.len() == 3)
            .unwrap_or(false));
    }

    #[test]
    fn stalled_boot_progress_is_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(SHELL_CATALOG_JSON).expect("catalog json");
        value["boot"]["progress_step_max"] = serde_json::json!(0.0);

        let err = ShellCatalog::from_json(&value.to_string()).expect_err("zero step rejected");
        assert!(matches!(err, RegistryError::InvalidBoot(_)));
    }

    #[test]
    fn recycle_bin_stays_off_the_start_menu() {
        let registry = &builtin_catalog().registry;
        assert!(registry
            .start_menu_apps()
            .iter()
            .all(|app| app.id.as_str() != "recycle"));
        assert_eq!(registry.desktop_icon_apps().len(), 13);
    }
}
