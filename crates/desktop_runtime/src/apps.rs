//! Content registry: static per-app metadata and window body markup.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::AppId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub id: AppId,
    pub title: String,
    /// Font Awesome icon class, for example `fa-robot`.
    pub icon: String,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub extended_info: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub links: Vec<AppLink>,
    /// Plain body text used instead of the community-app layout.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default = "default_true")]
    pub show_on_desktop: bool,
    #[serde(default = "default_true")]
    pub show_in_start_menu: bool,
}

fn default_true() -> bool {
    true
}

impl AppDescriptor {
    /// Minimal descriptor with a title and plain body, mostly useful for tests.
    pub fn simple(id: &str, title: &str, icon: &str) -> Self {
        Self {
            id: AppId::from(id),
            title: title.to_string(),
            icon: icon.to_string(),
            heading: None,
            description: None,
            highlights: Vec::new(),
            extended_info: None,
            author: None,
            links: Vec::new(),
            body: Some(String::new()),
            show_on_desktop: true,
            show_in_start_menu: true,
        }
    }

    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(&self.title)
    }

    /// Renders the window body as HTML. All catalog text is escaped.
    pub fn body_markup(&self) -> String {
        if let Some(body) = &self.body {
            return format!(r#"<div class="window-plain-body">{}</div>"#, escape_html(body));
        }

        let mut html = String::new();
        html.push_str(&format!(
            r#"<div class="window-content-header"><i class="fa-solid {}"></i><div><h2>{}</h2><span class="window-content-kind">Community App</span></div></div>"#,
            escape_html(&self.icon),
            escape_html(self.heading())
        ));

        html.push_str(r#"<div class="window-content-summary">"#);
        if let Some(description) = &self.description {
            html.push_str(&format!("<p>{}</p>", escape_html(description)));
        }
        if !self.highlights.is_empty() || self.extended_info.is_some() {
            html.push_str(r#"<div class="window-content-extended">"#);
            if !self.highlights.is_empty() {
                html.push_str("<ul>");
                for item in &self.highlights {
                    html.push_str(&format!("<li>{}</li>", escape_html(item)));
                }
                html.push_str("</ul>");
            }
            if let Some(info) = &self.extended_info {
                html.push_str(&format!("<p>{}</p>", escape_html(info)));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");

        if let Some(author) = &self.author {
            html.push_str(&format!(
                r#"<div class="author-box"><strong><i class="fa-solid fa-user-pen"></i> Built by:</strong> {}</div>"#,
                escape_html(author)
            ));
        }

        html.push_str(r#"<fieldset class="link-box"><legend>External Access</legend><ul class="link-list">"#);
        for link in &self.links {
            html.push_str(&format!(
                r#"<li><a href="{url}" target="_blank" rel="noopener" data-external-url="{url}"><i class="fa-solid fa-external-link-alt"></i> {text}</a></li>"#,
                url = escape_html(&link.url),
                text = escape_html(&link.text)
            ));
        }
        html.push_str("</ul></fieldset>");
        html
    }
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("catalog decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("duplicate app id `{0}`")]
    DuplicateApp(AppId),
    #[error("invalid boot config: {0}")]
    InvalidBoot(&'static str),
}

/// Read-only mapping from app id to [`AppDescriptor`], in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentRegistry {
    apps: Vec<AppDescriptor>,
}

impl ContentRegistry {
    pub fn new(apps: Vec<AppDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for app in &apps {
            if !seen.insert(app.id.clone()) {
                return Err(RegistryError::DuplicateApp(app.id.clone()));
            }
        }
        Ok(Self { apps })
    }

    /// Decodes a JSON array of descriptors.
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        Self::new(serde_json::from_str(raw)?)
    }

    pub fn get(&self, app_id: &AppId) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.id == *app_id)
    }

    pub fn contains(&self, app_id: &AppId) -> bool {
        self.get(app_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter()
    }

    pub fn desktop_icon_apps(&self) -> Vec<AppDescriptor> {
        self.apps
            .iter()
            .filter(|app| app.show_on_desktop)
            .cloned()
            .collect()
    }

    pub fn start_menu_apps(&self) -> Vec<AppDescriptor> {
        self.apps
            .iter()
            .filter(|app| app.show_in_start_menu)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn community_app() -> AppDescriptor {
        AppDescriptor {
            id: AppId::from("market"),
            title: "Gensyn Market".to_string(),
            icon: "fa-chart-line".to_string(),
            heading: None,
            description: Some("Bet on <Topics> & fun.".to_string()),
            highlights: vec!["One".to_string()],
            extended_info: Some("More".to_string()),
            author: Some("Tempest".to_string()),
            links: vec![AppLink {
                text: "Enter Market".to_string(),
                url: "http://gensynmarket.vercel.app".to_string(),
            }],
            body: None,
            show_on_desktop: true,
            show_in_start_menu: true,
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ContentRegistry::new(vec![
            AppDescriptor::simple("judge", "Judge", "fa-gavel"),
            AppDescriptor::simple("judge", "Judge again", "fa-gavel"),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateApp(id) if id.as_str() == "judge"));
    }

    #[test]
    fn json_decoding_applies_visibility_defaults() {
        let registry = ContentRegistry::from_json(
            r#"[{"id":"recycle","title":"Recycle Bin","icon":"fa-trash-can","body":"The folder is empty.","show_in_start_menu":false}]"#,
        )
        .expect("decode");
        let recycle = registry.get(&AppId::from("recycle")).expect("recycle");
        assert!(recycle.show_on_desktop);
        assert!(!recycle.show_in_start_menu);
        assert_eq!(registry.start_menu_apps().len(), 0);
        assert_eq!(registry.desktop_icon_apps().len(), 1);
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            ContentRegistry::from_json("{not json"),
            Err(RegistryError::Decode(_))
        ));
    }

    #[test]
    fn heading_falls_back_to_title() {
        let app = community_app();
        assert_eq!(app.heading(), "Gensyn Market");
    }

    #[test]
    fn community_markup_escapes_text_and_lists_links() {
        let markup = community_app().body_markup();
        assert!(markup.contains("Bet on &lt;Topics&gt; &amp; fun."));
        assert!(markup.contains("Community App"));
        assert!(markup.contains("Built by:</strong> Tempest"));
        assert!(markup.contains(r#"data-external-url="http://gensynmarket.vercel.app""#));
        assert!(markup.contains("<li>One</li>"));
    }

    #[test]
    fn plain_body_skips_community_layout() {
        let mut app = AppDescriptor::simple("recycle", "Recycle Bin", "fa-trash-can");
        app.body = Some("The folder is empty.".to_string());
        assert_eq!(
            app.body_markup(),
            r#"<div class="window-plain-body">The folder is empty.</div>"#
        );
    }
}
