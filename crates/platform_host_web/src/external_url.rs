//! External URL host-service adapter for browser contexts.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter that opens links in a new tab.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_in_new_tab(url) })
    }
}

fn validate_external_url(url: &str) -> Result<(), String> {
    let trimmed = url.trim();
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(())
    } else {
        Err(format!("refusing to open non-http url `{url}`"))
    }
}

#[cfg(target_arch = "wasm32")]
fn open_in_new_tab(url: &str) -> Result<(), String> {
    validate_external_url(url)?;
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    match window.open_with_url_and_target(url.trim(), "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("popup blocked".to_string()),
        Err(err) => Err(format!("window.open failed: {err:?}")),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_new_tab(url: &str) -> Result<(), String> {
    validate_external_url(url)?;
    Err("external urls are unsupported on this target".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_schemes() {
        assert!(validate_external_url("javascript:alert(1)").is_err());
        assert!(validate_external_url("https://docs.gensyn.ai").is_ok());
        assert!(validate_external_url("http://gensyn-word.vercel.app").is_ok());
    }

    #[test]
    fn native_target_reports_unsupported() {
        let result =
            futures::executor::block_on(WebExternalUrlService.open_url("https://blog.gensyn.ai/"));
        assert!(result.is_err());
    }
}
