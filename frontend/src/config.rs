use log::warn;
use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const COALESCE_WINDOW_MS: u32 = 100;
pub const TRANSITION_LOCK_MS: u32 = 1000;

pub const DEFAULT_APP_ID: &str = "default-app-id";

/// Timing of the full-page scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    pub section_count: usize,
    pub coalesce_window_ms: u32,
    pub transition_lock_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            section_count: 1,
            coalesce_window_ms: COALESCE_WINDOW_MS,
            transition_lock_ms: TRANSITION_LOCK_MS,
        }
    }
}

impl ScrollConfig {
    pub fn for_sections(section_count: usize) -> Self {
        Self {
            section_count,
            ..Self::default()
        }
    }
}

/// Identity provider settings injected by the hosting page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub auth_domain: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

impl ProviderConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub app_id: String,
    pub provider: Option<ProviderConfig>,
    pub initial_auth_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.to_string(),
            provider: None,
            initial_auth_token: None,
        }
    }
}

impl AppConfig {
    /// Reads `__app_id`, `__firebase_config` and `__initial_auth_token` from
    /// the window. Anything missing or unreadable falls back to the default.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let global = JsValue::from(window);

        let app_id = read_global(&global, "__app_id")
            .and_then(|value| value.as_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_ID.to_string());

        let provider = read_global(&global, "__firebase_config").and_then(parse_provider);

        let initial_auth_token = read_global(&global, "__initial_auth_token")
            .and_then(|value| value.as_string())
            .filter(|token| !token.is_empty());

        Self {
            app_id,
            provider,
            initial_auth_token,
        }
    }

    /// A provider counts as configured once it names a project.
    pub fn provider_configured(&self) -> bool {
        self.provider
            .as_ref()
            .and_then(|provider| provider.project_id.as_deref())
            .map_or(false, |project| !project.is_empty())
    }
}

fn read_global(global: &JsValue, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(global, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

// The host injects either a JSON string or a plain object.
fn parse_provider(value: JsValue) -> Option<ProviderConfig> {
    let parsed = match value.as_string() {
        Some(raw) => ProviderConfig::from_json(&raw).map_err(|err| err.to_string()),
        None => serde_wasm_bindgen::from_value(value).map_err(|err| err.to_string()),
    };
    match parsed {
        Ok(provider) => Some(provider),
        Err(err) => {
            warn!("ignoring unreadable __firebase_config: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_defaults() {
        let config = ScrollConfig::for_sections(4);
        assert_eq!(config.section_count, 4);
        assert_eq!(config.coalesce_window_ms, 100);
        assert_eq!(config.transition_lock_ms, 1000);
    }

    #[test]
    fn scroll_config_fills_missing_fields() {
        let config: ScrollConfig = serde_json::from_str(r#"{"sectionCount": 6, "transitionLockMs": 600}"#).unwrap();
        assert_eq!(
            config,
            ScrollConfig {
                section_count: 6,
                coalesce_window_ms: COALESCE_WINDOW_MS,
                transition_lock_ms: 600,
            }
        );
    }

    #[test]
    fn provider_config_from_json() {
        let provider = ProviderConfig::from_json(
            r#"{"apiKey": "k", "authDomain": "parkchoi.example", "projectId": "parkchoi-web", "appId": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(provider.api_key.as_deref(), Some("k"));
        assert_eq!(provider.project_id.as_deref(), Some("parkchoi-web"));

        assert_eq!(ProviderConfig::from_json("{}").unwrap(), ProviderConfig::default());
        assert!(ProviderConfig::from_json("not json").is_err());
    }

    #[test]
    fn provider_needs_a_project() {
        let mut config = AppConfig::default();
        assert_eq!(config.app_id, DEFAULT_APP_ID);
        assert!(!config.provider_configured());

        config.provider = Some(ProviderConfig {
            project_id: Some(String::new()),
            ..ProviderConfig::default()
        });
        assert!(!config.provider_configured());

        config.provider = Some(ProviderConfig {
            project_id: Some("parkchoi-web".to_string()),
            ..ProviderConfig::default()
        });
        assert!(config.provider_configured());
    }
}
