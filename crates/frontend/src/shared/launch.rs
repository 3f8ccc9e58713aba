//! Launch parameters read from the page query string.
//!
//! `?app=retention&tab=whyNo` selects the dashboard and its first tab. The
//! active tab is written back with `history.replaceState` so a reload keeps
//! the selection.

use contracts::dashboards::DashboardKind;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
}

impl LaunchParams {
    /// Parses a query string with or without the leading `?`.
    ///
    /// A query that does not fit the expected shape yields the defaults.
    pub fn parse(query: &str) -> Self {
        match serde_qs::from_str(query.trim_start_matches('?')) {
            Ok(params) => params,
            Err(err) => {
                log::warn!("ignoring malformed query '{}': {}", query, err);
                Self::default()
            }
        }
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::parse(&search)
    }

    /// Requested dashboard; unknown names fall back to the default one.
    pub fn dashboard(&self) -> DashboardKind {
        match self.app.as_deref() {
            None => DashboardKind::default(),
            Some(name) => name.parse().unwrap_or_else(|err| {
                log::warn!("{}, using {}", err, DashboardKind::default());
                DashboardKind::default()
            }),
        }
    }

    pub fn for_tab(kind: DashboardKind, tab: &str) -> Self {
        Self {
            app: Some(kind.as_str().to_string()),
            tab: Some(tab.to_string()),
        }
    }

    /// `?app=..&tab=..` form of these parameters.
    pub fn to_search(&self) -> Result<String, serde_qs::Error> {
        Ok(format!("?{}", serde_qs::to_string(self)?))
    }
}

/// Replaces the page URL with one that names `kind` and `tab`.
///
/// Does nothing when the URL already matches.
pub fn sync_tab_to_url(kind: DashboardKind, tab: &str) -> Result<(), JsValue> {
    let new_search = LaunchParams::for_tab(kind, tab)
        .to_search()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let window = window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let current_search = window.location().search()?;
    if current_search == new_search {
        return Ok(());
    }

    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&new_search))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_and_tab() {
        let params = LaunchParams::parse("?app=retention&tab=whyNo");
        assert_eq!(params.app.as_deref(), Some("retention"));
        assert_eq!(params.tab.as_deref(), Some("whyNo"));
        assert_eq!(params.dashboard(), DashboardKind::Retention);
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let params = LaunchParams::parse("");
        assert_eq!(params, LaunchParams::default());
        assert_eq!(params.dashboard(), DashboardKind::Sirocco);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let params = LaunchParams::parse("tab=costs&utm_source=mail");
        assert_eq!(params.tab.as_deref(), Some("costs"));
        assert_eq!(params.app, None);
    }

    #[test]
    fn test_unknown_dashboard_falls_back() {
        let params = LaunchParams::parse("app=pivot");
        assert_eq!(params.dashboard(), DashboardKind::Sirocco);
    }

    #[test]
    fn test_nested_value_never_selects_dashboard() {
        let params = LaunchParams::parse("app[x]=retention");
        assert_eq!(params.app, None);
        assert_eq!(params.dashboard(), DashboardKind::Sirocco);
    }

    #[test]
    fn test_search_string() {
        let search = LaunchParams::for_tab(DashboardKind::Retention, "diversity")
            .to_search()
            .unwrap();
        assert_eq!(search, "?app=retention&tab=diversity");
        assert_eq!(
            LaunchParams::parse(&search),
            LaunchParams::for_tab(DashboardKind::Retention, "diversity")
        );
    }
}
