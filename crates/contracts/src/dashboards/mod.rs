pub mod d501_sirocco_explained;
pub mod d502_trial_retention;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which of the two dashboards a host page mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardKind {
    /// D501: SIROCCO trial explained for non-specialists.
    #[default]
    Sirocco,
    /// D502: patient behaviour and retention overview.
    Retention,
}

impl DashboardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardKind::Sirocco => "sirocco",
            DashboardKind::Retention => "retention",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardKind::Sirocco => d501_sirocco_explained::TITLE,
            DashboardKind::Retention => d502_trial_retention::TITLE,
        }
    }

    pub fn all() -> [DashboardKind; 2] {
        [DashboardKind::Sirocco, DashboardKind::Retention]
    }
}

impl fmt::Display for DashboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dashboard '{0}', expected one of: sirocco, retention")]
pub struct UnknownDashboard(pub String);

impl FromStr for DashboardKind {
    type Err = UnknownDashboard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardKind::all()
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDashboard(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("sirocco".parse::<DashboardKind>(), Ok(DashboardKind::Sirocco));
        assert_eq!(" Retention ".parse::<DashboardKind>(), Ok(DashboardKind::Retention));
        let err = "funnel".parse::<DashboardKind>().unwrap_err();
        assert_eq!(err, UnknownDashboard("funnel".to_string()));
        assert!(err.to_string().contains("funnel"));
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for kind in DashboardKind::all() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: DashboardKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
