//! Colour palette and per-dashboard theme context.
//!
//! Datasets only carry a [`Tone`]; this module maps tones to concrete colours.
//! The SIROCCO dashboard uses a corporate blue palette, the retention
//! dashboard a brighter named palette. `ThemeProvider` publishes the palette
//! of the mounted dashboard and tags its root element with `data-dashboard`
//! for the stylesheet.

use contracts::dashboards::DashboardKind;
use contracts::shared::display::Tone;
use leptos::prelude::*;

pub const PRIMARY: &str = "#1F4E79";
pub const SECONDARY: &str = "#5B9BD5";
pub const SUCCESS: &str = "#70AD47";
pub const WARNING: &str = "#FFC000";
pub const DANGER: &str = "#C65911";
pub const INFO: &str = "#9DC3E6";
pub const LIGHT_BG: &str = "#F8F9FA";
pub const ACCENT: &str = "#ED7D31";

pub const RED: &str = "#EF4444";
pub const ORANGE: &str = "#F97316";
pub const AMBER: &str = "#F59E0B";
pub const YELLOW: &str = "#EAB308";
pub const GREEN: &str = "#22C55E";
pub const EMERALD: &str = "#059669";
pub const TEAL: &str = "#14B8A6";
pub const BLUE: &str = "#3B82F6";
pub const PURPLE: &str = "#A855F7";
pub const GRAY: &str = "#9CA3AF";

pub fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => PRIMARY,
        Tone::Secondary => SECONDARY,
        Tone::Success => SUCCESS,
        Tone::Warning => WARNING,
        Tone::Danger => DANGER,
        Tone::Info => INFO,
        Tone::Accent => ACCENT,
        Tone::Red => RED,
        Tone::Orange => ORANGE,
        Tone::Amber => AMBER,
        Tone::Yellow => YELLOW,
        Tone::Green => GREEN,
        Tone::Emerald => EMERALD,
        Tone::Teal => TEAL,
        Tone::Blue => BLUE,
        Tone::Purple => PURPLE,
        Tone::Gray => GRAY,
    }
}

/// `#RRGGBB` plus a two-digit hex alpha, e.g. `tint(INFO, "20")`.
pub fn tint(color: &str, alpha: &str) -> String {
    format!("{}{}", color, alpha)
}

/// Palette of one mounted dashboard.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThemeContext {
    pub kind: DashboardKind,
}

impl ThemeContext {
    /// Background of the active tab button.
    pub fn accent(&self) -> &'static str {
        match self.kind {
            DashboardKind::Sirocco => PRIMARY,
            DashboardKind::Retention => "#2563EB",
        }
    }

    pub fn page_background(&self) -> &'static str {
        match self.kind {
            DashboardKind::Sirocco => LIGHT_BG,
            DashboardKind::Retention => "#F3F4F6",
        }
    }

    /// `data-dashboard` value of the root element, matched by the stylesheet.
    pub fn marker(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Colour of headings and table totals.
    pub fn heading(&self) -> &'static str {
        match self.kind {
            DashboardKind::Sirocco => PRIMARY,
            DashboardKind::Retention => "#1E293B",
        }
    }
}

/// Provides the theme of `kind` to children components.
#[component]
pub fn ThemeProvider(kind: DashboardKind, children: Children) -> impl IntoView {
    let context = ThemeContext { kind };
    provide_context(context);

    view! {
        <div
            class="dashboard-root"
            data-dashboard=context.marker()
            style=format!("background-color: {};", context.page_background())
        >
            {children()}
        </div>
    }
}

/// Theme of the surrounding dashboard; the SIROCCO palette outside a provider.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or(ThemeContext {
        kind: DashboardKind::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_color() {
        assert_eq!(tone_color(Tone::Primary), "#1F4E79");
        assert_eq!(tone_color(Tone::Danger), "#C65911");
        assert_eq!(tone_color(Tone::Emerald), EMERALD);
    }

    #[test]
    fn test_tint_appends_alpha() {
        assert_eq!(tint(INFO, "20"), "#9DC3E620");
    }

    #[test]
    fn test_accent_differs_per_dashboard() {
        let sirocco = ThemeContext {
            kind: DashboardKind::Sirocco,
        };
        let retention = ThemeContext {
            kind: DashboardKind::Retention,
        };
        assert_eq!(sirocco.accent(), PRIMARY);
        assert_ne!(sirocco.accent(), retention.accent());
    }

    #[test]
    fn test_marker_matches_stylesheet_selectors() {
        let css = include_str!("../../../static/dashboards.css");
        let retention = ThemeContext {
            kind: DashboardKind::Retention,
        };
        let selector = format!(".dashboard-root[data-dashboard=\"{}\"]", retention.marker());
        assert!(css.contains(&selector));
        assert!(!css.contains("body[data-dashboard"));
    }
}
