//! D502: Clinical trial patient behaviour & retention.
//!
//! Six tabs covering why patients decline or drop out of trials, what keeps
//! them enrolled, who sells solutions, and the FDA diversity requirements.
//! Figures that also appear in D501 are repeated here, not imported.

pub mod data;

use crate::shared::tabs::{TabDescriptor, TabView};

pub const TITLE: &str = "Clinical Trial Patient Behavior & Retention Dashboard";

pub const TABS: &[TabDescriptor] = &[
    TabDescriptor::new("overview", "📊 Overview"),
    TabDescriptor::new("sirocco", "🔬 SIROCCO Trial"),
    TabDescriptor::new("whyNo", "❌ Why Patients Say No"),
    TabDescriptor::new("retention", "📈 Retention & Incentives"),
    TabDescriptor::new("competitors", "🏢 Competitor Solutions"),
    TabDescriptor::new("diversity", "🌍 Diversity & FDA"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetentionTab {
    Overview,
    Sirocco,
    WhyNo,
    Retention,
    Competitors,
    Diversity,
}

impl TabView for RetentionTab {
    const TABS: &'static [TabDescriptor] = TABS;
    const DEFAULT: Self = RetentionTab::Overview;

    fn id(self) -> &'static str {
        match self {
            RetentionTab::Overview => "overview",
            RetentionTab::Sirocco => "sirocco",
            RetentionTab::WhyNo => "whyNo",
            RetentionTab::Retention => "retention",
            RetentionTab::Competitors => "competitors",
            RetentionTab::Diversity => "diversity",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        match id {
            "overview" => Some(RetentionTab::Overview),
            "sirocco" => Some(RetentionTab::Sirocco),
            "whyNo" => Some(RetentionTab::WhyNo),
            "retention" => Some(RetentionTab::Retention),
            "competitors" => Some(RetentionTab::Competitors),
            "diversity" => Some(RetentionTab::Diversity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tabs::TabController;

    #[test]
    fn test_every_declared_tab_resolves_to_itself() {
        for tab in TABS {
            assert_eq!(RetentionTab::resolve(tab.id).id(), tab.id);
        }
        assert_eq!(TABS.len(), 6);
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        assert_eq!(RetentionTab::resolve("whyNo"), RetentionTab::WhyNo);
        assert_eq!(RetentionTab::resolve("whyno"), RetentionTab::Overview);
        assert_eq!(RetentionTab::resolve("glossary"), RetentionTab::DEFAULT);
    }

    #[test]
    fn test_select_every_tab() {
        let mut ctl = TabController::new::<RetentionTab>();
        for tab in TABS {
            ctl.select(tab.id);
            assert_eq!(ctl.current(), tab.id);
            ctl.select(tab.id);
            assert_eq!(ctl.current(), tab.id);
            assert_eq!(ctl.view::<RetentionTab>().id(), tab.id);
        }
    }
}
