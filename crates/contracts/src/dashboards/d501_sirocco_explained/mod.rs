//! D501: SIROCCO clinical trial explained.
//!
//! Five tabs walking a non-specialist through the SIROCCO Phase 3 trial
//! (NCT01928771): headline numbers, screen failures, costs, the impact of AI
//! pre-screening and a glossary.

pub mod data;

use crate::shared::tabs::{TabDescriptor, TabView};

pub const TITLE: &str = "SIROCCO Clinical Trial Analysis";

pub const TABS: &[TabDescriptor] = &[
    TabDescriptor::new("overview", "📊 Overview"),
    TabDescriptor::new("screening", "🔍 Screen Failures"),
    TabDescriptor::new("costs", "💰 Costs"),
    TabDescriptor::new("ai", "🤖 AI Impact"),
    TabDescriptor::new("glossary", "📚 Glossary"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiroccoTab {
    Overview,
    Screening,
    Costs,
    AiImpact,
    Glossary,
}

impl TabView for SiroccoTab {
    const TABS: &'static [TabDescriptor] = TABS;
    const DEFAULT: Self = SiroccoTab::Overview;

    fn id(self) -> &'static str {
        match self {
            SiroccoTab::Overview => "overview",
            SiroccoTab::Screening => "screening",
            SiroccoTab::Costs => "costs",
            SiroccoTab::AiImpact => "ai",
            SiroccoTab::Glossary => "glossary",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        match id {
            "overview" => Some(SiroccoTab::Overview),
            "screening" => Some(SiroccoTab::Screening),
            "costs" => Some(SiroccoTab::Costs),
            "ai" => Some(SiroccoTab::AiImpact),
            "glossary" => Some(SiroccoTab::Glossary),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tabs::TabController;
    use std::collections::HashSet;

    #[test]
    fn test_every_declared_tab_resolves_to_itself() {
        for tab in TABS {
            let view = SiroccoTab::resolve(tab.id);
            assert_eq!(view.id(), tab.id);
            assert_eq!(view.label(), tab.label);
        }
    }

    #[test]
    fn test_tab_ids_are_unique() {
        let ids: HashSet<_> = TABS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TABS.len());
    }

    #[test]
    fn test_unknown_id_resolves_like_default() {
        assert_eq!(SiroccoTab::resolve("whyNo"), SiroccoTab::resolve("overview"));
        assert_eq!(SiroccoTab::resolve("GLOSSARY"), SiroccoTab::Overview);
    }

    #[test]
    fn test_glossary_scenario() {
        let mut ctl = TabController::new::<SiroccoTab>();
        assert_eq!(ctl.view::<SiroccoTab>(), SiroccoTab::Overview);

        assert!(ctl.select("glossary"));
        assert_eq!(ctl.current(), "glossary");
        assert_eq!(ctl.view::<SiroccoTab>(), SiroccoTab::Glossary);
        assert_eq!(data::GLOSSARY.len(), 8);

        assert!(!ctl.select("glossary"));
        assert_eq!(ctl.current(), "glossary");
    }
}
