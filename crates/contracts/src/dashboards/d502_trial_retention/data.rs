//! Static dataset of the retention dashboard.

use crate::shared::display::{AiFit, Tone};

// ---------------------------------------------------------------------------
// Record shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricTile {
    pub value: &'static str,
    pub label: &'static str,
    pub source: &'static str,
    pub tone: Tone,
}

/// Titled bullet list with a coloured left border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pillar {
    pub title: &'static str,
    pub tone: Tone,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opportunity {
    pub tag: &'static str,
    pub tone: Tone,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunnelStep {
    pub stage: &'static str,
    pub patients: i64,
    pub share: &'static str,
    pub tone: Tone,
    /// Width of the step relative to the widest one, in percent.
    pub width_pct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeTile {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

/// Label / value / note row of a small key-value table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotedValue {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// One bar of a percentage bar list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBar {
    pub label: &'static str,
    pub pct: f64,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkFigure {
    pub value: &'static str,
    pub label: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedReason {
    pub rank: u8,
    pub reason: &'static str,
    pub pct: &'static str,
    pub desc: &'static str,
    pub ai: AiFit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportEffect {
    High,
    VeryHigh,
}

impl SupportEffect {
    pub fn label(self) -> &'static str {
        match self {
            SupportEffect::High => "HIGH",
            SupportEffect::VeryHigh => "VERY HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportMeasure {
    pub support: &'static str,
    pub effect: SupportEffect,
    pub note: &'static str,
}

/// Heading plus one line of detail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finding {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiCompetitor {
    pub name: &'static str,
    pub focus: &'static str,
    pub metrics: &'static str,
    pub highlight: &'static str,
    pub insight: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceCompetitor {
    pub name: &'static str,
    pub highlight: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationGap {
    Over,
    Under,
    Variable,
}

impl RepresentationGap {
    pub fn label(self) -> &'static str {
        match self {
            RepresentationGap::Over => "OVER",
            RepresentationGap::Under => "UNDER",
            RepresentationGap::Variable => "VARIABLE",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            RepresentationGap::Over => Tone::Yellow,
            RepresentationGap::Under => Tone::Red,
            RepresentationGap::Variable => Tone::Orange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Representation {
    pub population: &'static str,
    pub us: &'static str,
    pub trial: &'static str,
    pub gap: RepresentationGap,
}

// ---------------------------------------------------------------------------
// Page chrome
// ---------------------------------------------------------------------------

pub const SUBTITLE: &str =
    "Comprehensive analysis for Raga.ai strategic planning | Research compiled Dec 2025";
pub const SOURCES: &str = "Sources: Tufts CSDD, Applied Clinical Trials, PMC peer-reviewed studies, FDA guidance, ClinicalTrials.gov, Company materials";

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

pub const KEY_INSIGHT_TITLE: &str =
    "🎯 KEY INSIGHT: The Awareness Gap is Larger Than the Willingness Gap";
pub const KEY_INSIGHT: &str = "85% of patients are never aware clinical trials exist. When actually offered trials, 55% agree to participate. The challenge isn't convincing patients—it's reaching them.";

pub const CRITICAL_METRICS: &[MetricTile] = &[
    MetricTile {
        value: "80%",
        label: "Trials Fail Timelines",
        source: "Tufts CSDD",
        tone: Tone::Red,
    },
    MetricTile {
        value: "19.1%",
        label: "Average Dropout Rate",
        source: "Tufts CSDD 2019",
        tone: Tone::Orange,
    },
    MetricTile {
        value: "$19,533",
        label: "Cost to Replace Patient",
        source: "CenterWatch 2022",
        tone: Tone::Purple,
    },
    MetricTile {
        value: "55%",
        label: "Accept When Asked",
        source: "Meta-analysis",
        tone: Tone::Green,
    },
];

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "📉 Pre-Screening Failures",
        tone: Tone::Blue,
        items: &[
            "85% never know trials exist",
            "30-35% fear side effects",
            "70% live >2hrs from sites",
            "36.3% average screen failure",
        ],
    },
    Pillar {
        title: "🚪 Post-Enrollment Dropouts",
        tone: Tone::Amber,
        items: &[
            "42% cite participation burden",
            "47-72% disease progression (oncology)",
            "2x dropout if visits stressful",
            "25% increase since 2012",
        ],
    },
    Pillar {
        title: "✅ What Works",
        tone: Tone::Green,
        items: &[
            "AI pre-screening (87% accuracy)",
            "DCT reduces burden 80%",
            "Community sites improve diversity",
            "Predictive dropout models",
        ],
    },
];

pub const OPPORTUNITIES_TITLE: &str = "🚀 Strategic Opportunities for Raga.ai";

pub const OPPORTUNITIES: &[Opportunity] = &[
    Opportunity {
        tag: "HIGH IMPACT",
        tone: Tone::Green,
        text: "AI patient identification from EHR data addresses the #1 barrier (awareness). Deep 6 AI demonstrates 3x faster accrual.",
    },
    Opportunity {
        tag: "EMERGING GAP",
        tone: Tone::Yellow,
        text: "Predictive dropout analytics underdeployed. Ripple Science achieves 87.5% accuracy—few competitors offer this.",
    },
    Opportunity {
        tag: "REGULATORY TAILWIND",
        tone: Tone::Blue,
        text: "FDA FDORA requires Diversity Action Plans for Phase 3 trials starting 2025. Creates demand for diversity-focused solutions.",
    },
];

// ---------------------------------------------------------------------------
// SIROCCO case study
// ---------------------------------------------------------------------------

pub const SIROCCO_TITLE: &str = "SIROCCO Trial (NCT01928771) - Case Study";
pub const SIROCCO_SUMMARY: &str = "Phase 3 benralizumab for severe eosinophilic asthma | 374 sites | 17 countries | FDA approved Nov 2017";

pub const FUNNEL_STEPS: &[FunnelStep] = &[
    FunnelStep {
        stage: "Screened",
        patients: 2681,
        share: "100%",
        tone: Tone::Blue,
        width_pct: 100,
    },
    FunnelStep {
        stage: "Enrolled",
        patients: 1205,
        share: "45%",
        tone: Tone::Green,
        width_pct: 80,
    },
    FunnelStep {
        stage: "Completed",
        patients: 844,
        share: "70% of enrolled",
        tone: Tone::Emerald,
        width_pct: 60,
    },
];

pub const FUNNEL_LOSSES: &[OutcomeTile] = &[
    OutcomeTile {
        value: "1,476",
        label: "Screen Failures (55%)",
        tone: Tone::Red,
    },
    OutcomeTile {
        value: "361",
        label: "Dropouts (30%)",
        tone: Tone::Amber,
    },
];

pub const TRIAL_COSTS: &[NotedValue] = &[
    NotedValue {
        label: "Total Trial Cost",
        value: "$85M",
        note: "Estimated",
    },
    NotedValue {
        label: "Per-Patient Cost",
        value: "$70,500",
        note: "Enrolled",
    },
    NotedValue {
        label: "Screen Failure Cost",
        value: "$7,500/fail",
        note: "$10.9M total",
    },
    NotedValue {
        label: "Site Payment/Patient",
        value: "$25,000",
        note: "Industry avg",
    },
];

pub const DROPOUT_REASONS: &[RateBar] = &[
    RateBar {
        label: "Patient Decision",
        pct: 42.0,
        tone: Tone::Blue,
    },
    RateBar {
        label: "Other/Various",
        pct: 22.0,
        tone: Tone::Gray,
    },
    RateBar {
        label: "Protocol Deviation",
        pct: 15.0,
        tone: Tone::Amber,
    },
    RateBar {
        label: "Lost to Follow-Up",
        pct: 10.0,
        tone: Tone::Purple,
    },
    RateBar {
        label: "Physician Decision",
        pct: 8.0,
        tone: Tone::Teal,
    },
    RateBar {
        label: "Adverse Events",
        pct: 3.0,
        tone: Tone::Red,
    },
];

pub const PERFORMANCE_TITLE: &str = "✅ SIROCCO Performance vs Industry";

pub const PERFORMANCE: &[BenchmarkFigure] = &[
    BenchmarkFigure {
        value: "55%",
        label: "Screen Failure (vs 36% avg)",
        note: "Higher due to biomarker",
    },
    BenchmarkFigure {
        value: "30%",
        label: "Dropout Rate (vs 19% avg)",
        note: "Long duration trial",
    },
    BenchmarkFigure {
        value: "3%",
        label: "AE Dropout (vs 10-41% range)",
        note: "Excellent AE management",
    },
];

// ---------------------------------------------------------------------------
// Why patients say no
// ---------------------------------------------------------------------------

pub const DECLINE_TITLE: &str = "❌ Top 5 Reasons Patients Decline BEFORE Screening";

pub const DECLINE_REASONS: &[RankedReason] = &[
    RankedReason {
        rank: 1,
        reason: "Lack of Awareness",
        pct: "75-85%",
        desc: "Never knew trials existed; only 0.2% of physicians refer",
        ai: AiFit::Yes,
    },
    RankedReason {
        rank: 2,
        reason: "Fear of Side Effects",
        pct: "30-35%",
        desc: "Worry about unknown risks from \"experimental\" treatments",
        ai: AiFit::Partial,
    },
    RankedReason {
        rank: 3,
        reason: "Treatment Preference",
        pct: "24-30%",
        desc: "70% oncology patients prefer current treatment",
        ai: AiFit::Limited,
    },
    RankedReason {
        rank: 4,
        reason: "Randomization/Placebo Fear",
        pct: "14-24%",
        desc: "Fear of receiving placebo instead of active treatment",
        ai: AiFit::Partial,
    },
    RankedReason {
        rank: 5,
        reason: "Logistical Barriers",
        pct: "17-55%",
        desc: "70% live >2hrs from academic centers; can't take time off",
        ai: AiFit::Yes,
    },
];

pub const DROPOUT_TITLE: &str = "🚪 Top 5 Reasons Patients Drop Out AFTER Enrolling";

pub const DROPOUT_AFTER_ENROLLING: &[RankedReason] = &[
    RankedReason {
        rank: 1,
        reason: "Disease Progression",
        pct: "47-72%",
        desc: "Condition worsens despite treatment (oncology dominant)",
        ai: AiFit::Limited,
    },
    RankedReason {
        rank: 2,
        reason: "Participation Burden",
        pct: "~42%",
        desc: "2x dropout if visits stressful; life disruption",
        ai: AiFit::Yes,
    },
    RankedReason {
        rank: 3,
        reason: "Adverse Events",
        pct: "10-42%",
        desc: "Intolerable side effects; varies by therapeutic area",
        ai: AiFit::Partial,
    },
    RankedReason {
        rank: 4,
        reason: "Lost to Follow-Up",
        pct: "Up to 88%",
        desc: "Changed contact, moved, stopped responding",
        ai: AiFit::Yes,
    },
    RankedReason {
        rank: 5,
        reason: "Patient Decision",
        pct: "~42%",
        desc: "Withdrew consent for various personal reasons",
        ai: AiFit::Partial,
    },
];

pub const SCREEN_FAILURE_BY_AREA_TITLE: &str = "📊 Screen Failure Rates by Therapeutic Area";

pub const SCREEN_FAILURE_BY_AREA: &[RateBar] = &[
    RateBar {
        label: "Preclinical Alzheimer's",
        pct: 88.0,
        tone: Tone::Red,
    },
    RateBar {
        label: "Rare Diseases",
        pct: 81.0,
        tone: Tone::Red,
    },
    RateBar {
        label: "Oncology Phase I",
        pct: 78.0,
        tone: Tone::Red,
    },
    RateBar {
        label: "CNS/Neuroscience",
        pct: 57.0,
        tone: Tone::Red,
    },
    RateBar {
        label: "SIROCCO (Respiratory)",
        pct: 55.0,
        tone: Tone::Red,
    },
    RateBar {
        label: "Industry Average",
        pct: 36.0,
        tone: Tone::Red,
    },
];

// ---------------------------------------------------------------------------
// Retention & incentives
// ---------------------------------------------------------------------------

pub const WHAT_WORKS_TITLE: &str = "✅ Incentives & Support That Work";

pub const COMPENSATION: &[NotedValue] = &[
    NotedValue {
        label: "Phase I",
        value: "$3,070 median",
        note: "$150-$13,000",
    },
    NotedValue {
        label: "Phase II/III",
        value: "$1,000-$7,000",
        note: "Total",
    },
    NotedValue {
        label: "Per Visit",
        value: "$50-$300",
        note: "Higher for invasive",
    },
    NotedValue {
        label: "Hourly Rate",
        value: "$10-$20/hr",
        note: "FDA considers reasonable",
    },
];

pub const COMPENSATION_NOTE: &str =
    "Cochrane review: Only effective method among 38 trials. 2-13% retention improvement.";

pub const SUPPORT_MEASURES: &[SupportMeasure] = &[
    SupportMeasure {
        support: "Travel Reimbursement",
        effect: SupportEffect::High,
        note: "FDA permits; not undue influence",
    },
    SupportMeasure {
        support: "Telemedicine Visits",
        effect: SupportEffect::VeryHigh,
        note: "FDA 2024 DCT guidance",
    },
    SupportMeasure {
        support: "Home Visits",
        effect: SupportEffect::VeryHigh,
        note: "Mobile nurses for blood draws",
    },
    SupportMeasure {
        support: "Childcare Support",
        effect: SupportEffect::High,
        note: "2023 NIH policy allows",
    },
    SupportMeasure {
        support: "Flexible Scheduling",
        effect: SupportEffect::High,
        note: "Evening/weekend options",
    },
];

pub const WHAT_FAILS_TITLE: &str = "❌ What Doesn't Work";

pub const INEFFECTIVE_METHODS: &[Finding] = &[
    Finding {
        title: "Behavioral economics payment strategies",
        detail: "No improvement over constant payment in RCTs",
    },
    Finding {
        title: "Delayed payment until study end",
        detail: "Creates undue influence; regulatory risk",
    },
    Finding {
        title: "Payment alone without support",
        detail: "Cannot overcome trust, fear, or access barriers",
    },
    Finding {
        title: "Inconsistent compensation across sites",
        detail: "Undermines trust when participants compare",
    },
];

pub const DROPOUT_RATES_TITLE: &str = "📉 Dropout Rates by Phase & Therapeutic Area";

/// Bars are drawn at three times their rate so the short ones stay visible.
pub const DROPOUT_BAR_SCALE: f64 = 3.0;

pub const DROPOUT_BY_PHASE: &[RateBar] = &[
    RateBar {
        label: "Phase I",
        pct: 8.0,
        tone: Tone::Amber,
    },
    RateBar {
        label: "Phase II/III",
        pct: 19.0,
        tone: Tone::Amber,
    },
    RateBar {
        label: "Phase III",
        pct: 25.0,
        tone: Tone::Amber,
    },
];

pub const DROPOUT_BY_AREA: &[RateBar] = &[
    RateBar {
        label: "CNS/Neurology",
        pct: 26.0,
        tone: Tone::Purple,
    },
    RateBar {
        label: "Oncology",
        pct: 19.0,
        tone: Tone::Purple,
    },
    RateBar {
        label: "Cardiovascular",
        pct: 7.0,
        tone: Tone::Purple,
    },
];

// ---------------------------------------------------------------------------
// Competitors
// ---------------------------------------------------------------------------

pub const AI_COMPETITORS_TITLE: &str = "🤖 AI-First Competitor Solutions";

pub const AI_COMPETITORS: &[AiCompetitor] = &[
    AiCompetitor {
        name: "Inato",
        focus: "Community Site Marketplace + AI Pre-screening",
        metrics: "5,000+ sites | 50+ countries | 87% accuracy",
        highlight: "50-90% reduction in pre-screening time",
        insight: "Integration-free approach; \"long tail\" community focus",
    },
    AiCompetitor {
        name: "Deep 6 AI (Tempus)",
        focus: "EMR Mining with NLP/ML",
        metrics: "1,000+ facilities | 40M+ patients",
        highlight: "3x faster accrual; 15-20% more patients from unstructured data",
        insight: "EHR integration is moat but also limitation",
    },
    AiCompetitor {
        name: "Science37",
        focus: "Decentralized Trial Platform",
        metrics: "150+ mobile nurses | Full DCT stack",
        highlight: "15-21x faster enrollment; 28-30% better retention",
        insight: "Directly addresses travel burden (#1 dropout driver)",
    },
    AiCompetitor {
        name: "Medidata",
        focus: "Unified Platform + Acorn AI",
        metrics: "26% of trial starts | 72% of 2024 FDA approvals",
        highlight: "Predictive dropout: ROC-AUC ≥0.60",
        insight: "Market leader; deepest integration",
    },
    AiCompetitor {
        name: "Ripple Science",
        focus: "Behavioral Dropout Prediction",
        metrics: "Behavioral signal analysis",
        highlight: "87.5% dropout prediction accuracy",
        insight: "Best-in-class prediction; direct opportunity",
    },
];

pub const CRO_TITLE: &str = "🏢 Service-Based CRO Solutions";

pub const SERVICE_COMPETITORS: &[ServiceCompetitor] = &[
    ServiceCompetitor {
        name: "IQVIA",
        highlight: "59% retention increase",
        note: "IDC MarketScape Leader 2024",
    },
    ServiceCompetitor {
        name: "Syneos Health",
        highlight: "77% site burden reduction",
        note: "Behavioral science approach",
    },
    ServiceCompetitor {
        name: "Labcorp",
        highlight: "1,900 Patient Service Centers",
        note: "76% of 2024 FDA drugs",
    },
    ServiceCompetitor {
        name: "Parexel",
        highlight: "40% cost savings",
        note: "Patient Advisory Council",
    },
];

// ---------------------------------------------------------------------------
// Diversity & FDA
// ---------------------------------------------------------------------------

pub const FDORA_TITLE: &str = "⚠️ FDA FDORA Requirements (Effective 2025)";
pub const FDORA_TEXT: &str = "Diversity Action Plans (DAPs) now REQUIRED for Phase 3 and pivotal studies. Failure to submit = prohibited act under FDCA.";

pub const REPRESENTATION_TITLE: &str = "📊 Current Representation vs US Population";

pub const REPRESENTATION: &[Representation] = &[
    Representation {
        population: "White",
        us: "60-72%",
        trial: "75-81%",
        gap: RepresentationGap::Over,
    },
    Representation {
        population: "Black/African American",
        us: "12-13%",
        trial: "5-8%",
        gap: RepresentationGap::Under,
    },
    Representation {
        population: "Hispanic/Latino",
        us: "16-19%",
        trial: "6-11%",
        gap: RepresentationGap::Under,
    },
    Representation {
        population: "Asian",
        us: "6-7%",
        trial: "2-6%",
        gap: RepresentationGap::Variable,
    },
    Representation {
        population: "Women (CV trials)",
        us: "50%+",
        trial: "28.5%",
        gap: RepresentationGap::Under,
    },
];

pub const REPRESENTATION_NOTE: &str =
    "Only 6% of pivotal trials (2017-2023) achieve enrollment aligned with US demographics.";

pub const WILLINGNESS_TITLE: &str = "🎯 Key Insight: Willingness is Equal When Asked";
pub const WILLINGNESS: &str = "Research confirms willingness to participate is COMPARABLE across racial groups when individuals are asked. The strongest predictor of participation is receiving an invitation—not race or ethnicity.";

pub const SOLUTIONS_TITLE: &str = "✅ Effective Diversity Solutions";

pub const DIVERSITY_SOLUTIONS: &[Finding] = &[
    Finding {
        title: "Community Site Strategy (Inato)",
        detail: "94% of diverse sites have non-English speakers",
    },
    Finding {
        title: "Decentralized Trials",
        detail: "One rural COVID DCT: 62.5% Black, 37.5% female",
    },
    Finding {
        title: "Community Health Workers",
        detail: "Yale Cultural Ambassadors model",
    },
    Finding {
        title: "Mobile Research Units",
        detail: "Bring trials to patients vs requiring travel",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rankings_are_sequential() {
        for list in [DECLINE_REASONS, DROPOUT_AFTER_ENROLLING] {
            let ranks: Vec<u8> = list.iter().map(|r| r.rank).collect();
            assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_funnel_steps_narrow() {
        assert!(FUNNEL_STEPS
            .windows(2)
            .all(|w| w[0].patients > w[1].patients && w[0].width_pct > w[1].width_pct));
    }

    #[test]
    fn test_dropout_reasons_cover_everyone() {
        let total: f64 = DROPOUT_REASONS.iter().map(|r| r.pct).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_scaled_dropout_bars_fit_track() {
        for bar in DROPOUT_BY_PHASE.iter().chain(DROPOUT_BY_AREA) {
            assert!(bar.pct * DROPOUT_BAR_SCALE <= 100.0, "{}", bar.label);
        }
    }

    #[test]
    fn test_representation_gaps() {
        let under = REPRESENTATION
            .iter()
            .filter(|r| r.gap == RepresentationGap::Under)
            .count();
        assert_eq!(under, 3);
        assert_eq!(RepresentationGap::Variable.label(), "VARIABLE");
    }
}
