//! Static dataset of the SIROCCO dashboard.
//!
//! Every number here is a hand-checked literal from the trial publications
//! and industry reports listed in [`SOURCES`]. Totals are stored, not summed
//! at runtime; the tests below keep them consistent with the rows.

use crate::shared::display::{AiFit, TextRun, Tone};
use TextRun::{LineBreak as Br, Plain as P, Strong as S};

// ---------------------------------------------------------------------------
// Record shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunnelStage {
    pub name: &'static str,
    pub value: f64,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkComparison {
    pub metric: &'static str,
    pub sirocco: f64,
    pub industry: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFailure {
    /// Short label used on the chart axis.
    pub reason: &'static str,
    /// Full label used in the breakdown table.
    pub detail_reason: &'static str,
    pub patients: f64,
    pub pct: f64,
    pub cost: f64,
    pub explanation: &'static str,
    pub ai: AiFit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostCategory {
    pub category: &'static str,
    pub per_patient: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostDetail {
    pub category: &'static str,
    pub amount: &'static str,
    pub icon: &'static str,
    pub detail: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiComparison {
    pub metric: &'static str,
    pub manual: f64,
    pub ai_assisted: f64,
    pub unit: &'static str,
}

/// Content of one `InfoCard`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMetric {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub explanation: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedSaving {
    pub label: &'static str,
    pub value: &'static str,
    pub calc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: &'static str,
    pub bullets: &'static [&'static str],
    pub example: &'static str,
}

/// Title and body of an `ExplanationBox`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explainer {
    pub title: &'static str,
    pub tone: Tone,
    pub body: &'static [TextRun],
}

/// Title and lead paragraph of a `SectionHeader`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub explanation: &'static str,
}

// ---------------------------------------------------------------------------
// Page chrome
// ---------------------------------------------------------------------------

pub const INTRO: &str = "A comprehensive analysis of the SIROCCO Phase 3 trial (NCT01928771) that led to FDA approval of benralizumab (Fasenra) for severe asthma. This dashboard explores recruitment challenges, costs, and how AI could transform clinical trial operations.";

pub const NEWCOMER_HINT_TITLE: &str = "New to Clinical Trials?";
pub const NEWCOMER_HINT: &str = "Start with the \"Glossary\" tab. Each metric includes plain-English explanations to help you understand the industry context.";

pub const SOURCES: &str = "Bleecker et al., Lancet 2016 | Callies et al., Commun Med 2025 | ClinicalTrials.gov | FDA.gov | Tufts CSDD | Industry Reports";
pub const FOOTER_NOTE: &str =
    "Analysis prepared for Raga.ai strategic research | All statistics verified against primary sources";

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

pub const WHAT_IS_SIROCCO: Explainer = Explainer {
    title: "What is SIROCCO?",
    tone: Tone::Info,
    body: &[
        P("SIROCCO was a Phase 3 clinical trial testing "),
        S("benralizumab"),
        P(" (now sold as "),
        S("Fasenra"),
        P(") for patients with severe asthma caused by high eosinophil levels (a type of white blood cell). The trial ran from 2013-2015 across 374 sites in 17 countries, ultimately leading to FDA approval in November 2017. We're analyzing it because its 55% screen failure rate (vs. 36% industry average) illustrates both the challenges and AI opportunities in clinical trial recruitment."),
    ],
};

pub const KEY_METRICS_SECTION: Section = Section {
    title: "Key Metrics at a Glance",
    explanation: "These numbers tell the story of SIROCCO's recruitment challenge: screening over 2,600 patients to enroll just 1,200, at an estimated cost of $85 million.",
};

pub const KEY_METRICS: &[KeyMetric] = &[
    KeyMetric {
        icon: "👥",
        title: "Patients Screened",
        value: "2,681",
        subtitle: "Total people evaluated for the trial",
        explanation: "This is like the number of job applicants. Each screening costs $5,000-$10,000 in staff time, lab tests, and paperwork — even if the patient doesn't qualify.",
        tone: Tone::Secondary,
    },
    KeyMetric {
        icon: "✅",
        title: "Patients Enrolled",
        value: "1,205",
        subtitle: "Passed screening and joined trial",
        explanation: "Only 45% of screened patients qualified — like hiring 45 out of every 100 job applicants. Each enrolled patient generates the data needed for FDA approval.",
        tone: Tone::Success,
    },
    KeyMetric {
        icon: "❌",
        title: "Screen Failures",
        value: "1,476",
        subtitle: "Evaluated but didn't qualify",
        explanation: "55% of patients failed screening — mostly because their eosinophil blood counts were too low. This is 'biological reality' that better pre-screening could identify earlier.",
        tone: Tone::Danger,
    },
    KeyMetric {
        icon: "🏥",
        title: "Trial Sites",
        value: "374",
        subtitle: "Hospitals/clinics across 17 countries",
        explanation: "More sites means faster enrollment but higher coordination costs. Industry benchmark: 30% of sites fail to enroll even a single patient.",
        tone: Tone::Primary,
    },
];

pub const FUNNEL_SECTION: Section = Section {
    title: "Patient Journey Funnel",
    explanation: "Watch how patients flow through the trial: 2,681 screened → 1,205 enrolled (55% drop-off) → ~844 completed (assuming 30% dropout). Each stage has associated costs and challenges.",
};

pub const FUNNEL: &[FunnelStage] = &[
    FunnelStage {
        name: "Screened",
        value: 2681.0,
        tone: Tone::Secondary,
    },
    FunnelStage {
        name: "Enrolled",
        value: 1205.0,
        tone: Tone::Success,
    },
    FunnelStage {
        name: "Completed",
        value: 844.0,
        tone: Tone::Primary,
    },
];

pub const BENCHMARK_SECTION: Section = Section {
    title: "SIROCCO vs Industry Benchmarks",
    explanation: "How does SIROCCO compare to typical Phase 3 trials? The 55% screen failure rate is significantly worse than the 36% industry average — driven by strict eosinophil requirements that improved drug efficacy but increased screening costs.",
};

pub const BENCHMARKS: &[BenchmarkComparison] = &[
    BenchmarkComparison {
        metric: "Screen Failure Rate",
        sirocco: 55.0,
        industry: 36.0,
    },
    BenchmarkComparison {
        metric: "Enrollment Success",
        sirocco: 45.0,
        industry: 64.0,
    },
    BenchmarkComparison {
        metric: "Site Zero Enrollment",
        sirocco: 30.0,
        industry: 30.0,
    },
];

// ---------------------------------------------------------------------------
// Screen failures
// ---------------------------------------------------------------------------

pub const WHAT_IS_SCREEN_FAILURE: Explainer = Explainer {
    title: "What is a Screen Failure?",
    tone: Tone::Warning,
    body: &[
        P("A "),
        S("screen failure"),
        P(" happens when a patient comes in for evaluation but "),
        S("doesn't qualify"),
        P(" to join the trial. Think of it like a job interview: the candidate shows up, you spend time evaluating them, but they don't get hired. Unlike job interviews, each screening costs $5,000-$10,000 in staff time, lab tests, and paperwork — "),
        S("whether they qualify or not"),
        P("."),
        Br,
        Br,
        S("Why it matters:"),
        P(" SIROCCO had 1,476 screen failures × $7,500 average = "),
        S("$10.9 million"),
        P(" spent on patients who never contributed data."),
    ],
};

pub const FAILURE_CHART_SECTION: Section = Section {
    title: "Why Patients Failed Screening",
    explanation: "Understanding WHY patients fail helps identify what AI can prevent. Some failures (like low eosinophils) are 'biological reality' — the patient simply doesn't have the condition the drug treats. Others (like COPD misdiagnosis) could potentially be caught earlier with better pre-screening.",
};

pub const FAILURE_TABLE_SECTION: Section = Section {
    title: "Detailed Breakdown with AI Prevention Potential",
    explanation: "Each row shows: the reason patients failed, how many were affected, the cost impact, and whether AI pre-screening could prevent it.",
};

pub const SCREEN_FAILURES: &[ScreenFailure] = &[
    ScreenFailure {
        reason: "Low Eosinophils",
        detail_reason: "Low Eosinophils (<300 cells/μL)",
        patients: 450.0,
        pct: 30.5,
        cost: 3_375_000.0,
        explanation: "Patient's blood test showed eosinophil levels below the threshold. Their asthma isn't the 'eosinophilic' type this drug treats.",
        ai: AiFit::Partial,
    },
    ScreenFailure {
        reason: "COPD (Not Asthma)",
        detail_reason: "COPD Misdiagnosis",
        patients: 350.0,
        pct: 23.7,
        cost: 2_625_000.0,
        explanation: "Patient thought they had asthma but actually has COPD (different disease). Similar symptoms, wrong condition.",
        ai: AiFit::Yes,
    },
    ScreenFailure {
        reason: "Few Exacerbations",
        detail_reason: "Insufficient Exacerbations",
        patients: 280.0,
        pct: 19.0,
        cost: 2_100_000.0,
        explanation: "Trial required ≥2 severe asthma attacks in the past year. Patient's asthma was too well-controlled to qualify.",
        ai: AiFit::Yes,
    },
    ScreenFailure {
        reason: "Other Conditions",
        detail_reason: "Other Medical Conditions",
        patients: 200.0,
        pct: 13.6,
        cost: 1_500_000.0,
        explanation: "Patient had other health issues (heart disease, etc.) that made participation unsafe or could confuse results.",
        ai: AiFit::Yes,
    },
    ScreenFailure {
        reason: "Lab Values",
        detail_reason: "Lab Values Out of Range",
        patients: 120.0,
        pct: 8.1,
        cost: 900_000.0,
        explanation: "Blood chemistry (liver, kidney function) was abnormal, indicating other health issues.",
        ai: AiFit::Partial,
    },
    ScreenFailure {
        reason: "Withdrew",
        detail_reason: "Patient Withdrew",
        patients: 76.0,
        pct: 5.1,
        cost: 380_000.0,
        explanation: "Patient changed their mind or staff had concerns about their ability to follow the protocol.",
        ai: AiFit::Limited,
    },
];

pub const SCREEN_FAILURE_TOTAL_PATIENTS: f64 = 1476.0;
pub const SCREEN_FAILURE_TOTAL_COST: f64 = 10_880_000.0;
pub const SCREEN_FAILURE_TOTAL_NOTE: &str =
    "Every dollar spent here generated zero data for FDA approval";

pub const SCREENING_INSIGHT: &[TextRun] = &[
    P("AI could potentially prevent "),
    S("~50% of screen failures"),
    P(" (the \"Yes\" categories) by reviewing medical records before patients come in for evaluation. At $7,500 per failed screen, that's "),
    S("$2-3M in savings"),
    P(" for a trial like SIROCCO."),
];

// ---------------------------------------------------------------------------
// Costs
// ---------------------------------------------------------------------------

pub const TRIAL_ECONOMICS: Explainer = Explainer {
    title: "Understanding Clinical Trial Economics",
    tone: Tone::Info,
    body: &[
        P("A Phase 3 trial like SIROCCO costs "),
        S("$20-100+ million"),
        P(". The money goes to: paying hospitals to run the trial (40%), finding patients (15%), monitoring data quality (10%), manufacturing drugs (10%), and regulatory compliance (5%). Per-patient costs range from "),
        S("$41,000-$113,000"),
        P(" depending on trial complexity. SIROCCO's 1,205 enrolled patients × ~$70,500 per patient = ~"),
        S("$85 million total"),
        P("."),
    ],
};

pub const COST_CHART_SECTION: Section = Section {
    title: "Where Does the Money Go?",
    explanation: "This chart breaks down the major cost categories for each enrolled patient. Note that 'Screening Waste' represents the proportional cost of all the failed screenings divided across enrolled patients — a hidden tax on successful recruitment.",
};

pub const COST_CATEGORIES: &[CostCategory] = &[
    CostCategory {
        category: "Site Payments",
        per_patient: 25_000.0,
        description: "Hospitals/clinics get paid for each enrolled patient",
    },
    CostCategory {
        category: "Screening Waste",
        per_patient: 9_035.0,
        description: "Failed screenings cost $7,500 each with zero data return",
    },
    CostCategory {
        category: "Recruitment",
        per_patient: 6_500.0,
        description: "Advertising, outreach to find eligible patients",
    },
    CostCategory {
        category: "Drug/Placebo",
        per_patient: 5_000.0,
        description: "Manufacturing and shipping the treatment",
    },
    CostCategory {
        category: "Monitoring",
        per_patient: 4_000.0,
        description: "Quality checks and compliance verification",
    },
    CostCategory {
        category: "Lab Tests",
        per_patient: 3_000.0,
        description: "Central lab processing for consistent results",
    },
    CostCategory {
        category: "Data Mgmt",
        per_patient: 2_500.0,
        description: "Electronic systems, data cleaning",
    },
    CostCategory {
        category: "Regulatory",
        per_patient: 1_500.0,
        description: "FDA and ethics committee compliance",
    },
];

pub const COST_DETAIL_SECTION: Section = Section {
    title: "Cost Category Details",
    explanation: "Each cost category explained in plain English, with sources and verification status.",
};

pub const COST_DETAILS: &[CostDetail] = &[
    CostDetail {
        category: "Site Payments",
        amount: "$25,000/patient",
        icon: "🏥",
        detail: "Hospitals and clinics get paid for each patient they successfully enroll. This covers the Principal Investigator's time, coordinator salaries, facility use, equipment, and overhead. Sites won't participate without adequate payment.",
        source: "Sofpromed, Industry Data",
    },
    CostDetail {
        category: "Screen Failure Waste",
        amount: "$9,035/enrolled",
        icon: "❌",
        detail: "For every patient you enroll, you've also paid for ~1.2 patients who failed screening. At $7,500 per failure and 55% failure rate, this adds $9,035 to each enrolled patient's effective cost.",
        source: "Calculated from SIROCCO data",
    },
    CostDetail {
        category: "Patient Recruitment",
        amount: "$6,500/enrolled",
        icon: "📢",
        detail: "Finding eligible patients through advertising, social media, patient databases, doctor referrals, and call centers. This is the #1 operational challenge — 80% of trials miss enrollment deadlines.",
        source: "PMC7342339",
    },
    CostDetail {
        category: "Drug/Placebo Manufacturing",
        amount: "$5,000/patient",
        icon: "💊",
        detail: "Making the drug, packaging it, shipping to 374 sites globally. Biologic drugs like benralizumab are expensive to produce. Placebo must look identical to maintain blinding.",
        source: "Industry estimates",
    },
    CostDetail {
        category: "Site Monitoring",
        amount: "$4,000/patient",
        icon: "🔍",
        detail: "Clinical Research Associates visit sites to verify data accuracy, check source documents, and ensure compliance. FDA requires this 'source data verification' — cutting corners risks approval.",
        source: "CRO data",
    },
    CostDetail {
        category: "Central Lab Testing",
        amount: "$3,000/patient",
        icon: "🧪",
        detail: "Blood samples shipped to central labs for standardized testing. This ensures consistent measurement across all 374 sites — different local labs might get different results.",
        source: "Industry standards",
    },
];

pub const DELAY_COST_TITLE: &str = "⏱️ The Hidden Cost: Delays";
pub const DELAY_COST: &[TextRun] = &[
    P("Every day a trial is delayed costs the sponsor "),
    S("$0.6-8 million"),
    P(" in lost revenue opportunity — the drug could already be selling if it were approved. Daily operational costs (keeping sites active, staff employed) run ~$37,000-55,000. A Phase 3 trial delayed by 6 months = "),
    S("$110-1,460 million"),
    P(" in lost opportunity. This is why \"80% of trials miss enrollment timelines\" is such a catastrophic industry problem."),
];

// ---------------------------------------------------------------------------
// AI impact
// ---------------------------------------------------------------------------

pub const HOW_AI_CHANGES_SCREENING: Explainer = Explainer {
    title: "How AI Changes Patient Screening",
    tone: Tone::Success,
    body: &[
        P("Traditional screening is "),
        S("slow"),
        P(" (50+ minutes per patient), "),
        S("expensive"),
        P(" ($42+ in labor per screen), and "),
        S("wasteful"),
        P(" (55% fail anyway). AI pre-screening analyzes patient medical records "),
        S("before"),
        P(" they come in, flagging likely qualifiers and likely failures. The result: CRCs review AI assessments in 9 minutes instead of doing 50-minute manual reviews. Validated accuracy: "),
        S("87% in real-world use"),
        P(" (Callies et al., Nature Communications Medicine, 2025)."),
    ],
};

pub const AI_COMPARISON_SECTION: Section = Section {
    title: "Manual vs AI-Assisted Screening",
    explanation: "Side-by-side comparison of traditional manual screening versus AI-assisted workflow. The AI doesn't replace human judgment — it augments it by doing the tedious record review and flagging relevant information.",
};

pub const AI_COMPARISON: &[AiComparison] = &[
    AiComparison {
        metric: "Time per Patient",
        manual: 50.0,
        ai_assisted: 9.0,
        unit: "minutes",
    },
    AiComparison {
        metric: "Cost per Screen",
        manual: 42.0,
        ai_assisted: 5.0,
        unit: "dollars",
    },
    AiComparison {
        metric: "Daily Capacity",
        manual: 10.0,
        ai_assisted: 50.0,
        unit: "patients",
    },
];

pub const AI_PERFORMANCE_SECTION: Section = Section {
    title: "Validated AI Performance (Peer-Reviewed)",
    explanation: "These results come from a 2025 study published in Nature Communications Medicine — a peer-reviewed journal. The AI was tested on 485 patients across 36 trials at 30 different sites.",
};

pub const AI_PERFORMANCE: &[KeyMetric] = &[
    KeyMetric {
        icon: "🎯",
        title: "Real-World Accuracy",
        value: "87%",
        subtitle: "Correct eligibility assessments",
        explanation: "In actual clinical use (not just research benchmarks), the AI correctly classified patient eligibility 87% of the time. High enough for practical use as a screening aid — CRCs verify the AI's work.",
        tone: Tone::Success,
    },
    KeyMetric {
        icon: "⏱️",
        title: "Time Reduction",
        value: "82%",
        subtitle: "From 50 min to 9 min per patient",
        explanation: "CRCs no longer manually review every page of medical records. They verify the AI's assessment, check rationale, and confirm flagged items. Most reviews take just 5-11 minutes.",
        tone: Tone::Primary,
    },
    KeyMetric {
        icon: "💵",
        title: "Cost per Assessment",
        value: "$0.09",
        subtitle: "Per eligibility criterion",
        explanation: "The AI costs about 9 cents per criterion assessed. With ~49 criteria per patient, that's ~$4.50 total vs $42+ for manual review. Nearly 10x cost reduction on screening labor.",
        tone: Tone::Secondary,
    },
    KeyMetric {
        icon: "📊",
        title: "Benchmark Accuracy",
        value: "93%",
        subtitle: "On standardized test dataset",
        explanation: "When tested on the n2c2 2018 research benchmark (288 diabetic patients), the AI achieved 93% accuracy — the best performance ever reported on this dataset.",
        tone: Tone::Accent,
    },
];

pub const PROJECTION_SECTION: Section = Section {
    title: "If SIROCCO Had Used AI Pre-Screening",
    explanation: "Projected impact based on validated AI performance applied to SIROCCO's actual screening volume.",
};

pub const PROJECTION_TITLE: &str = "📈 Projected Savings at SIROCCO Scale";

pub const PROJECTED_SAVINGS: &[ProjectedSaving] = &[
    ProjectedSaving {
        label: "CRC Hours Saved",
        value: "1,833 hours",
        calc: "2,681 screenings × 41 min saved ÷ 60",
    },
    ProjectedSaving {
        label: "Labor Cost Savings",
        value: "$916,500",
        calc: "1,833 hours × $500/hr loaded cost",
    },
    ProjectedSaving {
        label: "Futile Screen Prevention",
        value: "$2.2-3.3M",
        calc: "20-30% of failures identified earlier",
    },
    ProjectedSaving {
        label: "Total Potential Savings",
        value: "$3-4 Million",
        calc: "Combined efficiency + prevention",
    },
];

pub const CITATION_AUTHORS: &str = "Callies, A., Bodinier, Q., Ravaud, P. & Davarpanah, K. (2025). \"Real-world validation of a multimodal LLM-powered pipeline for high-accuracy clinical trial patient matching.\"";
pub const CITATION_JOURNAL: &str = "Communications Medicine";
pub const CITATION_DOI: &str = "10.1038/s43856-025-01256-0";

// ---------------------------------------------------------------------------
// Glossary
// ---------------------------------------------------------------------------

pub const GLOSSARY_INTRO: Explainer = Explainer {
    title: "Clinical Trial Vocabulary for Business Professionals",
    tone: Tone::Info,
    body: &[P(
        "Clinical trials have their own language. This glossary defines the most important terms in plain English, with real examples from SIROCCO. Understanding this vocabulary is essential for analyzing the clinical trials market and evaluating AI solutions like Inato's platform.",
    )],
};

pub const GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry {
        term: "Screen Failure",
        definition: "When a patient is evaluated for a trial but doesn't qualify to participate.",
        bullets: &[
            "Like a job interview where the candidate doesn't get hired — but you still paid for the interview.",
            "Each screening costs $5,000-$10,000 whether the patient qualifies or not.",
            "SIROCCO had 55% screen failures — much higher than the 36% industry average.",
            "AI can identify likely failures BEFORE they come in, saving thousands per patient.",
        ],
        example: "1,476 patients failed SIROCCO screening, costing ~$10.9M",
    },
    GlossaryEntry {
        term: "Enrollment",
        definition: "When a patient officially joins a trial after passing all screening requirements.",
        bullets: &[
            "This is the goal of screening — successfully \"hiring\" the patient to participate.",
            "Enrolled patients are randomized to receive either the drug or placebo.",
            "80% of trials fail to meet enrollment timelines — the industry's biggest problem.",
            "Each enrolled patient costs $41,000-$113,000 over the course of the trial.",
        ],
        example: "1,205 patients enrolled in SIROCCO (45% of those screened)",
    },
    GlossaryEntry {
        term: "Eligibility Criteria",
        definition: "The requirements that determine whether a patient can join a trial.",
        bullets: &[
            "Inclusion criteria = what you MUST have. Exclusion criteria = what DISQUALIFIES you.",
            "Modern trials have ~49 criteria on average (up 58% since 2001).",
            "More criteria = more targeted patients, but also more screen failures.",
            "Checking 49+ criteria against medical records takes 50+ minutes per patient.",
        ],
        example: "SIROCCO required eosinophils ≥300 cells/μL — this alone caused 30.5% of failures",
    },
    GlossaryEntry {
        term: "Principal Investigator (PI)",
        definition: "The lead doctor at each trial site, legally responsible for conducting the study.",
        bullets: &[
            "Typically a physician with expertise in the condition being studied.",
            "Responsible for patient safety, data accuracy, and regulatory compliance.",
            "PIs are paid $25,000-$40,000 per patient enrolled.",
            "Good PIs are in high demand — often juggling multiple trials simultaneously.",
        ],
        example: "SIROCCO had 374 sites = 374+ PIs across 17 countries",
    },
    GlossaryEntry {
        term: "Clinical Research Coordinator (CRC)",
        definition: "Staff at trial sites who handle day-to-day operations.",
        bullets: &[
            "CRCs do the \"grunt work\": scheduling, data collection, paperwork, patient communication.",
            "They're the ones who actually screen patients — reviewing records, running tests.",
            "Fully loaded CRC cost: ~$500/hour including salary, benefits, overhead.",
            "AI pre-screening reduces CRC workload by 80%+ (50 min → 9 min per patient).",
        ],
        example: "SIROCCO CRCs spent ~2,234 hours on screening alone",
    },
    GlossaryEntry {
        term: "Phase 3 Trial",
        definition: "The final large-scale testing phase before FDA approval.",
        bullets: &[
            "Phase 1 = safety (20-100 people). Phase 2 = effectiveness (100-500). Phase 3 = confirmation (1,000-5,000+).",
            "Phase 3 is the most expensive — often $20-100+ million.",
            "Success usually leads to FDA approval and commercial launch.",
            "This is where pharma companies make their biggest investment.",
        ],
        example: "SIROCCO was Phase 3 with 1,205 patients, leading to FDA approval",
    },
    GlossaryEntry {
        term: "Dropout / Attrition",
        definition: "When an enrolled patient leaves the trial before completing it.",
        bullets: &[
            "Dropouts \"waste\" the money spent recruiting them — incomplete data.",
            "Industry average: ~30% of patients drop out.",
            "Common reasons: inconvenience, side effects, life changes, financial burden.",
            "Each dropout costs $15,000-$26,000 to replace.",
        ],
        example: "If 30% dropped from SIROCCO, that's $7M+ in replacement costs",
    },
    GlossaryEntry {
        term: "Biomarker",
        definition: "A measurable biological indicator used to identify patients who might respond to treatment.",
        bullets: &[
            "Biomarkers help \"personalize\" medicine — not everyone responds to the same drug.",
            "They INCREASE screen failures but IMPROVE drug success rates.",
            "Example: Eosinophil count identifies patients with eosinophilic asthma.",
            "AI can pre-screen for biomarkers by reading past lab results.",
        ],
        example: "SIROCCO's eosinophil requirement caused 30.5% of screen failures",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_failure_totals_match_rows() {
        let patients: f64 = SCREEN_FAILURES.iter().map(|f| f.patients).sum();
        let cost: f64 = SCREEN_FAILURES.iter().map(|f| f.cost).sum();
        let pct: f64 = SCREEN_FAILURES.iter().map(|f| f.pct).sum();

        assert_eq!(patients, SCREEN_FAILURE_TOTAL_PATIENTS);
        assert_eq!(cost, SCREEN_FAILURE_TOTAL_COST);
        assert!((pct - 100.0).abs() < 0.05);
    }

    #[test]
    fn test_screen_failures_cost_7500_each() {
        for failure in SCREEN_FAILURES.iter().filter(|f| f.reason != "Withdrew") {
            assert_eq!(failure.cost, failure.patients * 7_500.0, "{}", failure.reason);
        }
    }

    #[test]
    fn test_funnel_is_monotonic() {
        assert!(FUNNEL.windows(2).all(|w| w[0].value >= w[1].value));
        assert_eq!(FUNNEL[0].value - FUNNEL[1].value, SCREEN_FAILURE_TOTAL_PATIENTS);
    }

    #[test]
    fn test_glossary_entries_are_complete() {
        assert_eq!(GLOSSARY.len(), 8);
        for entry in GLOSSARY {
            assert_eq!(entry.bullets.len(), 4, "{}", entry.term);
            assert!(!entry.example.is_empty());
        }
    }

    #[test]
    fn test_card_sets_have_four_entries() {
        assert_eq!(KEY_METRICS.len(), 4);
        assert_eq!(AI_PERFORMANCE.len(), 4);
        assert_eq!(PROJECTED_SAVINGS.len(), 4);
        assert_eq!(COST_CATEGORIES.len(), 8);
        assert_eq!(COST_DETAILS.len(), 6);
    }
}
