//! Small display vocabulary used inside the static datasets.

use serde::Serialize;

/// Colour role of a card, bar or badge. The frontend theme maps each tone to
/// a concrete colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    // corporate palette of the SIROCCO dashboard
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Accent,
    // named palette of the retention dashboard
    Red,
    Orange,
    Amber,
    Yellow,
    Green,
    Emerald,
    Teal,
    Blue,
    Purple,
    Gray,
}

/// One run of inline text inside a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextRun {
    Plain(&'static str),
    Strong(&'static str),
    Emphasis(&'static str),
    LineBreak,
}

/// How much AI pre-screening can do about a failure or dropout reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AiFit {
    Yes,
    Partial,
    Limited,
}

impl AiFit {
    /// Sentence-case label used in the SIROCCO screen-failure table.
    pub fn label(self) -> &'static str {
        match self {
            AiFit::Yes => "Yes",
            AiFit::Partial => "Partially",
            AiFit::Limited => "Limited",
        }
    }

    /// Upper-case badge text used by the retention dashboard.
    pub fn badge(self) -> &'static str {
        match self {
            AiFit::Yes => "YES",
            AiFit::Partial => "PARTIAL",
            AiFit::Limited => "LIMITED",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            AiFit::Yes => Tone::Success,
            AiFit::Partial => Tone::Warning,
            AiFit::Limited => Tone::Danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_fit_labels() {
        assert_eq!(AiFit::Partial.label(), "Partially");
        assert_eq!(AiFit::Partial.badge(), "PARTIAL");
        assert_eq!(AiFit::Limited.tone(), Tone::Danger);
    }
}
