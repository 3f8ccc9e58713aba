use contracts::dashboards::d502_trial_retention::data::{RepresentationGap, SupportEffect};
use contracts::shared::display::AiFit;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

pub fn ai_fit_color(fit: AiFit) -> BadgeColor {
    match fit {
        AiFit::Yes => BadgeColor::Success,
        AiFit::Partial => BadgeColor::Warning,
        AiFit::Limited => BadgeColor::Danger,
    }
}

pub fn gap_color(gap: RepresentationGap) -> BadgeColor {
    match gap {
        RepresentationGap::Over => BadgeColor::Warning,
        RepresentationGap::Under => BadgeColor::Danger,
        RepresentationGap::Variable => BadgeColor::Severe,
    }
}

/// Filled for the strongest effect, tinted otherwise.
pub fn effect_appearance(effect: SupportEffect) -> BadgeAppearance {
    match effect {
        SupportEffect::VeryHigh => BadgeAppearance::Filled,
        SupportEffect::High => BadgeAppearance::Tint,
    }
}

/// Whether AI pre-screening can address a reason.
#[component]
pub fn AiFitBadge(
    fit: AiFit,
    /// `YES`/`PARTIAL`/`LIMITED` instead of `Yes`/`Partially`/`Limited`.
    #[prop(optional)]
    upper: bool,
) -> impl IntoView {
    let text = if upper {
        format!("AI: {}", fit.badge())
    } else {
        fit.label().to_string()
    };

    view! {
        <Badge appearance=BadgeAppearance::Filled color=ai_fit_color(fit)>
            {text}
        </Badge>
    }
}

#[component]
pub fn GapBadge(gap: RepresentationGap) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=gap_color(gap)>
            {gap.label()}
        </Badge>
    }
}

#[component]
pub fn EffectBadge(effect: SupportEffect) -> impl IntoView {
    view! {
        <Badge appearance=effect_appearance(effect) color=BadgeColor::Success>
            {effect.label()}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_colors() {
        assert!(matches!(ai_fit_color(AiFit::Yes), BadgeColor::Success));
        assert!(matches!(ai_fit_color(AiFit::Limited), BadgeColor::Danger));
        assert!(matches!(
            gap_color(RepresentationGap::Under),
            BadgeColor::Danger
        ));
        assert!(matches!(
            effect_appearance(SupportEffect::VeryHigh),
            BadgeAppearance::Filled
        ));
    }
}
