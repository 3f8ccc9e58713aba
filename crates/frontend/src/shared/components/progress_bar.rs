use leptos::prelude::*;

/// Fill width in percent of the track, clamped to `0..=100`.
///
/// `scale` stretches short bars, e.g. dropout rates drawn at three times
/// their value.
pub fn bar_width(pct: f64, scale: f64) -> f64 {
    (pct * scale).clamp(0.0, 100.0)
}

/// Formats a rate without a trailing `.0`.
pub fn rate_label(pct: f64) -> String {
    contracts::shared::number_format::format_percent(pct)
}

/// Label, track with a coloured fill, and the rate.
#[component]
pub fn ProgressBar(
    label: &'static str,
    pct: f64,
    color: &'static str,
    #[prop(default = 1.0)] scale: f64,
    /// Width of the label column in px.
    #[prop(default = 128)]
    label_width: u32,
    /// Print the rate inside the fill instead of after the track.
    #[prop(optional)]
    value_inside: bool,
) -> impl IntoView {
    let fill_style = format!(
        "width: {}%; background-color: {};",
        bar_width(pct, scale),
        color
    );
    let rate = rate_label(pct);

    view! {
        <div class="progress-row">
            <div class="progress-row__label" style=format!("width: {}px;", label_width)>
                {label}
            </div>
            <div class="progress-row__track">
                <div class="progress-row__fill" style=fill_style>
                    {value_inside.then(|| view! { <span class="progress-row__inner">{rate.clone()}</span> })}
                </div>
            </div>
            {(!value_inside).then(|| view! { <div class="progress-row__value">{rate.clone()}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_scales_and_clamps() {
        assert_eq!(bar_width(42.0, 1.0), 42.0);
        assert_eq!(bar_width(25.0, 3.0), 75.0);
        assert_eq!(bar_width(40.0, 3.0), 100.0);
        assert_eq!(bar_width(-5.0, 1.0), 0.0);
    }

    #[test]
    fn test_rate_label() {
        assert_eq!(rate_label(19.0), "19%");
    }
}
