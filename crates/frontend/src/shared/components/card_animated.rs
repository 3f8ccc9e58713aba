//! CardAnimated: Thaw `Card` that fades in on mount.
//!
//! Drop-in for `<Card attr:style="...">`. The `card-appear` keyframes live in
//! `static/dashboards.css`.
//!
//! ```ignore
//! <CardAnimated delay_ms=0>   // first card
//! <CardAnimated delay_ms=80>  // second card
//! <CardAnimated style="border-left: 4px solid #3B82F6;" delay_ms=160>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Step between cards of one grid, for the stagger effect.
pub const STAGGER_MS: u32 = 80;

pub fn appear_style(delay_ms: u32, style: &str) -> String {
    if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    }
}

/// Delay of the `index`-th card of a grid.
pub fn stagger(index: usize) -> u32 {
    index as u32 * STAGGER_MS
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=appear_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear_style() {
        assert_eq!(
            appear_style(0, ""),
            "animation: card-appear 0.28s ease-out 0ms both;"
        );
        assert!(appear_style(160, "padding: 12px;").ends_with("160ms both; padding: 12px;"));
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0), 0);
        assert_eq!(stagger(3), 240);
    }
}
