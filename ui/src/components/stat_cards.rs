use dioxus::prelude::*;

use crate::components::icons;
use crate::core::{aggregate::Stats, format};
use crate::t;

/// The four headline cards above the chart grid.
#[component]
pub fn StatCards(stats: Stats) -> Element {
    let cards = [
        (t!("stat-current"), stats.current.to_string(), icons::USERS),
        (
            t!("stat-average"),
            format::format_average(stats.average),
            icons::TRENDING_UP,
        ),
        (t!("stat-peak"), stats.peak.to_string(), icons::ACTIVITY),
        (t!("stat-total"), stats.total.to_string(), icons::CLOCK),
    ];

    rsx! {
        div { class: "stat-grid",
            for (index, (label, value, icon)) in cards.into_iter().enumerate() {
                div { key: "{index}", class: "stat-card stat-card--{index}",
                    div { class: "stat-card__text",
                        span { class: "stat-card__label", "{label}" }
                        strong { class: "stat-card__value", "{value}" }
                    }
                    span {
                        class: "stat-card__icon",
                        aria_hidden: "true",
                        dangerous_inner_html: "{icon}",
                    }
                }
            }
        }
    }
}
