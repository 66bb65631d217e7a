use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::charts::{AreaChart, BarChart, HistoryChart, HourBars, PieChart};
use crate::components::{icons, DownloadPanel, StatCards};
use crate::core::period::Period;
use crate::core::pipeline::{self, DashboardInputs};
use crate::core::sample::{parse_feed, Sample};
use crate::t;

/// Fetch lifecycle for one load cycle.
#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone)]
enum FeedEvent {
    Refresh,
}

/// The single-page presence dashboard: header controls, stat cards, chart
/// grid, and the mobile-app panel. All derived data comes from one
/// [`pipeline::recompute`] call per render.
#[component]
pub fn Dashboard() -> Element {
    let samples = use_signal(Vec::<Sample>::new);
    let load_state = use_signal(|| LoadState::Loading);
    let mut period = use_signal(|| Some(Period::Day));
    let mut dark_mode = use_signal(|| false);

    let fetcher = use_coroutine(move |mut rx: UnboundedReceiver<FeedEvent>| async move {
        // Initial load, then one fetch per refresh request. Handling events
        // one at a time keeps a single request in flight.
        load_feed(samples, load_state).await;
        while let Some(FeedEvent::Refresh) = rx.next().await {
            load_feed(samples, load_state).await;
        }
    });

    let refreshing = matches!(load_state(), LoadState::Loading);
    let on_refresh = move |_| {
        // Single-flight guard: drop refresh requests while a fetch is pending.
        if !matches!(load_state(), LoadState::Loading) {
            fetcher.send(FeedEvent::Refresh);
        }
    };

    let derived = pipeline::recompute(&DashboardInputs {
        samples: samples(),
        period: period(),
        now: pipeline::now(),
    });

    let theme_class = if dark_mode() {
        "dashboard dashboard--dark"
    } else {
        "dashboard"
    };
    let state = load_state();

    if matches!(state, LoadState::Loading) && samples().is_empty() {
        return rsx! {
            div { class: "{theme_class} dashboard--empty",
                p { class: "dashboard__loading", {t!("loading-message")} }
            }
        };
    }

    if let LoadState::Failed(message) = &state {
        if samples().is_empty() {
            return rsx! {
                div { class: "{theme_class} dashboard--empty",
                    div { class: "dashboard__error",
                        h2 { {t!("feed-error-title")} }
                        p { "{message}" }
                        button {
                            r#type: "button",
                            class: "button",
                            onclick: on_refresh,
                            {t!("retry")}
                        }
                    }
                }
            };
        }
    }

    let period_value = period().map(Period::value).unwrap_or("");

    rsx! {
        div { class: "{theme_class}",
            header { class: "dashboard__header",
                div { class: "dashboard__heading",
                    h1 { {t!("dashboard-title")} }
                    p { class: "dashboard__subtitle", {t!("dashboard-subtitle")} }
                }
                div { class: "dashboard__controls",
                    div { class: "period-picker",
                        span {
                            class: "period-picker__icon",
                            aria_hidden: "true",
                            dangerous_inner_html: icons::CALENDAR,
                        }
                        label {
                            class: "visually-hidden",
                            r#for: "period-select",
                            {t!("period-label")}
                        }
                        select {
                            id: "period-select",
                            value: "{period_value}",
                            oninput: move |evt| period.set(Period::parse(&evt.value())),
                            for choice in Period::ALL {
                                option {
                                    key: "{choice.value()}",
                                    value: "{choice.value()}",
                                    {period_label(choice)}
                                }
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "theme-toggle",
                        aria_label: t!("theme-toggle"),
                        onclick: move |_| {
                            let flipped = !dark_mode();
                            dark_mode.set(flipped);
                        },
                        span {
                            aria_hidden: "true",
                            dangerous_inner_html: if dark_mode() { icons::SUN } else { icons::MOON },
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--refresh",
                        disabled: refreshing,
                        onclick: on_refresh,
                        {t!("refresh")}
                    }
                }
            }

            StatCards { stats: derived.stats }

            div { class: "chart-grid",
                section { class: "chart-card",
                    h3 { {t!("chart-recent")} }
                    AreaChart { points: derived.recent }
                }
                section { class: "chart-card",
                    h3 { {t!("chart-hourly")} }
                    BarChart { points: derived.hourly_histogram.clone() }
                }
                section { class: "chart-card",
                    h3 { {t!("chart-popular")} }
                    HourBars { points: derived.hourly_histogram }
                }
                section { class: "chart-card",
                    h3 { {t!("chart-distribution")} }
                    PieChart { points: derived.pie }
                }
                section { class: "chart-card chart-card--wide",
                    h3 { {t!("chart-history")} }
                    HistoryChart { points: derived.history }
                }
            }

            DownloadPanel {}
        }
    }
}

fn period_label(period: Period) -> String {
    match period {
        Period::Day => t!("period-day"),
        Period::Week => t!("period-week"),
        Period::Month => t!("period-month"),
        Period::Year => t!("period-year"),
    }
}

async fn load_feed(mut samples: Signal<Vec<Sample>>, mut load_state: Signal<LoadState>) {
    load_state.set(LoadState::Loading);

    match api::fetch_presence_feed().await {
        Ok(envelope) if envelope.success => {
            let raw = envelope.data.unwrap_or_default();
            samples.set(parse_feed(&raw));
            load_state.set(LoadState::Loaded);
        }
        Ok(envelope) => {
            let message = envelope.error.unwrap_or_else(|| t!("feed-error-generic"));
            eprintln!("[feed] proxy reported failure: {message}");
            load_state.set(LoadState::Failed(message));
        }
        Err(err) => {
            eprintln!("[feed] request failed: {err}");
            load_state.set(LoadState::Failed(err.to_string()));
        }
    }
}
