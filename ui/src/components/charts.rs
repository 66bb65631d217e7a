//! Hand-built SVG chart components, all fed by [`ChartPoint`] sequences.
//!
//! The geometry helpers are plain string builders so they stay testable
//! without a renderer; the components only wrap them in `svg` nodes.

use dioxus::prelude::*;

use crate::core::format;
use crate::core::present::ChartPoint;
use crate::t;

/// Series palette (blue, green, amber, red, violet).
pub const PALETTE: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"];

const VIEW_W: f64 = 600.0;
const VIEW_H: f64 = 260.0;
const PAD_X: f64 = 8.0;
const PAD_TOP: f64 = 10.0;
/// Band under the plot reserved for x-axis labels.
const LABEL_BAND: f64 = 22.0;

/// Smallest window the history zoom slider allows.
const MIN_ZOOM: usize = 10;

fn max_value(points: &[ChartPoint]) -> u64 {
    points.iter().map(|p| p.value).max().unwrap_or(0).max(1)
}

fn plot_x(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return VIEW_W / 2.0;
    }
    PAD_X + index as f64 / (len - 1) as f64 * (VIEW_W - 2.0 * PAD_X)
}

fn plot_y(value: u64, max: u64) -> f64 {
    let usable = VIEW_H - PAD_TOP - LABEL_BAND;
    VIEW_H - LABEL_BAND - value as f64 / max as f64 * usable
}

/// `points` attribute for a `polyline` tracing the series.
fn polyline_points(points: &[ChartPoint]) -> String {
    let max = max_value(points);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", plot_x(i, points.len()), plot_y(p.value, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `points` attribute for the filled polygon under the series line.
fn area_points(points: &[ChartPoint]) -> String {
    let baseline = VIEW_H - LABEL_BAND;
    let first_x = plot_x(0, points.len());
    let last_x = plot_x(points.len().saturating_sub(1), points.len());
    format!(
        "{} {last_x:.1},{baseline:.1} {first_x:.1},{baseline:.1}",
        polyline_points(points)
    )
}

/// Roughly `target` evenly spread tick positions with their labels.
fn x_ticks(points: &[ChartPoint], target: usize) -> Vec<(f64, String)> {
    if points.is_empty() {
        return Vec::new();
    }
    let step = (points.len() / target.max(1)).max(1);
    points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0)
        .map(|(i, p)| (plot_x(i, points.len()), p.label.clone()))
        .collect()
}

fn point_on_circle(cx: f64, cy: f64, r: f64, fraction: f64) -> (f64, f64) {
    use std::f64::consts::TAU;
    // Slices start at 12 o'clock and run clockwise.
    let angle = fraction * TAU - TAU / 4.0;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// `d` attribute for one pie slice spanning `[start, end)` as disc fractions.
fn pie_slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let span = end - start;
    if span >= 1.0 - 1e-9 {
        // A single slice covering the whole disc needs two arcs.
        let d = 2.0 * r;
        return format!(
            "M {:.2} {cy:.2} a {r:.2} {r:.2} 0 1 0 {d:.2} 0 a {r:.2} {r:.2} 0 1 0 -{d:.2} 0",
            cx - r
        );
    }
    let (sx, sy) = point_on_circle(cx, cy, r, start);
    let (ex, ey) = point_on_circle(cx, cy, r, end);
    let large_arc = usize::from(span > 0.5);
    format!("M {cx:.2} {cy:.2} L {sx:.2} {sy:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {ex:.2} {ey:.2} Z")
}

fn empty_note() -> Element {
    rsx! {
        p { class: "chart__empty", {t!("chart-empty")} }
    }
}

/// Filled trend of the most recent samples.
#[component]
pub fn AreaChart(points: Vec<ChartPoint>) -> Element {
    if points.is_empty() {
        return empty_note();
    }

    let area = area_points(&points);
    let line = polyline_points(&points);
    let ticks = x_ticks(&points, 6);
    let tick_y = VIEW_H - 6.0;

    rsx! {
        svg { class: "chart", view_box: "0 0 600 260", role: "img",
            polygon {
                class: "chart__area",
                points: "{area}",
                fill: PALETTE[0],
                fill_opacity: "0.25",
            }
            polyline {
                class: "chart__line",
                points: "{line}",
                fill: "none",
                stroke: PALETTE[0],
                stroke_width: "2",
            }
            for (i, (x, label)) in ticks.into_iter().enumerate() {
                text {
                    key: "{i}",
                    class: "chart__tick",
                    x: "{x:.1}",
                    y: "{tick_y:.1}",
                    text_anchor: "middle",
                    "{label}"
                }
            }
        }
    }
}

/// Vertical bars, one per hourly bucket.
#[component]
pub fn BarChart(points: Vec<ChartPoint>) -> Element {
    if points.is_empty() {
        return empty_note();
    }

    let max = max_value(&points);
    let band = (VIEW_W - 2.0 * PAD_X) / points.len() as f64;
    let bar_w = band * 0.7;
    let tick_y = VIEW_H - 6.0;

    let bars: Vec<(f64, f64, f64, f64, String)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = PAD_X + i as f64 * band + (band - bar_w) / 2.0;
            let y = plot_y(p.value, max);
            let height = (VIEW_H - LABEL_BAND - y).max(0.0);
            let center = x + bar_w / 2.0;
            (x, y, height, center, p.label.clone())
        })
        .collect();

    rsx! {
        svg { class: "chart", view_box: "0 0 600 260", role: "img",
            for (i, (x, y, height, center, label)) in bars.into_iter().enumerate() {
                rect {
                    key: "{i}",
                    class: "chart__bar",
                    x: "{x:.1}",
                    y: "{y:.1}",
                    width: "{bar_w:.1}",
                    height: "{height:.1}",
                    rx: "2",
                    fill: PALETTE[1],
                }
                if i % 2 == 0 {
                    text {
                        class: "chart__tick",
                        x: "{center:.1}",
                        y: "{tick_y:.1}",
                        text_anchor: "middle",
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Horizontal bars, one row per hour, for the popular-hours panel.
#[component]
pub fn HourBars(points: Vec<ChartPoint>) -> Element {
    if points.is_empty() {
        return empty_note();
    }

    let max = max_value(&points);
    let view_h = 384.0;
    let row = view_h / points.len() as f64;
    let label_w = 34.0;
    let usable = VIEW_W - label_w - PAD_X;

    let label_x = label_w - 6.0;
    let bar_h = row * 0.7;

    let rows: Vec<(f64, f64, f64, String)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let top = i as f64 * row + row * 0.15;
            let text_y = i as f64 * row + row * 0.72;
            let width = p.value as f64 / max as f64 * usable;
            (top, text_y, width, p.label.clone())
        })
        .collect();

    rsx! {
        svg { class: "chart chart--rows", view_box: "0 0 600 384", role: "img",
            for (i, (top, text_y, width, label)) in rows.into_iter().enumerate() {
                text {
                    key: "label-{i}",
                    class: "chart__tick",
                    x: "{label_x:.1}",
                    y: "{text_y:.1}",
                    text_anchor: "end",
                    "{label}"
                }
                rect {
                    key: "bar-{i}",
                    class: "chart__bar",
                    x: "{label_w:.1}",
                    y: "{top:.1}",
                    width: "{width:.1}",
                    height: "{bar_h:.1}",
                    rx: "2",
                    fill: PALETTE[2],
                }
            }
        }
    }
}

/// Day-segment distribution with a percentage legend.
#[component]
pub fn PieChart(points: Vec<ChartPoint>) -> Element {
    let total: u64 = points.iter().map(|p| p.value).sum();
    if total == 0 {
        return empty_note();
    }

    let mut acc = 0.0;
    let slices: Vec<(String, &'static str, String, String)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let start = acc;
            acc += p.value as f64 / total as f64;
            (
                pie_slice_path(150.0, 125.0, 95.0, start, acc),
                PALETTE[i % PALETTE.len()],
                p.label.clone(),
                format::format_percent(p.value, total),
            )
        })
        .collect();

    let drawn: Vec<(String, &'static str)> = slices
        .iter()
        .zip(&points)
        .filter(|(_, p)| p.value > 0)
        .map(|((d, color, _, _), _)| (d.clone(), *color))
        .collect();

    rsx! {
        div { class: "pie",
            svg { class: "chart chart--pie", view_box: "0 0 300 250", role: "img",
                for (i, (d, color)) in drawn.into_iter().enumerate() {
                    path { key: "{i}", class: "pie__slice", d: "{d}", fill: "{color}" }
                }
            }
            ul { class: "pie__legend",
                for (i, (_, color, label, percent)) in slices.into_iter().enumerate() {
                    li { key: "{i}",
                        span {
                            class: "pie__swatch",
                            style: "background: {color}",
                            aria_hidden: "true",
                        }
                        span { "{label} : {percent}" }
                    }
                }
            }
        }
    }
}

/// Full-history line with a zoom slider windowing the most recent samples.
#[component]
pub fn HistoryChart(points: Vec<ChartPoint>) -> Element {
    let mut window = use_signal(|| 0usize); // 0 = everything

    let len = points.len();
    if len == 0 {
        return empty_note();
    }

    let effective = if window() == 0 { len } else { window().min(len) };
    let shown = &points[len - effective..];
    let line = polyline_points(shown);
    let ticks = x_ticks(shown, 8);
    let tick_y = VIEW_H - 6.0;

    rsx! {
        div { class: "history",
            svg { class: "chart", view_box: "0 0 600 260", role: "img",
                polyline {
                    class: "chart__line",
                    points: "{line}",
                    fill: "none",
                    stroke: PALETTE[3],
                    stroke_width: "2",
                }
                for (i, (x, label)) in ticks.into_iter().enumerate() {
                    text {
                        key: "{i}",
                        class: "chart__tick",
                        x: "{x:.1}",
                        y: "{tick_y:.1}",
                        text_anchor: "middle",
                        "{label}"
                    }
                }
            }
            if len > MIN_ZOOM {
                div { class: "history__zoom",
                    input {
                        r#type: "range",
                        min: "{MIN_ZOOM}",
                        max: "{len}",
                        value: "{effective}",
                        oninput: move |evt| {
                            if let Ok(size) = evt.value().parse::<usize>() {
                                window.set(size);
                            }
                        },
                    }
                    span { class: "history__zoom-label",
                        {t!("history-window-label", count = (effective as i64))}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[u64]) -> Vec<ChartPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| ChartPoint {
                label: format!("{i}"),
                value,
            })
            .collect()
    }

    #[test]
    fn polyline_has_one_coordinate_pair_per_point() {
        let line = polyline_points(&series(&[1, 5, 3]));
        assert_eq!(line.split(' ').count(), 3);
    }

    #[test]
    fn area_polygon_closes_on_the_baseline() {
        let area = area_points(&series(&[1, 5, 3]));
        let baseline = format!("{:.1}", VIEW_H - LABEL_BAND);
        assert_eq!(area.split(' ').count(), 5);
        assert!(area.ends_with(&format!(",{baseline}")));
    }

    #[test]
    fn plot_y_pins_extremes_inside_the_band() {
        assert_eq!(plot_y(0, 10), VIEW_H - LABEL_BAND);
        assert_eq!(plot_y(10, 10), PAD_TOP);
    }

    #[test]
    fn pie_slices_partition_the_disc() {
        let values = [30u64, 0, 5, 0];
        let total: u64 = values.iter().sum();
        let mut acc = 0.0;
        for value in values {
            acc += value as f64 / total as f64;
        }
        assert!((acc - 1.0).abs() < 1e-9);

        let half = pie_slice_path(150.0, 125.0, 95.0, 0.0, 0.5);
        assert!(half.starts_with("M 150.00 125.00"));
        assert!(half.ends_with('Z'));

        let big = pie_slice_path(150.0, 125.0, 95.0, 0.0, 0.9);
        assert!(big.contains(" 1 1 "));
    }

    #[test]
    fn tick_labels_thin_out_long_series() {
        let ticks = x_ticks(&series(&[1; 100]), 6);
        assert!(ticks.len() <= 7);
        assert_eq!(ticks[0].1, "0");
    }
}
