//! Dashboard statistics: three tiles and two bar charts.

use api::Backend;
use dioxus::prelude::*;
use store::{bar_width, DashboardStats, Priority};

use crate::services::use_services;

/// Label shown for ideas the backend reports without a category.
const UNCATEGORIZED: &str = "Uncategorized";

fn priority_rows(stats: &DashboardStats) -> Vec<(String, u64)> {
    // Highest priority first
    Priority::ALL
        .iter()
        .rev()
        .map(|p| (p.label().to_string(), stats.priority_breakdown.get(*p)))
        .collect()
}

fn category_rows(stats: &DashboardStats) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> = stats
        .category_breakdown
        .iter()
        .map(|(name, count)| {
            let label = if name == "null" || name.is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                name.clone()
            };
            (label, *count)
        })
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

#[component]
fn StatTile(label: String, value: u64) -> Element {
    rsx! {
        div {
            class: "mv-tile",
            span { class: "mv-tile__value", "{value}" }
            span { class: "mv-tile__label", "{label}" }
        }
    }
}

#[component]
fn BarList(title: String, rows: Vec<(String, u64)>) -> Element {
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let bars: Vec<(String, u64, String)> = rows
        .iter()
        .map(|(label, value)| {
            let width = format!("width: {:.1}%", bar_width(*value, max));
            (label.clone(), *value, width)
        })
        .collect();

    rsx! {
        section {
            class: "mv-bars",
            h3 { "{title}" }
            if rows.is_empty() {
                p { class: "mv-muted", "No data yet" }
            }
            for (label, value, width) in bars {
                div {
                    key: "{label}",
                    class: "mv-bars__row",
                    span { class: "mv-bars__label", "{label}" }
                    div {
                        class: "mv-bars__track",
                        div {
                            class: "mv-bars__fill",
                            style: "{width}",
                        }
                    }
                    span { class: "mv-bars__value", "{value}" }
                }
            }
        }
    }
}

#[component]
pub fn AnalyticsPanel() -> Element {
    let services = use_services();

    let stats = use_resource(move || {
        let client = services.client.clone();
        async move { client.dashboard_stats().await }
    });

    let content = match &*stats.read() {
        None => rsx! { p { class: "mv-muted", "Loading analytics..." } },
        Some(Err(e)) => {
            tracing::warn!("Failed to load analytics: {e}");
            rsx! { p { class: "mv-error", "Failed to load analytics" } }
        }
        Some(Ok(stats)) => rsx! {
            div {
                class: "mv-tiles",
                StatTile { label: "Total ideas", value: stats.total_ideas }
                StatTile { label: "Last 7 days", value: stats.recent_activity }
                StatTile { label: "Favorites", value: stats.favorite_count }
            }
            div {
                class: "mv-charts",
                BarList { title: "By priority", rows: priority_rows(stats) }
                BarList { title: "By category", rows: category_rows(stats) }
            }
        },
    };

    rsx! {
        div {
            class: "mv-analytics",
            {content}
        }
    }
}
