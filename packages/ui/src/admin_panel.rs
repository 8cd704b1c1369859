//! Admin roster with per-user JSON export.

use api::Backend;
use chrono::NaiveDateTime;
use dioxus::prelude::*;
use store::UserSummary;

use crate::components::{Button, ButtonVariant};
use crate::icons::FaDownload;
use crate::platform::{alert, download_json, export_filename};
use crate::services::use_services;
use crate::Icon;

fn last_active(ts: Option<&NaiveDateTime>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}

#[component]
pub fn AdminPanel() -> Element {
    let services = use_services();
    let client = services.client.clone();

    let users = use_resource(move || {
        let client = services.client.clone();
        async move { client.list_users().await }
    });

    let export = move |summary: UserSummary| {
        let client = client.clone();
        spawn(async move {
            let user = summary.user;
            match client.export_user(&user.id).await {
                Ok(data) => {
                    tracing::info!("Exported data for {}", user.username);
                    download_json(&export_filename(&user.username), &data);
                }
                Err(e) => {
                    tracing::warn!("Export of {} failed: {e}", user.username);
                    alert(&e.detail_or("Export failed"));
                }
            }
        });
    };

    let body = match &*users.read() {
        None => rsx! { p { class: "mv-muted", "Loading users..." } },
        Some(Err(e)) => {
            tracing::warn!("Failed to load users: {e}");
            rsx! { p { class: "mv-error", "Failed to load users" } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! { p { class: "mv-empty", "No users yet" } },
        Some(Ok(list)) => rsx! {
            table {
                class: "mv-table",
                thead {
                    tr {
                        th { "Username" }
                        th { "Email" }
                        th { "Admin" }
                        th { "Ideas" }
                        th { "Last active" }
                        th {}
                    }
                }
                tbody {
                    for summary in list.iter().cloned() {
                        tr {
                            key: "{summary.user.id}",
                            td { "{summary.user.username}" }
                            td { "{summary.user.email}" }
                            td { if summary.user.is_admin { "yes" } else { "no" } }
                            td { "{summary.idea_count}" }
                            td { "{last_active(summary.user.last_active.as_ref())}" }
                            td {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    title: "Download this user's data as JSON",
                                    onclick: {
                                        let export = export.clone();
                                        let summary = summary.clone();
                                        move |_: MouseEvent| export(summary.clone())
                                    },
                                    Icon { icon: FaDownload, width: 12, height: 12 }
                                    " Export"
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "mv-admin",
            h2 { "Users" }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_last_active() {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        assert_eq!(last_active(Some(&ts)), "2025-06-02 08:05");
        assert_eq!(last_active(None), "never");
    }
}
