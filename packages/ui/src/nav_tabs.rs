use dioxus::prelude::*;

/// Top-level sections of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Ideas,
    Analytics,
    Admin,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Ideas,
        DashboardTab::Analytics,
        DashboardTab::Admin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Ideas => "Ideas",
            DashboardTab::Analytics => "Analytics",
            DashboardTab::Admin => "Admin",
        }
    }

    /// Tabs a user may see. Admin is hidden from non-admins.
    pub fn available(is_admin: bool) -> Vec<DashboardTab> {
        Self::ALL
            .into_iter()
            .filter(|tab| is_admin || *tab != DashboardTab::Admin)
            .collect()
    }
}

#[component]
pub fn NavTabs(
    active: DashboardTab,
    is_admin: bool,
    on_select: EventHandler<DashboardTab>,
) -> Element {
    rsx! {
        nav {
            class: "mv-tabs",
            for tab in DashboardTab::available(is_admin) {
                button {
                    key: "{tab.label()}",
                    class: if tab == active { "mv-tab mv-tab--active" } else { "mv-tab" },
                    onclick: move |_| on_select.call(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}
