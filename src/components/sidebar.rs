use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::policy;
use crate::services::{session, Session};

pub struct MenuEntry {
    pub route: Route,
    pub label: &'static str,
    pub icon: &'static str,
}

const MENU: &[MenuEntry] = &[
    MenuEntry {
        route: Route::Dashboard,
        label: "Dashboard",
        icon: "🏠",
    },
    MenuEntry {
        route: Route::Inventory,
        label: "Inventory",
        icon: "📦",
    },
    MenuEntry {
        route: Route::Transactions,
        label: "Transactions",
        icon: "💰",
    },
    MenuEntry {
        route: Route::FraudAlerts,
        label: "Fraud Alerts",
        icon: "🚨",
    },
    MenuEntry {
        route: Route::Reports,
        label: "Reports",
        icon: "📊",
    },
];

/// Menu entries the session may see. Restricted entries are filtered out
/// of the list entirely, not rendered and hidden, and the restriction
/// comes from the same policy table the route guard uses.
fn menu_entries(session: &Session) -> Vec<&'static MenuEntry> {
    MENU.iter()
        .filter(|entry| policy::visible(session, policy::route_roles(&entry.route)))
        .collect()
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let session = session::get();
    let current = use_route::<Route>();

    html! {
        <div class="sidebar">
            { for menu_entries(&session).into_iter().map(|entry| {
                let active = current.as_ref() == Some(&entry.route);
                let classes = if active { "sidebar-item active" } else { "sidebar-item" };
                html! {
                    <Link<Route> classes={classes} to={entry.route.clone()}>
                        <span class="sidebar-icon">{ entry.icon }</span>
                        <span>{ entry.label }</span>
                    </Link<Route>>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};

    fn session_with(role: Role) -> Session {
        Session {
            token: Some("T1".to_string()),
            user: Some(User {
                id: 1,
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                role,
            }),
        }
    }

    #[test]
    fn staff_menu_drops_reports_entirely() {
        let labels: Vec<_> = menu_entries(&session_with(Role::Staff))
            .iter()
            .map(|entry| entry.label)
            .collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Inventory", "Transactions", "Fraud Alerts"]
        );
    }

    #[test]
    fn managers_and_admins_see_the_full_menu() {
        for role in [Role::Admin, Role::Manager] {
            assert_eq!(menu_entries(&session_with(role)).len(), MENU.len());
        }
    }

    #[test]
    fn no_session_means_no_menu() {
        assert!(menu_entries(&Session::default()).is_empty());
    }
}
