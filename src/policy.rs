// ============================================================================
// ACCESS POLICY - pure decisions over (session, required roles)
// ============================================================================
// Single source of truth for the route guard, the sidebar menu filter and
// the inline role gates. Client-side only: a hidden button is a display
// hint, the backend still enforces the real boundary.
// ============================================================================

use crate::app::Route;
use crate::models::Role;
use crate::services::Session;

/// Outcome of a route-level access check.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AccessDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Route-level decision. Order matters: authentication is checked before
/// any role restriction, so an anonymous visit to a restricted route lands
/// on the login screen, not the dashboard.
pub fn decide(session: &Session, required_roles: Option<&[Role]>) -> AccessDecision {
    if session.token.is_none() || session.user.is_none() {
        return AccessDecision::RedirectToLogin;
    }
    if let (Some(required), Some(role)) = (required_roles, session.role()) {
        if !required.is_empty() && !required.contains(&role) {
            return AccessDecision::RedirectToDashboard;
        }
    }
    AccessDecision::Allow
}

/// Inline visibility check: true iff a session exists and its role is in
/// `allowed_roles`. An absent or empty set admits any authenticated role.
/// Never redirects or alerts, it only hides.
pub fn visible(session: &Session, allowed_roles: Option<&[Role]>) -> bool {
    if !session.is_authenticated() {
        return false;
    }
    match (allowed_roles, session.role()) {
        (Some(allowed), Some(role)) if !allowed.is_empty() => allowed.contains(&role),
        _ => true,
    }
}

/// Roles allowed to open the Reports screen.
pub const REPORT_ROLES: &[Role] = &[Role::Admin, Role::Manager];

/// Role restriction per route; `None` admits any authenticated user. Both
/// the route guard and the sidebar menu derive from this table.
pub fn route_roles(route: &Route) -> Option<&'static [Role]> {
    match route {
        Route::Reports => Some(REPORT_ROLES),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

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
    fn missing_token_or_user_redirects_to_login() {
        let mut without_user = session_with(Role::Admin);
        without_user.user = None;
        let mut without_token = session_with(Role::Admin);
        without_token.token = None;

        for session in [Session::default(), without_user, without_token] {
            assert_eq!(decide(&session, None), AccessDecision::RedirectToLogin);
            assert_eq!(
                decide(&session, Some(REPORT_ROLES)),
                AccessDecision::RedirectToLogin
            );
        }
    }

    #[test]
    fn authenticated_without_restriction_is_allowed() {
        for role in [Role::Admin, Role::Manager, Role::Staff] {
            assert_eq!(decide(&session_with(role), None), AccessDecision::Allow);
            assert_eq!(decide(&session_with(role), Some(&[])), AccessDecision::Allow);
        }
    }

    #[test]
    fn role_outside_required_set_redirects_to_dashboard() {
        assert_eq!(
            decide(&session_with(Role::Staff), Some(REPORT_ROLES)),
            AccessDecision::RedirectToDashboard
        );
        assert_eq!(
            decide(&session_with(Role::Manager), Some(REPORT_ROLES)),
            AccessDecision::Allow
        );
        assert_eq!(
            decide(&session_with(Role::Admin), Some(REPORT_ROLES)),
            AccessDecision::Allow
        );
    }

    #[test]
    fn decide_is_a_pure_function_of_its_inputs() {
        let session = session_with(Role::Staff);
        let first = decide(&session, Some(REPORT_ROLES));
        let second = decide(&session, Some(REPORT_ROLES));
        assert_eq!(first, second);
        assert_eq!(visible(&session, Some(REPORT_ROLES)), visible(&session, Some(REPORT_ROLES)));
    }

    #[test]
    fn visible_iff_role_in_allowed_set() {
        let allowed: &[Role] = &[Role::Admin, Role::Manager];
        for role in [Role::Admin, Role::Manager, Role::Staff] {
            assert_eq!(
                visible(&session_with(role), Some(allowed)),
                allowed.contains(&role)
            );
        }
    }

    #[test]
    fn visible_with_absent_or_empty_set_requires_only_a_session() {
        assert!(visible(&session_with(Role::Staff), None));
        assert!(visible(&session_with(Role::Staff), Some(&[])));
        assert!(!visible(&Session::default(), None));
        assert!(!visible(&Session::default(), Some(&[Role::Staff])));
    }

    #[test]
    fn only_reports_carries_a_role_restriction() {
        assert_eq!(route_roles(&Route::Reports), Some(REPORT_ROLES));
        for route in [
            Route::Dashboard,
            Route::Inventory,
            Route::Transactions,
            Route::FraudAlerts,
        ] {
            assert_eq!(route_roles(&route), None);
        }
    }
}
