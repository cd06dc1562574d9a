use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::Role;
use crate::policy::{decide, AccessDecision};
use crate::services::session;

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    /// Roles allowed to view the subtree; `None` admits any signed-in user.
    #[prop_or_default]
    pub allowed_roles: Option<&'static [Role]>,
    pub children: Children,
}

/// Route guard. Re-reads the session store on every evaluation, so a
/// logout in another component is picked up on the next navigation.
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    let session = session::get();
    let decision = decide(&session, props.allowed_roles);

    // The denial notice is a side effect, so it fires from an effect and
    // not from render. One mount per denied navigation = one notice.
    use_effect_with(decision, move |decision| {
        if *decision == AccessDecision::RedirectToDashboard {
            log::warn!("⛔ Navigation denied for current role, returning to dashboard");
            if let Some(window) = web_sys::window() {
                window
                    .alert_with_message("You do not have permission to view that page.")
                    .ok();
            }
        }
        || ()
    });

    match decision {
        AccessDecision::Allow => html! { <>{ for props.children.iter() }</> },
        AccessDecision::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        AccessDecision::RedirectToDashboard => {
            html! { <Redirect<Route> to={Route::Dashboard} /> }
        }
    }
}
