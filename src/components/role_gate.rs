use yew::prelude::*;

use crate::models::Role;
use crate::policy;
use crate::services::session;

#[derive(Properties, PartialEq)]
pub struct RoleGateProps {
    /// Roles allowed to see the children; `None` means any signed-in user.
    #[prop_or_default]
    pub allowed_roles: Option<&'static [Role]>,
    pub children: Children,
}

/// Shows or hides content based on the current user's role. Renders
/// nothing at all when hidden: no placeholder, no redirect, no notice.
#[function_component(RoleGate)]
pub fn role_gate(props: &RoleGateProps) -> Html {
    if policy::visible(&session::get(), props.allowed_roles) {
        html! { <>{ for props.children.iter() }</> }
    } else {
        Html::default()
    }
}
