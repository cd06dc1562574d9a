use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::session;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_navigator().unwrap();
    let session = session::get();

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("👋 Logging out");
            session::clear();
            navigator.push(&Route::Login);
        })
    };

    let (username, role_label) = match &session.user {
        Some(user) => (user.username.clone(), user.role.label()),
        None => (String::new(), ""),
    };

    html! {
        <nav class="navbar">
            <div class="navbar-brand">
                <h2>{ "🔐 IFDS" }</h2>
            </div>
            <div class="navbar-user">
                <span class="user-name">{ username }</span>
                <span class="user-role">{ format!("({})", role_label) }</span>
                <button class="logout-btn" onclick={on_logout}>
                    { "Logout" }
                </button>
            </div>
        </nav>
    }
}
