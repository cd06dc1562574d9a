use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::{RegisterRequest, Role};
use crate::services::{api, ApiError};

/// Local checks that must pass before any request is sent.
fn validate(password: &str, confirm_password: &str) -> Result<(), String> {
    if password != confirm_password {
        return Err("Passwords do not match!".to_string());
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long!".to_string());
    }
    Ok(())
}

fn register_error_message(error: &ApiError) -> String {
    error
        .server_message()
        .unwrap_or("Registration failed. Please try again.")
        .to_string()
}

#[function_component(Register)]
pub fn register() -> Html {
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let role_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator().unwrap();

    let on_submit = {
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let role_ref = role_ref.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let (Some(username_input), Some(email_input), Some(password_input), Some(confirm_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let password = password_input.value();
            let confirm_password = confirm_input.value();
            if let Err(message) = validate(&password, &confirm_password) {
                error.set(Some(message));
                return;
            }

            let role = role_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| Role::parse(&select.value()))
                .unwrap_or(Role::Staff);
            let request = RegisterRequest {
                username: username_input.value(),
                email: email_input.value(),
                password,
                role,
            };

            loading.set(true);
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::register(&request).await {
                    Ok(_) => {
                        log::info!("✅ Registered {} as {}", request.username, request.role.as_str());
                        if let Some(window) = web_sys::window() {
                            window
                                .alert_with_message("Registration successful! Please login.")
                                .ok();
                        }
                        navigator.push(&Route::Login);
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        error.set(Some(register_error_message(&e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="login-container">
            <div class="login-card">
                <h1>{ "🔐 IFDS Register" }</h1>
                <p class="subtitle">{ "Create your account" }</p>

                if let Some(message) = (*error).clone() {
                    <div class="error-message">{ message }</div>
                }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{ "Username" }</label>
                        <input
                            type="text"
                            placeholder="Enter username"
                            minlength="3"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label>{ "Email" }</label>
                        <input
                            type="email"
                            placeholder="Enter email"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label>{ "Password" }</label>
                        <input
                            type="password"
                            placeholder="Enter password (min 8 characters)"
                            minlength="8"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label>{ "Confirm Password" }</label>
                        <input
                            type="password"
                            placeholder="Confirm password"
                            ref={confirm_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label>{ "Role" }</label>
                        <select ref={role_ref}>
                            <option value="staff" selected=true>{ "Staff" }</option>
                            <option value="manager">{ "Manager" }</option>
                            <option value="admin">{ "Admin" }</option>
                        </select>
                    </div>

                    <button type="submit" disabled={*loading} class="login-button">
                        { if *loading { "Registering..." } else { "Register" } }
                    </button>
                </form>

                <p class="register-hint">
                    { "Already have an account? " }
                    <Link<Route> to={Route::Login}>{ "Login here" }</Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_are_rejected_locally() {
        assert_eq!(
            validate("longenough1", "longenough2"),
            Err("Passwords do not match!".to_string())
        );
    }

    #[test]
    fn short_password_is_rejected_locally() {
        // Seven characters: one short of the minimum
        assert_eq!(
            validate("short12", "short12"),
            Err("Password must be at least 8 characters long!".to_string())
        );
    }

    #[test]
    fn mismatch_is_reported_before_length() {
        assert_eq!(
            validate("short", "other"),
            Err("Passwords do not match!".to_string())
        );
    }

    #[test]
    fn eight_characters_and_matching_passes() {
        assert_eq!(validate("exactly8", "exactly8"), Ok(()));
    }
}
