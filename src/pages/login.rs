use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::LoginRequest;
use crate::services::{api, session, ApiError};

fn login_error_message(error: &ApiError) -> String {
    error
        .server_message()
        .unwrap_or("Login failed. Please try again.")
        .to_string()
}

#[function_component(Login)]
pub fn login() -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator().unwrap();

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let credentials = LoginRequest {
                username: username_input.value(),
                password: password_input.value(),
            };

            error.set(None);
            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::login(&credentials).await {
                    Ok(response) => {
                        log::info!("✅ Logged in as {}", response.user.username);
                        session::set(&response.access_token, &response.user);
                        navigator.push(&Route::Dashboard);
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        error.set(Some(login_error_message(&e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="login-container">
            <div class="login-card">
                <h1>{ "🔐 IFDS Login" }</h1>
                <p class="subtitle">{ "AI-Powered Inventory Fraud Detection System" }</p>

                if let Some(message) = (*error).clone() {
                    <div class="error-message">{ message }</div>
                }

                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label>{ "Username" }</label>
                        <input
                            type="text"
                            placeholder="Enter username"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label>{ "Password" }</label>
                        <input
                            type="password"
                            placeholder="Enter password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" disabled={*loading} class="login-button">
                        { if *loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                <p class="register-hint">
                    { "No account yet? " }
                    <Link<Route> to={Route::Register}>{ "Register here" }</Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_wording_wins_when_present() {
        let error = ApiError::Http {
            status: 401,
            message: Some("Invalid username or password".to_string()),
        };
        assert_eq!(login_error_message(&error), "Invalid username or password");
    }

    #[test]
    fn generic_fallback_without_a_server_message() {
        let http = ApiError::Http {
            status: 500,
            message: None,
        };
        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(login_error_message(&http), "Login failed. Please try again.");
        assert_eq!(login_error_message(&network), "Login failed. Please try again.");
    }
}
