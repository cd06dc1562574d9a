/// Backend API base URL
/// Fixed at compile time:
/// - Development: http://localhost:5000/api (default)
/// - Production: via API_URL env var (see build.rs)
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

/// localStorage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// localStorage key holding the JSON-encoded user record.
pub const USER_KEY: &str = "user";
