// ============================================================================
// APP - router + root component
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{MainLayout, Protected};
use crate::pages::{Dashboard, FraudAlerts, Inventory, Login, Register, Reports, Transactions};
use crate::policy;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/inventory")]
    Inventory,
    #[at("/transactions")]
    Transactions,
    #[at("/fraud-alerts")]
    FraudAlerts,
    #[at("/reports")]
    Reports,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Wrap a page in the route guard and the authenticated shell. The role
/// restriction comes from the policy table, never from per-route literals.
fn protected(route: &Route, page: Html) -> Html {
    html! {
        <Protected allowed_roles={policy::route_roles(route)}>
            <MainLayout>
                { page }
            </MainLayout>
        </Protected>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Dashboard => protected(&route, html! { <Dashboard /> }),
        Route::Inventory => protected(&route, html! { <Inventory /> }),
        Route::Transactions => protected(&route, html! { <Transactions /> }),
        Route::FraudAlerts => protected(&route, html! { <FraudAlerts /> }),
        Route::Reports => protected(&route, html! { <Reports /> }),
        Route::NotFound => html! { <h1>{ "404 – Not Found" }</h1> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
