use yew::prelude::*;

use crate::components::{Navbar, Sidebar};

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    pub children: Children,
}

/// Authenticated shell: navbar on top, sidebar on the left, page content
/// in the remaining area.
#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    html! {
        <div class="app-container">
            <Navbar />
            <div class="main-layout">
                <Sidebar />
                <div class="content">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
