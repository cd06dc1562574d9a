pub mod layout;
pub mod navbar;
pub mod protected;
pub mod role_gate;
pub mod sidebar;

pub use layout::MainLayout;
pub use navbar::Navbar;
pub use protected::Protected;
pub use role_gate::RoleGate;
pub use sidebar::Sidebar;
