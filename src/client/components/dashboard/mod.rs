pub mod layout;
pub mod role_gate;
pub mod sidebar;

pub use layout::DashboardLayout;
pub use role_gate::RoleGate;
pub use sidebar::Sidebar;
