//! Screens shared by the web and desktop shells. Navigation is left to the
//! caller through `on_*` callbacks so each platform can plug in its router.

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod dashboard;
pub use dashboard::DashboardView;

mod ideas;
pub use ideas::IdeasView;
