//! Authentication: session lifecycle on top of a [`crate::Backend`].

mod session;

pub use session::{AuthFailure, Session, SessionManager};
