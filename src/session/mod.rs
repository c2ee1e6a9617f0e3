//! Client session and view routing.
//!
//! `Session` models the state a client keeps between requests: who is
//! signed in, which view is open, the service modal and the current toast.
//! The server opens one on login and registration; clients drive the rest.

pub mod state;
pub mod view;

pub use state::{ServiceModal, Session, SessionUser, Toast, ToastKind, TOAST_TTL_SECS};
pub use view::View;
