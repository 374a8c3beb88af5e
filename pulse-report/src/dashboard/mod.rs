//! Dashboard view controller
//!
//! State lives in [`DashboardState`] and only changes through [`update`], which
//! maps a [`Msg`] to a new state plus an [`Effect`]. Fetch effects run as tokio
//! tasks ([`exec`]) and come back as [`Msg::Settled`], applied in the order they
//! complete. Nothing is cancelled: the last settlement to arrive wins.

pub mod exec;
pub mod msg;
pub mod session;
pub mod state;
pub mod update;

pub use msg::{Msg, Settlement};
pub use session::DashboardSession;
pub use state::{DashboardState, Display, INITIAL_HEADER, LOADING_TEXT, PLACEHOLDER_TEXT};
pub use update::{update, Effect, FetchRequest};
