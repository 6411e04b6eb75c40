//! Dashboard events and the session they act on.
//!
//! Every user action is an explicit [`DashboardEvent`] dispatched to
//! [`Dashboard::handle`], which owns the single last-result snapshot and the
//! theme flag.

pub mod controls;
pub mod event;
pub mod handler;
pub mod session;

pub use controls::{ControlSource, LinkedControl, Parameter};
pub use event::{DashboardEvent, Event, FormInput};
pub use handler::{Dashboard, Outcome, Rendered, SensitivityView};
pub use session::Session;
