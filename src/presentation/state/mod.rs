//! Screen-local interaction state.
//!
//! Two primitives recur across every screen: a [`Selection`] picking one of a
//! closed set of views, and an [`Overlay`] tracking whether a transient
//! element (dropdown, modal, panel) is open, with outside-press dismissal.
//! Each screen owns its instances; nothing is shared across screens and
//! nothing outlives its screen.

mod overlay;
mod selection;

pub use overlay::Overlay;
pub use selection::{Selection, ViewCycle};
