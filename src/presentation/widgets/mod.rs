//! Reusable widgets shared across screens.

pub mod escalate_modal;
pub mod footer_bar;
pub mod input;

pub use escalate_modal::{EscalateModal, EscalateModalAction, EscalateModalState};
pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint};
pub use input::TextInput;
