//! Terminal user interface.

pub mod events;
pub mod state;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use ui::App;
