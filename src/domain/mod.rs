//! Domain layer with helpdesk entities and the fixed sample data sets.

/// Entity definitions.
pub mod entities;
/// Sample record sets displayed by the UI.
pub mod sample;

pub use entities::{Department, DepartmentId, Ticket, TicketStatus};
