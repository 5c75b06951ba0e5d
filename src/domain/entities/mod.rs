//! Domain entity definitions.
//!
//! Every type here is a read-only value object sourced from a fixed sample
//! set. Instances are constructed once when a screen is created and are never
//! mutated by the UI layer.

mod activity;
mod appointment;
mod attachment;
mod department;
mod inventory;
mod knowledge;
mod message;
mod out_of_office;
mod task;
mod ticket;

pub use activity::{ActivityEntry, ActivityKind};
pub use appointment::AppointmentSlot;
pub use attachment::{Attachment, AttachmentKind};
pub use department::{Department, DepartmentId};
pub use inventory::InventoryStock;
pub use knowledge::KbArticle;
pub use message::{SenderKind, ThreadMessage};
pub use out_of_office::{OutOfOfficeRequest, RequestStatus};
pub use task::{TaskItem, TaskStatus};
pub use ticket::{Ticket, TicketStatus, UnassignedTicket, UpdateUrgency};
