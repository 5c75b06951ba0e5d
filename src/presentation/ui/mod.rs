//! Screens and the application orchestrator.

pub mod app;
pub mod dashboard_screen;
pub mod department_screen;
pub mod login_screen;
pub mod out_of_office;
pub mod ticket_screen;
pub mod utils;

pub use app::App;
pub use dashboard_screen::{DashboardAction, DashboardScreen, DashboardScreenState, DashboardView};
pub use department_screen::{DepartmentAction, DepartmentScreen};
pub use login_screen::{LoginAction, LoginScreen};
pub use out_of_office::{OutOfOfficeState, OutOfOfficeTab};
pub use ticket_screen::{TicketDetailAction, TicketDetailState, TicketScreen, TicketTab};
