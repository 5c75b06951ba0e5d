//! Fixed sample record sets.
//!
//! Screens call these constructors once when they are created and hold the
//! returned values for their whole lifetime. Nothing in the UI writes back
//! into these records.

use super::entities::{
    ActivityEntry, ActivityKind, AppointmentSlot, Attachment, AttachmentKind, Department,
    DepartmentId, InventoryStock, KbArticle, OutOfOfficeRequest, RequestStatus, SenderKind,
    TaskItem, TaskStatus, ThreadMessage, Ticket, TicketStatus, UnassignedTicket, UpdateUrgency,
};

/// Name of the signed-in technician.
pub const AGENT_NAME: &str = "Yogi Danis";

/// Date of the last inventory stock audit.
pub const LAST_STOCK_AUDIT: &str = "03/17/23";

/// Tickets assigned to the signed-in technician.
#[must_use]
pub fn my_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(
            "INC4568",
            "04/12/23",
            "08:24AM",
            "Error when starting Microsoft Word",
            "Marso.27",
            TicketStatus::Wip,
            "23min",
            UpdateUrgency::Fresh,
        ),
        Ticket::new(
            "RITM4321",
            "04/11/23",
            "10:07AM",
            "Assistance moving desktop computer",
            "Deppert.5",
            TicketStatus::Assigned,
            "1hr",
            UpdateUrgency::Fresh,
        ),
        Ticket::new(
            "RITM4268",
            "04/10/23",
            "02:34PM",
            "I'd like to order a new webcam",
            "Miller.409",
            TicketStatus::Pending,
            "2 days",
            UpdateUrgency::Overdue,
        ),
        Ticket::new(
            "RITM4599",
            "04/10/23",
            "09:15AM",
            "Need access to shared drive",
            "Smith.839",
            TicketStatus::Wip,
            "4min",
            UpdateUrgency::Fresh,
        ),
        Ticket::new(
            "INC4567",
            "04/08/23",
            "08:24AM",
            "Can't sign into app",
            "Shulz.45",
            TicketStatus::Pending,
            "1 day",
            UpdateUrgency::Stale,
        ),
    ]
}

/// Badge count on the Incidents navigation item.
pub const INCIDENT_BADGE: u32 = 39;

/// Badge count on the Out of Office navigation item.
pub const OUT_OF_OFFICE_BADGE: u32 = 4;

/// Count of currently open tickets shown in the "My Tickets" header.
pub const CURRENT_TICKETS: u32 = 8;

/// Count of closed tickets shown in the "My Tickets" header.
pub const CLOSED_TICKETS: u32 = 5;

/// Tickets without an assignee.
#[must_use]
pub fn unassigned_tickets() -> Vec<UnassignedTicket> {
    vec![
        UnassignedTicket::new(
            "RITM4579",
            "04/12/23",
            "10:40PM",
            "Need assistance with powerpoint",
            "Lynn.2",
            None,
        ),
        UnassignedTicket::new(
            "RITM4344",
            "04/12/23",
            "10:17AM",
            "Requesting info about new app",
            "Mackay.43",
            None,
        ),
        UnassignedTicket::new(
            "INC4298",
            "04/12/23",
            "08:34PM",
            "Keyboard not responding",
            "Wilson.25",
            Some("Levinson.2".to_string()),
        ),
        UnassignedTicket::new(
            "RITM4601",
            "04/11/23",
            "07:37AM",
            "Financial app access needed",
            "Fry.36",
            None,
        ),
    ]
}

/// Tasks assigned to the signed-in technician.
#[must_use]
pub fn my_tasks() -> Vec<TaskItem> {
    vec![
        TaskItem::new(
            "TASK3596",
            "04/12/23",
            "08:24AM",
            "Install software in Computer Lab 23",
            TaskStatus::InProgress,
        ),
        TaskItem::new(
            "TASK3575",
            "04/11/23",
            "10:07AM",
            "Image recent computer order",
            TaskStatus::Assigned,
        ),
        TaskItem::new(
            "TASK3571",
            "04/10/23",
            "02:34PM",
            "Order more webcams",
            TaskStatus::InProgress,
        ),
        TaskItem::new(
            "TASK3436",
            "04/10/23",
            "01:02PM",
            "Perform a stock audit",
            TaskStatus::Assigned,
        ),
    ]
}

/// Today's appointment timeline, hour slots 8AM through 3PM.
#[must_use]
pub fn appointments() -> Vec<AppointmentSlot> {
    vec![
        AppointmentSlot::booked(8, "8:30 - 9:30 AM - Team Meeting"),
        AppointmentSlot::free(9),
        AppointmentSlot::booked(10, "10 - 10:30 AM - INC4567 Call"),
        AppointmentSlot::free(11),
        AppointmentSlot::booked(12, "12 - 1PM - Lunch Break"),
        AppointmentSlot::free(1),
        AppointmentSlot::free(2),
        AppointmentSlot::free(3),
    ]
}

/// Current hardware stock counts.
#[must_use]
pub fn inventory_stock() -> Vec<InventoryStock> {
    vec![
        InventoryStock::new("Desktops", 58),
        InventoryStock::new("Laptops", 18),
        InventoryStock::new("Tablets", 35),
    ]
}

/// Activity log for a ticket detail view.
#[must_use]
pub fn activities() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry::new(
            ActivityKind::StatusChange,
            "Status changed from New to Open",
            "System",
            "28 Feb 2025 - 10:40 PM",
        ),
        ActivityEntry::new(
            ActivityKind::Created,
            "Ticket Created",
            "John Doe",
            "28 Feb 2025 - 10:39 PM",
        ),
        ActivityEntry::new(
            ActivityKind::Assigned,
            "Assigned to Mike Ross",
            "System Automated Rule",
            "28 Feb 2025 - 10:45 PM",
        ),
    ]
}

/// Attachments for a ticket detail view.
#[must_use]
pub fn attachments() -> Vec<Attachment> {
    vec![
        Attachment::new("screenshot_error_sap.png", "2.4 MB", AttachmentKind::Image),
        Attachment::new("system_logs.txt", "15 KB", AttachmentKind::File),
    ]
}

/// Conversation thread for a ticket detail view.
#[must_use]
pub fn conversation(ticket_id: &str) -> Vec<ThreadMessage> {
    vec![
        ThreadMessage::new(
            "Hippo Bot",
            SenderKind::Bot,
            format!(
                "Thank you for contacting us. We have opened case {ticket_id} to address your \
                 request. Sincerely,"
            ),
            "Read • 28 Feb 2025 - 6:40 PM",
        ),
        ThreadMessage::new(
            "John Doe",
            SenderKind::Requester,
            "The user interface, while functional, was somewhat confusing in certain areas, \
             making it challenging to navigate and use effectively. This lack of clarity could \
             potentially hinder users from fully utilizing the platform's features.",
            "Read • 28 Feb 2025 - 12:40 PM",
        ),
        ThreadMessage::new(
            "Agent",
            SenderKind::Agent,
            "Thank you for your feedback. We're working to improve the interface for better \
             clarity and usability while also addressing any language errors. Best regards,",
            "Read • 28 Feb 2025 - 10:45 PM",
        ),
        ThreadMessage::new(
            "Agent",
            SenderKind::Agent,
            "Hello again, we've made some updates based on your feedback. Could you please check \
             and let us know if everything looks good on your end? Best regards,",
            "Read • 28 Feb 2025 - 10:45 PM",
        ),
    ]
}

/// Creation date shown in the ticket detail side card.
pub const TICKET_CREATED: &str = "28 Feb 2025";

/// Requester satisfaction rating out of [`TICKET_RATING_MAX`].
pub const TICKET_RATING: usize = 4;

/// Maximum satisfaction rating.
pub const TICKET_RATING_MAX: usize = 5;

/// Priority label shown in the ticket detail side card.
pub const TICKET_PRIORITY: &str = "Medium";

/// List the ticket is filed under.
pub const TICKET_LIST: &str = "Open Tickets";

/// Labels attached to the ticket.
pub const TICKET_LABELS: [&str; 2] = ["SAP", "Software"];

/// People a ticket can be shared with, requester first.
#[must_use]
pub fn ticket_contacts() -> Vec<(String, String)> {
    vec![
        ("John Doe".to_string(), "johndoe@gmail.com".to_string()),
        ("Jane Walker".to_string(), "johndoe@gmail.com".to_string()),
        ("Evelyn Milton".to_string(), "johndoe@gmail.com".to_string()),
    ]
}

/// Department cards in display order.
#[must_use]
pub fn departments() -> Vec<Department> {
    vec![
        Department::new(
            DepartmentId::Dit,
            "DIT",
            "Digital Infrastructure",
            vec![
                "Network Security".to_string(),
                "Hardware Support".to_string(),
                "Application Support".to_string(),
            ],
            true,
        ),
        Department::new(
            DepartmentId::Creative,
            "CREATIVE",
            "Design & Branding",
            vec![
                "Brand Identity".to_string(),
                "UI/UX Design".to_string(),
                "Motion Graphics".to_string(),
            ],
            false,
        ),
        Department::new(
            DepartmentId::Hco,
            "HCO",
            "Human Capital",
            vec![
                "Talent Acquisition".to_string(),
                "Employee Relations".to_string(),
                "Payroll Systems".to_string(),
            ],
            false,
        ),
        Department::new(
            DepartmentId::Legal,
            "LEGAL",
            "Compliance & Law",
            vec![
                "Contract Review".to_string(),
                "Risk Assessment".to_string(),
                "Regulatory Filing".to_string(),
            ],
            false,
        ),
        Department::new(
            DepartmentId::Crm,
            "CRM",
            "Customer Relations",
            vec![
                "Socmed Buzz".to_string(),
                "Campaign Blast".to_string(),
                "Event Visit".to_string(),
            ],
            false,
        ),
    ]
}

/// Recently submitted out-of-office requests.
#[must_use]
pub fn recent_requests() -> Vec<OutOfOfficeRequest> {
    vec![
        OutOfOfficeRequest::new(
            "22 Nov 2025",
            "22 Nov 2025",
            "Naik Gunung",
            RequestStatus::Approved,
        ),
        OutOfOfficeRequest::new("11 Nov 2025", "11 Nov 2025", "Sakit", RequestStatus::Approved),
        OutOfOfficeRequest::new("10 Nov 2025", "10 Nov 2025", "Sakit", RequestStatus::Approved),
    ]
}

/// Published knowledge base articles.
#[must_use]
pub fn kb_articles() -> Vec<KbArticle> {
    vec![
        KbArticle::new(
            "Resetting your domain password",
            "Accounts",
            "Self-service steps for expired or forgotten domain passwords.",
            "03/02/23",
        ),
        KbArticle::new(
            "Mapping a shared network drive",
            "Network",
            "How to request access and map departmental shares on Windows.",
            "02/21/23",
        ),
        KbArticle::new(
            "VPN setup on personal devices",
            "Network",
            "Supported clients and enrollment steps for remote access.",
            "02/14/23",
        ),
        KbArticle::new(
            "Ordering peripherals",
            "Hardware",
            "Catalog items, approval flow and expected delivery times.",
            "01/30/23",
        ),
        KbArticle::new(
            "Microsoft Office keeps crashing",
            "Software",
            "Known fixes for Office startup errors after the 2304 update.",
            "01/12/23",
        ),
    ]
}

/// Sidebar settings sub-items revealed when Settings is expanded.
pub const SETTINGS_ITEMS: [&str; 6] = [
    "User Management",
    "Group Management",
    "SLA Management",
    "Business Hours",
    "Categories",
    "Service Request Fields",
];

/// Second-level helpers selectable in the escalate dialog.
#[must_use]
pub fn escalation_helpers() -> Vec<(String, String)> {
    vec![
        ("Mike Ross (Senior Dev)".to_string(), "helper1@company.com".to_string()),
        ("Rachel Zane (Legal)".to_string(), "helper2@company.com".to_string()),
        ("Harvey Specter (Manager)".to_string(), "helper3@company.com".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_sets_are_nonempty() {
        assert_eq!(my_tickets().len(), 5);
        assert_eq!(unassigned_tickets().len(), 4);
        assert_eq!(my_tasks().len(), 4);
        assert_eq!(departments().len(), 5);
        assert_eq!(kb_articles().len(), 5);
        assert_eq!(recent_requests().len(), 3);
    }

    #[test]
    fn test_conversation_mentions_ticket() {
        let thread = conversation("INC4568");
        assert!(thread[0].body().contains("INC4568"));
    }

    #[test]
    fn test_appointments_cover_working_day() {
        let slots = appointments();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.iter().filter(|s| s.booking.is_some()).count(), 3);
    }
}
