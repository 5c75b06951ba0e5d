//! Ticket detail screen: conversation, activity log, attachments.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::domain::entities::{
    ActivityEntry, Attachment, AttachmentKind, SenderKind, ThreadMessage, Ticket,
};
use crate::domain::sample;
use crate::presentation::state::{Overlay, Selection, ViewCycle};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    EscalateModal, EscalateModalAction, EscalateModalState, TextInput,
};

/// Tabs of the ticket detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketTab {
    Detail,
    Activities,
    Attachments,
}

impl TicketTab {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Detail => "Detail",
            Self::Activities => "Activities",
            Self::Attachments => "Attachments",
        }
    }
}

impl ViewCycle for TicketTab {
    const ALL: &'static [Self] = &[Self::Detail, Self::Activities, Self::Attachments];
}

/// What the app should do after the ticket screen handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketDetailAction {
    None,
    Consumed,
    /// Return to the dashboard.
    Back,
}

/// State of the ticket detail screen.
///
/// The active tab, the action menu and the escalate dialog are local
/// state. Going back is independent of the action menu: Back fires whether
/// or not the menu happens to be open.
pub struct TicketDetailState {
    ticket: Ticket,
    tab: Selection<TicketTab>,
    action_menu: Overlay,
    escalate: EscalateModalState,
    reply_input: TextInput,
    conversation: Vec<ThreadMessage>,
    activities: Vec<ActivityEntry>,
    attachments: Vec<Attachment>,
    contacts: Vec<(String, String)>,
    tab_regions: [Rect; 3],
    back_region: Rect,
    pending_item_region: Rect,
    resolved_item_region: Rect,
    escalate_item_region: Rect,
    reply_region: Rect,
}

impl TicketDetailState {
    /// Creates the detail state for the ticket with the given id, falling
    /// back to the first known ticket.
    #[must_use]
    pub fn new(ticket_id: &str) -> Self {
        let mut tickets = sample::my_tickets();
        let position = tickets.iter().position(|t| t.id() == ticket_id).unwrap_or(0);
        let ticket = tickets.swap_remove(position);

        Self {
            conversation: sample::conversation(ticket.id()),
            ticket,
            tab: Selection::new(TicketTab::Detail),
            action_menu: Overlay::new(),
            escalate: EscalateModalState::new(),
            reply_input: TextInput::new("Reply").placeholder("Type a reply... (i to focus)"),
            activities: sample::activities(),
            attachments: sample::attachments(),
            contacts: sample::ticket_contacts(),
            tab_regions: [Rect::default(); 3],
            back_region: Rect::default(),
            pending_item_region: Rect::default(),
            resolved_item_region: Rect::default(),
            escalate_item_region: Rect::default(),
            reply_region: Rect::default(),
        }
    }

    #[must_use]
    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    #[must_use]
    pub fn active_tab(&self) -> TicketTab {
        self.tab.active()
    }

    pub fn select_tab(&mut self, tab: TicketTab) {
        self.tab.select(tab);
    }

    #[must_use]
    pub fn action_menu_open(&self) -> bool {
        self.action_menu.is_open()
    }

    pub fn toggle_action_menu(&mut self) {
        self.action_menu.toggle();
    }

    #[must_use]
    pub fn escalate_open(&self) -> bool {
        self.escalate.is_open()
    }

    pub fn open_escalate(&mut self) {
        self.action_menu.close();
        self.escalate.open();
    }

    fn send_escalation(&mut self) {
        let (helper, email) = self.escalate.selected_helper();
        tracing::info!(
            ticket = self.ticket.id(),
            helper = %helper,
            email = %email,
            message_len = self.escalate.message().len(),
            "ticket escalated"
        );
        self.escalate.close();
    }

    fn send_reply(&mut self) {
        if self.reply_input.is_empty() {
            return;
        }
        tracing::info!(
            ticket = self.ticket.id(),
            chars = self.reply_input.len(),
            "reply sent"
        );
        self.reply_input.clear();
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> TicketDetailAction {
        if self.escalate.is_open() {
            match self.escalate.handle_key(key) {
                EscalateModalAction::Close => self.escalate.close(),
                EscalateModalAction::Send => self.send_escalation(),
                EscalateModalAction::Consumed | EscalateModalAction::None => {}
            }
            return TicketDetailAction::Consumed;
        }

        if self.reply_input.is_focused() {
            match key.code {
                KeyCode::Esc => self.reply_input.set_focused(false),
                KeyCode::Enter => self.send_reply(),
                _ => {
                    self.reply_input.handle_key(key);
                }
            }
            return TicketDetailAction::Consumed;
        }

        match key.code {
            // Back works the same whether or not the action menu is open.
            KeyCode::Char('b') => TicketDetailAction::Back,
            KeyCode::Esc => {
                if self.action_menu.is_open() {
                    self.action_menu.close();
                    TicketDetailAction::Consumed
                } else {
                    TicketDetailAction::Back
                }
            }
            KeyCode::Char('e') => {
                self.open_escalate();
                TicketDetailAction::Consumed
            }
            KeyCode::Char('m') => {
                self.action_menu.toggle();
                TicketDetailAction::Consumed
            }
            KeyCode::Char('i') if self.tab.active() == TicketTab::Detail => {
                self.reply_input.set_focused(true);
                TicketDetailAction::Consumed
            }
            KeyCode::Tab => {
                self.tab.select_next();
                TicketDetailAction::Consumed
            }
            KeyCode::BackTab => {
                self.tab.select_previous();
                TicketDetailAction::Consumed
            }
            _ => TicketDetailAction::None,
        }
    }

    /// Routes a left pointer-down. The dismissal pass for the escalate
    /// dialog and the action menu runs before anything else.
    pub fn handle_press(&mut self, position: Position) -> TicketDetailAction {
        self.escalate.dismiss_on_outside_press(position);
        self.action_menu.dismiss_on_outside_press(position);

        if self.escalate.is_open() {
            match self.escalate.handle_press(position) {
                EscalateModalAction::Close => {
                    self.escalate.close();
                    return TicketDetailAction::Consumed;
                }
                EscalateModalAction::Send => {
                    self.send_escalation();
                    return TicketDetailAction::Consumed;
                }
                EscalateModalAction::Consumed => return TicketDetailAction::Consumed,
                EscalateModalAction::None => {}
            }
        }

        if self.action_menu.is_open() {
            // The status items are display-only; nothing here mutates the
            // fixed record sets.
            if self.pending_item_region.contains(position) {
                tracing::debug!(ticket = self.ticket.id(), "status item pressed: Pending");
                self.action_menu.close();
                return TicketDetailAction::Consumed;
            }
            if self.resolved_item_region.contains(position) {
                tracing::debug!(ticket = self.ticket.id(), "status item pressed: Resolved");
                self.action_menu.close();
                return TicketDetailAction::Consumed;
            }
            if self.escalate_item_region.contains(position) {
                self.open_escalate();
                return TicketDetailAction::Consumed;
            }
        }

        if self.action_menu.on_toggle(position) {
            self.action_menu.toggle();
            return TicketDetailAction::Consumed;
        }

        if self.back_region.contains(position) {
            return TicketDetailAction::Back;
        }

        for (i, tab) in TicketTab::ALL.iter().enumerate() {
            if self.tab_regions[i].contains(position) {
                self.tab.select(*tab);
                return TicketDetailAction::Consumed;
            }
        }

        if self.reply_region.contains(position) {
            self.reply_input.set_focused(true);
            return TicketDetailAction::Consumed;
        }

        TicketDetailAction::None
    }
}

/// Renders the ticket detail screen.
pub struct TicketScreen<'a> {
    theme: &'a Theme,
}

impl<'a> TicketScreen<'a> {
    #[must_use]
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, state: &mut TicketDetailState) {
        let [back, title, action] = Layout::horizontal([
            Constraint::Length(9),
            Constraint::Fill(1),
            Constraint::Length(5),
        ])
        .areas(area);

        state.back_region = back;
        Paragraph::new(Span::styled(
            " < Back ",
            Style::default().fg(Color::Black).bg(Color::Gray),
        ))
        .render(back, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", state.ticket.id()),
                self.theme.highlight_style,
            ),
            Span::styled(state.ticket.subject().to_string(), Style::default().fg(Color::White)),
            Span::styled(
                format!("  [{}]", state.ticket.status().label()),
                self.theme.dimmed_style,
            ),
        ]))
        .render(title, buf);

        state.action_menu.set_toggle_region(action);
        Paragraph::new(Span::styled(
            "  ⋮  ",
            Style::default().fg(Color::Black).bg(Color::Gray),
        ))
        .render(action, buf);
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer, state: &mut TicketDetailState) {
        let columns = Layout::horizontal([
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
        ])
        .split(area);

        for (i, tab) in TicketTab::ALL.iter().enumerate() {
            state.tab_regions[i] = columns[i];
            let style = if state.tab.is_active(*tab) {
                self.theme.highlight_style
            } else {
                self.theme.dimmed_style
            };
            Paragraph::new(Span::styled(format!(" {} ", tab.title()), style))
                .render(columns[i], buf);
        }
    }

    fn sender_style(&self, kind: SenderKind) -> Style {
        match kind {
            SenderKind::Bot => self.theme.dimmed_style,
            SenderKind::Requester => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            SenderKind::Agent => self.theme.highlight_style,
        }
    }

    fn render_conversation(&self, area: Rect, buf: &mut Buffer, state: &mut TicketDetailState) {
        let [thread_area, reply_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(area);

        let mut lines = Vec::new();
        for message in &state.conversation {
            lines.push(Line::from(vec![
                Span::styled(message.sender().to_string(), self.sender_style(message.kind())),
                Span::styled(format!("  {}", message.sent_at()), self.theme.dimmed_style),
            ]));
            lines.push(Line::raw(message.body().to_string()));
            lines.push(Line::raw(""));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(thread_area, buf);

        state.reply_region = reply_area;
        (&state.reply_input).render(reply_area, buf);
    }

    fn render_meta(&self, area: Rect, buf: &mut Buffer, state: &TicketDetailState) {
        let block = Block::default().borders(Borders::ALL).title(" Details ");
        let inner = block.inner(area);
        block.render(area, buf);

        let stars = format!(
            "{}{} {}/{}",
            "★".repeat(sample::TICKET_RATING),
            "☆".repeat(sample::TICKET_RATING_MAX - sample::TICKET_RATING),
            sample::TICKET_RATING,
            sample::TICKET_RATING_MAX
        );
        let label = |text: &'static str| Span::styled(format!("{text:<10}"), self.theme.dimmed_style);
        let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

        let lines = vec![
            Line::from(vec![label("Created"), value(sample::TICKET_CREATED.to_string())]),
            Line::from(vec![
                label("Rating"),
                Span::styled(stars, Style::default().fg(Color::Yellow)),
            ]),
            Line::from(vec![label("Labels"), value(sample::TICKET_LABELS.join(", "))]),
            Line::from(vec![label("List"), value(sample::TICKET_LIST.to_string())]),
            Line::from(vec![label("Members"), value(state.contacts.len().to_string())]),
            Line::from(vec![label("Priority"), value(sample::TICKET_PRIORITY.to_string())]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_contacts(&self, area: Rect, buf: &mut Buffer, state: &TicketDetailState) {
        let block = Block::default().borders(Borders::ALL).title(" People ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(vec![
            Span::styled("Requester  ", self.theme.dimmed_style),
            Span::styled(state.ticket.requester().to_string(), Style::default().fg(Color::White)),
        ])];
        lines.push(Line::raw(""));
        for (name, email) in &state.contacts {
            lines.push(Line::from(Span::styled(
                name.clone(),
                Style::default().fg(Color::White),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {email}"),
                self.theme.dimmed_style,
            )));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_activities(&self, area: Rect, buf: &mut Buffer, state: &TicketDetailState) {
        let mut lines = Vec::new();
        for entry in &state.activities {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", entry.kind().glyph()),
                    self.theme.highlight_style,
                ),
                Span::styled(entry.title().to_string(), Style::default().fg(Color::White)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {} · {}", entry.actor(), entry.timestamp()),
                self.theme.dimmed_style,
            )));
            lines.push(Line::raw(""));
        }
        Paragraph::new(lines).render(area, buf);
    }

    fn render_attachments(&self, area: Rect, buf: &mut Buffer, state: &TicketDetailState) {
        let mut lines = Vec::new();
        for attachment in &state.attachments {
            let icon = match attachment.kind() {
                AttachmentKind::Image => "▣",
                AttachmentKind::File => "▤",
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {icon} "), self.theme.highlight_style),
                Span::styled(attachment.name().to_string(), Style::default().fg(Color::White)),
                Span::styled(format!("  {}", attachment.size()), self.theme.dimmed_style),
            ]));
        }
        Paragraph::new(lines).render(area, buf);
    }

    fn render_action_menu(&self, area: Rect, buf: &mut Buffer, state: &mut TicketDetailState) {
        let width = 22;
        let x = area.right().saturating_sub(width + 1);
        let menu = Rect::new(x, area.y + 1, width, 5);
        state.action_menu.set_region(menu);

        Clear.render(menu, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(menu);
        block.render(menu, buf);

        state.pending_item_region = Rect::new(inner.x, inner.y, inner.width, 1);
        Paragraph::new(Span::styled(" Pending", Style::default().fg(Color::Yellow)))
            .render(state.pending_item_region, buf);

        state.resolved_item_region = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        Paragraph::new(Span::styled(" Resolved", Style::default().fg(Color::Green)))
            .render(state.resolved_item_region, buf);

        state.escalate_item_region = Rect::new(inner.x, inner.y + 2, inner.width, 1);
        Paragraph::new(Span::raw(" Escalate Ticket (e)")).render(state.escalate_item_region, buf);
    }
}

impl StatefulWidget for TicketScreen<'_> {
    type State = TicketDetailState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header, tabs, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(area);

        self.render_header(header, buf, state);
        self.render_tabs(tabs, buf, state);

        match state.tab.active() {
            TicketTab::Detail => {
                let [thread, side] =
                    Layout::horizontal([Constraint::Fill(3), Constraint::Length(30)]).areas(body);
                self.render_conversation(thread, buf, state);
                let [meta, contacts] =
                    Layout::vertical([Constraint::Length(8), Constraint::Fill(1)]).areas(side);
                self.render_meta(meta, buf, state);
                self.render_contacts(contacts, buf, state);
            }
            TicketTab::Activities => self.render_activities(body, buf, state),
            TicketTab::Attachments => self.render_attachments(body, buf, state),
        }

        if state.action_menu.is_open() {
            self.render_action_menu(area, buf, state);
        } else {
            state.action_menu.set_region(Rect::default());
            state.pending_item_region = Rect::default();
            state.resolved_item_region = Rect::default();
            state.escalate_item_region = Rect::default();
        }

        if state.escalate.is_open() {
            EscalateModal::new(state.ticket.id(), self.theme).render(
                area,
                buf,
                &mut state.escalate,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> TicketDetailState {
        TicketDetailState::new("INC4568")
    }

    #[test]
    fn test_looks_up_ticket_by_id() {
        let s = state();
        assert_eq!(s.ticket().id(), "INC4568");
        assert_eq!(s.active_tab(), TicketTab::Detail);
    }

    #[test]
    fn test_unknown_id_falls_back_to_first_ticket() {
        let s = TicketDetailState::new("INC9999");
        assert_eq!(s.ticket().id(), "INC4568");
    }

    #[test_case(TicketTab::Activities ; "activities")]
    #[test_case(TicketTab::Attachments ; "attachments")]
    fn test_tab_selection(target: TicketTab) {
        let mut s = state();
        s.select_tab(target);
        assert_eq!(s.active_tab(), target);
    }

    #[test]
    fn test_back_ignores_action_menu_state() {
        let mut s = state();
        assert_eq!(s.handle_key(&key(KeyCode::Char('b'))), TicketDetailAction::Back);

        let mut s = state();
        s.toggle_action_menu();
        assert_eq!(s.handle_key(&key(KeyCode::Char('b'))), TicketDetailAction::Back);
        assert!(s.action_menu_open());
    }

    #[test]
    fn test_esc_closes_menu_before_going_back() {
        let mut s = state();
        s.toggle_action_menu();
        assert_eq!(s.handle_key(&key(KeyCode::Esc)), TicketDetailAction::Consumed);
        assert!(!s.action_menu_open());
        assert_eq!(s.handle_key(&key(KeyCode::Esc)), TicketDetailAction::Back);
    }

    #[test]
    fn test_escalate_opens_from_menu_and_closes_it() {
        let mut s = state();
        s.toggle_action_menu();
        s.handle_key(&key(KeyCode::Char('e')));
        assert!(s.escalate_open());
        assert!(!s.action_menu_open());
    }

    #[test]
    fn test_escalate_send_closes_dialog() {
        let mut s = state();
        s.open_escalate();
        s.handle_key(&key(KeyCode::Char('h')));
        s.handle_key(&key(KeyCode::Char('i')));
        assert_eq!(s.handle_key(&key(KeyCode::Enter)), TicketDetailAction::Consumed);
        assert!(!s.escalate_open());
    }

    #[test]
    fn test_reply_focus_captures_back_key() {
        let mut s = state();
        s.handle_key(&key(KeyCode::Char('i')));
        assert_eq!(
            s.handle_key(&key(KeyCode::Char('b'))),
            TicketDetailAction::Consumed
        );
        assert_eq!(s.reply_input.value(), "b");

        s.handle_key(&key(KeyCode::Esc));
        assert_eq!(s.handle_key(&key(KeyCode::Char('b'))), TicketDetailAction::Back);
    }

    #[test]
    fn test_reply_send_clears_input() {
        let mut s = state();
        s.handle_key(&key(KeyCode::Char('i')));
        s.handle_key(&key(KeyCode::Char('o')));
        s.handle_key(&key(KeyCode::Char('k')));
        s.handle_key(&key(KeyCode::Enter));
        assert!(s.reply_input.is_empty());
    }

    #[test]
    fn test_press_outside_menu_dismisses_then_routes() {
        let mut s = state();
        s.toggle_action_menu();
        s.action_menu.set_region(Rect::new(50, 2, 22, 3));
        s.back_region = Rect::new(0, 0, 9, 1);

        // The same press closes the menu and hits Back underneath.
        let action = s.handle_press(Position::new(3, 0));
        assert!(!s.action_menu_open());
        assert_eq!(action, TicketDetailAction::Back);
    }

    #[test]
    fn test_press_on_menu_item_escalates() {
        let mut s = state();
        s.toggle_action_menu();
        s.action_menu.set_region(Rect::new(50, 2, 22, 3));
        s.escalate_item_region = Rect::new(51, 3, 20, 1);

        assert_eq!(
            s.handle_press(Position::new(55, 3)),
            TicketDetailAction::Consumed
        );
        assert!(s.escalate_open());
    }

    #[test]
    fn test_press_on_status_item_closes_menu() {
        let mut s = state();
        s.toggle_action_menu();
        s.action_menu.set_region(Rect::new(50, 2, 22, 5));
        s.pending_item_region = Rect::new(51, 3, 20, 1);
        s.resolved_item_region = Rect::new(51, 4, 20, 1);

        assert_eq!(
            s.handle_press(Position::new(55, 3)),
            TicketDetailAction::Consumed
        );
        assert!(!s.action_menu_open());
        assert!(!s.escalate_open());

        s.toggle_action_menu();
        assert_eq!(
            s.handle_press(Position::new(55, 4)),
            TicketDetailAction::Consumed
        );
        assert!(!s.action_menu_open());
    }

    #[test]
    fn test_detail_side_panel_shows_meta_card() {
        let theme = Theme::default();
        let mut s = state();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        TicketScreen::new(&theme).render(area, &mut buf, &mut s);

        let mut rows = Vec::new();
        for y in area.top()..area.bottom() {
            let row: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            rows.push(row);
        }
        let screen = rows.join("\n");
        assert!(screen.contains("Priority"));
        assert!(screen.contains("Medium"));
        assert!(screen.contains(sample::TICKET_CREATED));
    }

    #[test]
    fn test_press_switches_tab() {
        let mut s = state();
        s.tab_regions[2] = Rect::new(28, 1, 14, 1);
        assert_eq!(
            s.handle_press(Position::new(30, 1)),
            TicketDetailAction::Consumed
        );
        assert_eq!(s.active_tab(), TicketTab::Attachments);
    }
}
