//! Department dashboard: sidebar navigation, main views and overlays.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{
    AppointmentSlot, InventoryStock, KbArticle, TaskItem, TaskStatus, Ticket, TicketStatus,
    UnassignedTicket, UpdateUrgency,
};
use crate::domain::{sample, DepartmentId};
use crate::presentation::state::{Overlay, Selection, ViewCycle};
use crate::presentation::theme::Theme;
use crate::presentation::ui::out_of_office::{OutOfOfficePanel, OutOfOfficeState};
use crate::presentation::ui::utils::fit_to_width;

/// Main views reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Dashboard,
    Incidents,
    Knowledge,
    OutOfOffice,
}

impl DashboardView {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Incidents => "Incidents",
            Self::Knowledge => "Knowledge Base",
            Self::OutOfOffice => "Out of Office",
        }
    }
}

impl ViewCycle for DashboardView {
    const ALL: &'static [Self] = &[
        Self::Dashboard,
        Self::Incidents,
        Self::Knowledge,
        Self::OutOfOffice,
    ];
}

/// What the app should do after the dashboard handled an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    /// The event changed only dashboard-local state.
    Consumed,
    /// Sign out and return to the login screen.
    Logout,
    /// Return to the department picker, keeping the session.
    ChangeDepartment,
    /// Open the detail screen for a ticket.
    OpenTicket(String),
}

/// State of the dashboard screen.
///
/// The active view, the settings expansion and the user menu are all local
/// state; switching views never touches the overlays, and each overlay
/// closes on a press outside of it before that press is routed further.
pub struct DashboardScreenState {
    department: DepartmentId,
    view: Selection<DashboardView>,
    settings_panel: Overlay,
    user_menu: Overlay,
    ooo: OutOfOfficeState,
    my_tickets: Vec<Ticket>,
    unassigned: Vec<UnassignedTicket>,
    tasks: Vec<TaskItem>,
    appointments: Vec<AppointmentSlot>,
    inventory: Vec<InventoryStock>,
    articles: Vec<KbArticle>,
    selected_article: usize,
    nav_regions: [Rect; 4],
    settings_item_regions: [Rect; sample::SETTINGS_ITEMS.len()],
    logout_region: Rect,
    change_department_region: Rect,
    ticket_regions: Vec<(String, Rect)>,
    article_regions: Vec<Rect>,
}

impl DashboardScreenState {
    #[must_use]
    pub fn new(department: DepartmentId) -> Self {
        Self {
            department,
            view: Selection::new(DashboardView::Dashboard),
            settings_panel: Overlay::new(),
            user_menu: Overlay::new(),
            ooo: OutOfOfficeState::new(),
            my_tickets: sample::my_tickets(),
            unassigned: sample::unassigned_tickets(),
            tasks: sample::my_tasks(),
            appointments: sample::appointments(),
            inventory: sample::inventory_stock(),
            articles: sample::kb_articles(),
            selected_article: 0,
            nav_regions: [Rect::default(); 4],
            settings_item_regions: [Rect::default(); sample::SETTINGS_ITEMS.len()],
            logout_region: Rect::default(),
            change_department_region: Rect::default(),
            ticket_regions: Vec::new(),
            article_regions: Vec::new(),
        }
    }

    /// Index of the highlighted knowledge base article.
    #[must_use]
    pub const fn selected_article(&self) -> usize {
        self.selected_article
    }

    #[must_use]
    pub const fn department(&self) -> DepartmentId {
        self.department
    }

    #[must_use]
    pub fn active_view(&self) -> DashboardView {
        self.view.active()
    }

    pub fn select_view(&mut self, view: DashboardView) {
        self.view.select(view);
    }

    #[must_use]
    pub fn settings_expanded(&self) -> bool {
        self.settings_panel.is_open()
    }

    #[must_use]
    pub fn user_menu_open(&self) -> bool {
        self.user_menu.is_open()
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu.toggle();
    }

    pub fn toggle_settings(&mut self) {
        self.settings_panel.toggle();
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> DashboardAction {
        if key.modifiers.contains(KeyModifiers::ALT) {
            let jump = match key.code {
                KeyCode::Char('1') => Some(DashboardView::Dashboard),
                KeyCode::Char('2') => Some(DashboardView::Incidents),
                KeyCode::Char('3') => Some(DashboardView::Knowledge),
                KeyCode::Char('4') => Some(DashboardView::OutOfOffice),
                _ => None,
            };
            if let Some(view) = jump {
                self.view.select(view);
                return DashboardAction::Consumed;
            }
        }

        if key.code == KeyCode::Char('u') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.user_menu.toggle();
            return DashboardAction::Consumed;
        }
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.settings_panel.toggle();
            return DashboardAction::Consumed;
        }

        if self.user_menu.is_open() {
            return match key.code {
                KeyCode::Esc => {
                    self.user_menu.close();
                    DashboardAction::Consumed
                }
                KeyCode::Char('l') => DashboardAction::Logout,
                KeyCode::Char('d') => DashboardAction::ChangeDepartment,
                _ => DashboardAction::Consumed,
            };
        }

        if key.code == KeyCode::Esc {
            if self.settings_panel.is_open() {
                self.settings_panel.close();
                return DashboardAction::Consumed;
            }
            return DashboardAction::None;
        }

        if self.view.active() == DashboardView::OutOfOffice && self.ooo.handle_key(key) {
            return DashboardAction::Consumed;
        }

        if self.view.active() == DashboardView::Knowledge {
            match key.code {
                KeyCode::Up => {
                    self.selected_article = self.selected_article.saturating_sub(1);
                    return DashboardAction::Consumed;
                }
                KeyCode::Down => {
                    if self.selected_article + 1 < self.articles.len() {
                        self.selected_article += 1;
                    }
                    return DashboardAction::Consumed;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.view.select_next();
                DashboardAction::Consumed
            }
            KeyCode::BackTab => {
                self.view.select_previous();
                DashboardAction::Consumed
            }
            KeyCode::Enter
                if matches!(
                    self.view.active(),
                    DashboardView::Dashboard | DashboardView::Incidents
                ) =>
            {
                self.my_tickets
                    .first()
                    .map_or(DashboardAction::None, |ticket| {
                        DashboardAction::OpenTicket(ticket.id().to_string())
                    })
            }
            _ => DashboardAction::None,
        }
    }

    /// Routes a left pointer-down.
    ///
    /// The dismissal pass for both overlays runs first, for every press.
    /// The press then continues to whatever control it landed on, so one
    /// press can close a menu and activate a navigation item underneath.
    pub fn handle_press(&mut self, position: Position) -> DashboardAction {
        let menu_was_open = self.user_menu.is_open();
        self.user_menu.dismiss_on_outside_press(position);
        self.settings_panel.dismiss_on_outside_press(position);

        if menu_was_open && self.user_menu.is_open() {
            if self.logout_region.contains(position) {
                return DashboardAction::Logout;
            }
            if self.change_department_region.contains(position) {
                return DashboardAction::ChangeDepartment;
            }
            if self.user_menu.contains(position) {
                return DashboardAction::Consumed;
            }
        }

        if self.user_menu.on_toggle(position) {
            // Reflects the pre-press state: the dismissal pass never closes
            // an overlay from its own toggle control.
            self.user_menu.toggle();
            return DashboardAction::Consumed;
        }
        if self.settings_panel.on_toggle(position) {
            self.settings_panel.toggle();
            return DashboardAction::Consumed;
        }

        if self.settings_panel.is_open() {
            for (i, region) in self.settings_item_regions.iter().enumerate() {
                if region.contains(position) {
                    tracing::debug!(item = sample::SETTINGS_ITEMS[i], "settings item selected");
                    return DashboardAction::Consumed;
                }
            }
        }

        for (i, view) in DashboardView::ALL.iter().enumerate() {
            if self.nav_regions[i].contains(position) {
                self.view.select(*view);
                return DashboardAction::Consumed;
            }
        }

        if self.view.active() == DashboardView::OutOfOffice && self.ooo.handle_press(position) {
            return DashboardAction::Consumed;
        }

        for (id, region) in &self.ticket_regions {
            if region.contains(position) {
                return DashboardAction::OpenTicket(id.clone());
            }
        }

        for (i, region) in self.article_regions.iter().enumerate() {
            if region.contains(position) {
                self.selected_article = i;
                return DashboardAction::Consumed;
            }
        }

        DashboardAction::None
    }
}

/// Renders the dashboard screen.
pub struct DashboardScreen<'a> {
    theme: &'a Theme,
}

impl<'a> DashboardScreen<'a> {
    #[must_use]
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn render_sidebar(&self, area: Rect, buf: &mut Buffer, state: &mut DashboardScreenState) {
        let block = Block::default().borders(Borders::RIGHT);
        let inner = block.inner(area);
        block.render(area, buf);

        let settings_rows = if state.settings_panel.is_open() {
            1 + sample::SETTINGS_ITEMS.len()
        } else {
            1
        };
        #[allow(clippy::cast_possible_truncation)]
        let layout = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(settings_rows as u16),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .split(inner);

        Paragraph::new(Span::styled(
            " Poppins",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .render(layout[0], buf);

        let badges = [
            None,
            Some(sample::INCIDENT_BADGE),
            None,
            Some(sample::OUT_OF_OFFICE_BADGE),
        ];
        for (i, view) in DashboardView::ALL.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let row = Rect::new(layout[1].x, layout[1].y + i as u16, layout[1].width, 1);
            state.nav_regions[i] = row;

            let style = if state.view.is_active(*view) {
                self.theme.highlight_style
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![Span::styled(format!(" {}", view.title()), style)];
            if let Some(count) = badges[i] {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(format!(" {count} "), self.theme.badge_style));
            }
            Paragraph::new(Line::from(spans)).render(row, buf);
        }

        let settings_area = layout[2];
        let toggle_row = Rect::new(settings_area.x, settings_area.y, settings_area.width, 1);
        state.settings_panel.set_toggle_region(toggle_row);
        let chevron = if state.settings_panel.is_open() {
            "▾"
        } else {
            "▸"
        };
        Paragraph::new(Span::styled(
            format!(" Settings {chevron}"),
            Style::default().fg(Color::White),
        ))
        .render(toggle_row, buf);

        if state.settings_panel.is_open() {
            let items_region = Rect::new(
                settings_area.x,
                settings_area.y + 1,
                settings_area.width,
                settings_area.height.saturating_sub(1),
            );
            state.settings_panel.set_region(items_region);
            for (i, item) in sample::SETTINGS_ITEMS.iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let row = Rect::new(
                    items_region.x,
                    items_region.y + i as u16,
                    items_region.width,
                    1,
                );
                state.settings_item_regions[i] = row;
                Paragraph::new(Span::styled(format!("   {item}"), self.theme.dimmed_style))
                    .render(row, buf);
            }
        } else {
            state.settings_panel.set_region(Rect::default());
        }

        let user_row = layout[4];
        state.user_menu.set_toggle_region(user_row);
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {}", sample::AGENT_NAME),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                format!(" {}", state.department),
                self.theme.dimmed_style,
            )),
        ])
        .render(user_row, buf);
    }

    fn urgency_style(&self, urgency: UpdateUrgency) -> Style {
        match urgency {
            UpdateUrgency::Fresh => Style::default().fg(Color::Green),
            UpdateUrgency::Stale => Style::default().fg(Color::Yellow),
            UpdateUrgency::Overdue => self.theme.danger_style,
        }
    }

    fn status_style(status: TicketStatus) -> Style {
        match status {
            TicketStatus::Wip => Style::default().fg(Color::Cyan),
            TicketStatus::Pending => Style::default().fg(Color::Yellow),
            TicketStatus::Resolved => Style::default().fg(Color::Green),
            TicketStatus::New | TicketStatus::Open | TicketStatus::Assigned => {
                Style::default().fg(Color::White)
            }
        }
    }

    fn render_my_tickets(&self, area: Rect, buf: &mut Buffer, state: &mut DashboardScreenState) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            " My Tickets  {} current / {} closed ",
            sample::CURRENT_TICKETS,
            sample::CLOSED_TICKETS
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let subject_width = inner.width.saturating_sub(44) as usize;
        for (i, ticket) in state.my_tickets.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
            if row.y >= inner.bottom() {
                break;
            }
            state.ticket_regions.push((ticket.id().to_string(), row));

            let line = Line::from(vec![
                Span::styled(fit_to_width(ticket.id(), 10), self.theme.highlight_style),
                Span::raw(fit_to_width(ticket.date(), 10)),
                Span::raw(fit_to_width(ticket.subject(), subject_width)),
                Span::styled(
                    fit_to_width(ticket.status().label(), 10),
                    Self::status_style(ticket.status()),
                ),
                Span::styled(
                    fit_to_width(ticket.last_update(), 8),
                    self.urgency_style(ticket.urgency()),
                ),
            ]);
            Paragraph::new(line).render(row, buf);
        }
    }

    fn render_unassigned(&self, area: Rect, buf: &mut Buffer, state: &DashboardScreenState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Unassigned Tickets ");
        let inner = block.inner(area);
        block.render(area, buf);

        let subject_width = inner.width.saturating_sub(34) as usize;
        let mut lines = Vec::new();
        for ticket in &state.unassigned {
            lines.push(Line::from(vec![
                Span::styled(fit_to_width(ticket.id(), 10), self.theme.highlight_style),
                Span::raw(fit_to_width(ticket.subject(), subject_width)),
                Span::styled(
                    fit_to_width(ticket.assigned_to().unwrap_or("-"), 12),
                    self.theme.dimmed_style,
                ),
                Span::raw(fit_to_width(ticket.requester(), 12)),
            ]));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_tasks(&self, area: Rect, buf: &mut Buffer, state: &DashboardScreenState) {
        let block = Block::default().borders(Borders::ALL).title(" My Tasks ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for task in &state.tasks {
            let status_style = match task.status() {
                TaskStatus::InProgress => Style::default().fg(Color::Cyan),
                TaskStatus::Assigned => self.theme.dimmed_style,
            };
            lines.push(Line::from(vec![
                Span::styled(fit_to_width(task.id(), 10), self.theme.highlight_style),
                Span::raw(fit_to_width(
                    task.subject(),
                    inner.width.saturating_sub(24) as usize,
                )),
                Span::styled(task.status().label(), status_style),
            ]));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_appointments(&self, area: Rect, buf: &mut Buffer, state: &DashboardScreenState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Today's Appointments ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for slot in &state.appointments {
            let hour = format!("{:>2} ", slot.hour);
            match &slot.booking {
                Some(label) => lines.push(Line::from(vec![
                    Span::styled(hour, self.theme.dimmed_style),
                    Span::styled(label.clone(), Style::default().fg(self.theme.accent)),
                ])),
                None => lines.push(Line::from(vec![
                    Span::styled(hour, self.theme.dimmed_style),
                    Span::styled("·", self.theme.dimmed_style),
                ])),
            }
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_inventory(&self, area: Rect, buf: &mut Buffer, state: &DashboardScreenState) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            " Inventory  last audit {} ",
            sample::LAST_STOCK_AUDIT
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let bars: Vec<Bar> = state
            .inventory
            .iter()
            .map(|stock| {
                Bar::default()
                    .label(Line::raw(stock.name))
                    .value(stock.count)
            })
            .collect();
        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(9)
            .bar_gap(2)
            .bar_style(Style::default().fg(self.theme.accent))
            .value_style(Style::default().fg(Color::Black).bg(self.theme.accent))
            .render(inner, buf);
    }

    fn render_dashboard_view(&self, area: Rect, buf: &mut Buffer, state: &mut DashboardScreenState) {
        let [header, tickets, bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Hello, {}", sample::AGENT_NAME),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} department", state.department),
                self.theme.dimmed_style,
            ),
        ]))
        .render(header, buf);

        self.render_my_tickets(tickets, buf, state);

        let [left, middle, right] = Layout::horizontal([
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .areas(bottom);

        let [unassigned, tasks] =
            Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas(left);
        self.render_unassigned(unassigned, buf, state);
        self.render_tasks(tasks, buf, state);
        self.render_appointments(middle, buf, state);
        self.render_inventory(right, buf, state);
    }

    fn render_incidents_view(&self, area: Rect, buf: &mut Buffer, state: &mut DashboardScreenState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" All Incidents ");
        let inner = block.inner(area);
        block.render(area, buf);

        let subject_width = inner.width.saturating_sub(54) as usize;
        let mut y = inner.y;
        for ticket in &state.my_tickets {
            if y >= inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 1);
            state.ticket_regions.push((ticket.id().to_string(), row));
            let line = Line::from(vec![
                Span::styled(fit_to_width(ticket.id(), 10), self.theme.highlight_style),
                Span::raw(fit_to_width(
                    &format!("{} {}", ticket.date(), ticket.time()),
                    18,
                )),
                Span::raw(fit_to_width(ticket.subject(), subject_width)),
                Span::raw(fit_to_width(ticket.requester(), 12)),
                Span::styled(
                    fit_to_width(ticket.status().label(), 10),
                    Self::status_style(ticket.status()),
                ),
            ]);
            Paragraph::new(line).render(row, buf);
            y += 1;
        }
    }

    fn render_knowledge_view(&self, area: Rect, buf: &mut Buffer, state: &mut DashboardScreenState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Knowledge Base ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        for (i, article) in state.articles.iter().enumerate() {
            if y + 2 > inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x, y, inner.width, 2);
            state.article_regions.push(row);

            let selected = i == state.selected_article;
            let title_style = if selected {
                self.theme.highlight_style
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if selected { "▸ " } else { "  " };
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(format!("{marker}{}", article.title()), title_style),
                    Span::styled(
                        format!("  [{}]  updated {}", article.category(), article.updated()),
                        self.theme.dimmed_style,
                    ),
                ]),
                Line::from(Span::raw(format!("    {}", article.summary()))),
            ])
            .render(row, buf);
            y += 3;
        }
    }

    fn render_user_menu(&self, area: Rect, buf: &mut Buffer, state: &mut DashboardScreenState) {
        let width = 24;
        let height = 4;
        let x = area.x.saturating_add(1);
        let y = area.bottom().saturating_sub(height + 3);
        let menu = Rect::new(x, y, width.min(area.width), height);
        state.user_menu.set_region(menu);

        Clear.render(menu, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(menu);
        block.render(menu, buf);

        state.change_department_region = Rect::new(inner.x, inner.y, inner.width, 1);
        Paragraph::new(Span::raw(" Change Department (d)"))
            .render(state.change_department_region, buf);

        state.logout_region = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        Paragraph::new(Span::styled(" Logout (l)", self.theme.danger_style))
            .render(state.logout_region, buf);
    }
}

impl StatefulWidget for DashboardScreen<'_> {
    type State = DashboardScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.ticket_regions.clear();
        state.article_regions.clear();

        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(26), Constraint::Fill(1)]).areas(area);

        self.render_sidebar(sidebar, buf, state);

        match state.view.active() {
            DashboardView::Dashboard => self.render_dashboard_view(main, buf, state),
            DashboardView::Incidents => self.render_incidents_view(main, buf, state),
            DashboardView::Knowledge => self.render_knowledge_view(main, buf, state),
            DashboardView::OutOfOffice => {
                OutOfOfficePanel::new(self.theme).render(main, buf, &mut state.ooo);
            }
        }

        if state.user_menu.is_open() {
            self.render_user_menu(sidebar, buf, state);
        } else {
            state.user_menu.set_region(Rect::default());
            state.logout_region = Rect::default();
            state.change_department_region = Rect::default();
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

    fn state() -> DashboardScreenState {
        DashboardScreenState::new(DepartmentId::Dit)
    }

    #[test]
    fn test_opens_on_dashboard_view() {
        assert_eq!(state().active_view(), DashboardView::Dashboard);
    }

    #[test_case(DashboardView::Incidents ; "incidents")]
    #[test_case(DashboardView::Knowledge ; "knowledge")]
    #[test_case(DashboardView::OutOfOffice ; "out_of_office")]
    fn test_view_switch_from_default(target: DashboardView) {
        let mut s = state();
        s.select_view(target);
        assert_eq!(s.active_view(), target);
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut s = state();
        s.handle_key(&key(KeyCode::Tab));
        assert_eq!(s.active_view(), DashboardView::Incidents);
        s.handle_key(&key(KeyCode::BackTab));
        assert_eq!(s.active_view(), DashboardView::Dashboard);
    }

    #[test]
    fn test_view_switch_leaves_overlays_untouched() {
        let mut s = state();
        s.toggle_settings();
        s.toggle_user_menu();

        s.select_view(DashboardView::Knowledge);
        assert!(s.settings_expanded());
        assert!(s.user_menu_open());

        s.select_view(DashboardView::Dashboard);
        assert!(s.settings_expanded());
        assert!(s.user_menu_open());
    }

    #[test]
    fn test_user_menu_keys() {
        let mut s = state();
        let chord = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        s.handle_key(&chord);
        assert!(s.user_menu_open());

        assert_eq!(s.handle_key(&key(KeyCode::Char('l'))), DashboardAction::Logout);
        assert_eq!(
            s.handle_key(&key(KeyCode::Char('d'))),
            DashboardAction::ChangeDepartment
        );

        s.handle_key(&key(KeyCode::Esc));
        assert!(!s.user_menu_open());
    }

    #[test]
    fn test_press_outside_closes_user_menu_and_still_routes() {
        let mut s = state();
        s.user_menu.open();
        s.user_menu.set_region(Rect::new(1, 20, 24, 4));
        s.nav_regions[1] = Rect::new(0, 3, 26, 1);

        // One press both dismisses the menu and activates the nav item.
        let action = s.handle_press(Position::new(4, 3));
        assert!(!s.user_menu_open());
        assert_eq!(action, DashboardAction::Consumed);
        assert_eq!(s.active_view(), DashboardView::Incidents);
    }

    #[test]
    fn test_press_on_user_chip_toggles_menu_not_dismissal() {
        let mut s = state();
        s.user_menu.set_region(Rect::new(1, 20, 24, 4));
        s.user_menu.set_toggle_region(Rect::new(0, 26, 26, 2));

        s.handle_press(Position::new(3, 26));
        assert!(s.user_menu_open());

        // Same press location closes it through the toggle, not through the
        // outside-press pass.
        s.handle_press(Position::new(3, 26));
        assert!(!s.user_menu_open());
    }

    #[test]
    fn test_menu_item_press_fires_action() {
        let mut s = state();
        s.user_menu.open();
        s.user_menu.set_region(Rect::new(1, 20, 24, 4));
        s.logout_region = Rect::new(2, 22, 22, 1);
        s.change_department_region = Rect::new(2, 21, 22, 1);

        assert_eq!(
            s.handle_press(Position::new(5, 21)),
            DashboardAction::ChangeDepartment
        );
        assert_eq!(s.handle_press(Position::new(5, 22)), DashboardAction::Logout);
    }

    #[test]
    fn test_settings_scenario_open_press_item_press_outside() {
        let mut s = state();
        s.settings_panel.set_toggle_region(Rect::new(0, 8, 26, 1));
        s.handle_press(Position::new(3, 8));
        assert!(s.settings_expanded());

        s.settings_panel.set_region(Rect::new(0, 9, 26, 6));
        s.settings_item_regions[2] = Rect::new(0, 11, 26, 1);
        assert_eq!(
            s.handle_press(Position::new(5, 11)),
            DashboardAction::Consumed
        );
        assert!(s.settings_expanded());

        s.handle_press(Position::new(60, 20));
        assert!(!s.settings_expanded());
    }

    #[test]
    fn test_ticket_press_opens_detail() {
        let mut s = state();
        s.ticket_regions
            .push(("INC4568".to_string(), Rect::new(30, 4, 40, 1)));
        assert_eq!(
            s.handle_press(Position::new(35, 4)),
            DashboardAction::OpenTicket("INC4568".to_string())
        );
    }

    #[test]
    fn test_article_keys_move_selection_in_knowledge_view() {
        let mut s = state();
        s.handle_key(&key(KeyCode::Down));
        assert_eq!(s.selected_article(), 0);

        s.select_view(DashboardView::Knowledge);
        assert_eq!(s.handle_key(&key(KeyCode::Down)), DashboardAction::Consumed);
        assert_eq!(s.selected_article(), 1);
        s.handle_key(&key(KeyCode::Up));
        s.handle_key(&key(KeyCode::Up));
        assert_eq!(s.selected_article(), 0);
    }

    #[test]
    fn test_article_press_selects_row() {
        let mut s = state();
        s.select_view(DashboardView::Knowledge);
        s.article_regions.push(Rect::new(30, 2, 40, 2));
        s.article_regions.push(Rect::new(30, 5, 40, 2));

        assert_eq!(
            s.handle_press(Position::new(35, 5)),
            DashboardAction::Consumed
        );
        assert_eq!(s.selected_article(), 1);
    }

    #[test]
    fn test_ooo_keys_only_reach_panel_when_active() {
        let mut s = state();
        s.handle_key(&key(KeyCode::Char('x')));
        assert_eq!(s.active_view(), DashboardView::Dashboard);

        s.select_view(DashboardView::OutOfOffice);
        assert_eq!(
            s.handle_key(&key(KeyCode::Char('x'))),
            DashboardAction::Consumed
        );
    }
}
