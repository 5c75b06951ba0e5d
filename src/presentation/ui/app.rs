//! Main application orchestrator.

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures_util::StreamExt;
use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, info, warn};

use crate::domain::DepartmentId;
use crate::infrastructure::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::dashboard_screen::{
    DashboardAction, DashboardScreen, DashboardScreenState,
};
use crate::presentation::ui::department_screen::{DepartmentAction, DepartmentScreen};
use crate::presentation::ui::login_screen::{LoginAction, LoginScreen};
use crate::presentation::ui::ticket_screen::{TicketDetailAction, TicketDetailState, TicketScreen};
use crate::presentation::widgets::{FooterBar, FooterBarStyle, KeyHint};

const LOGIN_HINTS: &[KeyHint] = &[
    ("Tab", "Field"),
    ("Enter", "Sign in"),
    ("Ctrl+C", "Quit"),
];
const DEPARTMENT_HINTS: &[KeyHint] = &[
    ("←→", "Move"),
    ("Enter", "Open"),
    ("Ctrl+C", "Quit"),
];
const DASHBOARD_HINTS: &[KeyHint] = &[
    ("Tab", "View"),
    ("C-s", "Settings"),
    ("C-u", "Menu"),
    ("Ctrl+C", "Quit"),
];
const TICKET_HINTS: &[KeyHint] = &[
    ("b", "Back"),
    ("Tab", "Tab"),
    ("m", "Actions"),
    ("e", "Escalate"),
];

/// Screen currently mounted. Each variant owns its screen's state; leaving
/// a screen drops that state.
enum CurrentScreen {
    Login(LoginScreen),
    Departments(DepartmentScreen),
    Dashboard(Box<DashboardScreenState>),
    Ticket(Box<TicketDetailState>),
}

pub struct App {
    config: AppConfig,
    theme: Theme,
    screen: CurrentScreen,
    department: Option<DepartmentId>,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let theme = Theme::new(&config.theme.accent_color);
        Self {
            config,
            theme,
            screen: CurrentScreen::Login(LoginScreen::new()),
            department: None,
            exiting: false,
        }
    }

    /// Runs the terminal event loop until quit.
    ///
    /// With `cli_department` set, sign-in and department selection are
    /// skipped and the dashboard opens directly.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be drawn to.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        cli_department: Option<DepartmentId>,
    ) -> color_eyre::Result<()> {
        if let Some(department) = cli_department {
            info!(%department, "Opening dashboard from CLI argument");
            self.enter_department(department);
        }

        let mut terminal_events = EventStream::new();
        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let Some(event) = terminal_events.next().await else {
                break;
            };
            match event {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) == EventResult::Exit {
                        self.exiting = true;
                    }
                }
                Ok(Event::Mouse(mouse)) => self.handle_mouse(&mouse),
                Ok(_) => {}
                Err(e) => {
                    warn!("Terminal event error: {e}");
                }
            }
            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn enter_department(&mut self, department: DepartmentId) {
        self.department = Some(department);
        self.screen = CurrentScreen::Dashboard(Box::new(DashboardScreenState::new(department)));
    }

    fn back_to_dashboard(&mut self) {
        let department = self.department.unwrap_or(DepartmentId::Dit);
        self.screen = CurrentScreen::Dashboard(Box::new(DashboardScreenState::new(department)));
    }

    fn open_ticket(&mut self, ticket_id: &str) {
        debug!(ticket_id, "Opening ticket detail");
        self.screen = CurrentScreen::Ticket(Box::new(TicketDetailState::new(ticket_id)));
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            CurrentScreen::Login(screen) => match screen.handle_key(key) {
                LoginAction::Submit => {
                    info!(email = screen.email(), "Signed in");
                    self.screen = CurrentScreen::Departments(DepartmentScreen::new(self.theme));
                }
                LoginAction::None => {}
            },
            CurrentScreen::Departments(screen) => match screen.handle_key(key) {
                DepartmentAction::Select(department) => self.enter_department(department),
                DepartmentAction::None => {}
            },
            CurrentScreen::Dashboard(state) => match state.handle_key(&key) {
                DashboardAction::Logout => {
                    info!("Signed out");
                    self.department = None;
                    self.screen = CurrentScreen::Login(LoginScreen::new());
                }
                DashboardAction::ChangeDepartment => {
                    let mut screen = DepartmentScreen::new(self.theme);
                    if let Some(current) = self.department {
                        screen.highlight(current);
                    }
                    self.screen = CurrentScreen::Departments(screen);
                }
                DashboardAction::OpenTicket(id) => self.open_ticket(&id),
                DashboardAction::Consumed | DashboardAction::None => {}
            },
            CurrentScreen::Ticket(state) => match state.handle_key(&key) {
                TicketDetailAction::Back => self.back_to_dashboard(),
                TicketDetailAction::Consumed | TicketDetailAction::None => {}
            },
        }

        EventResult::Continue
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let Some(position) = EventHandler::left_press(mouse) else {
            return;
        };

        match &mut self.screen {
            CurrentScreen::Login(screen) => {
                if screen.handle_press(position) == LoginAction::Submit {
                    info!(email = screen.email(), "Signed in");
                    self.screen = CurrentScreen::Departments(DepartmentScreen::new(self.theme));
                }
            }
            CurrentScreen::Departments(screen) => {
                if let DepartmentAction::Select(department) = screen.handle_press(position) {
                    self.enter_department(department);
                }
            }
            CurrentScreen::Dashboard(state) => match state.handle_press(position) {
                DashboardAction::Logout => {
                    info!("Signed out");
                    self.department = None;
                    self.screen = CurrentScreen::Login(LoginScreen::new());
                }
                DashboardAction::ChangeDepartment => {
                    let mut screen = DepartmentScreen::new(self.theme);
                    if let Some(current) = self.department {
                        screen.highlight(current);
                    }
                    self.screen = CurrentScreen::Departments(screen);
                }
                DashboardAction::OpenTicket(id) => self.open_ticket(&id),
                DashboardAction::Consumed | DashboardAction::None => {}
            },
            CurrentScreen::Ticket(state) => {
                if state.handle_press(position) == TicketDetailAction::Back {
                    self.back_to_dashboard();
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let (body, footer) = if self.config.ui.show_footer {
            let [body, footer] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
            (body, Some(footer))
        } else {
            (area, None)
        };

        let hints = match &mut self.screen {
            CurrentScreen::Login(screen) => {
                frame.render_widget(&*screen, body);
                LOGIN_HINTS
            }
            CurrentScreen::Departments(screen) => {
                frame.render_widget(&*screen, body);
                DEPARTMENT_HINTS
            }
            CurrentScreen::Dashboard(state) => {
                frame.render_stateful_widget(DashboardScreen::new(&self.theme), body, state);
                DASHBOARD_HINTS
            }
            CurrentScreen::Ticket(state) => {
                frame.render_stateful_widget(TicketScreen::new(&self.theme), body, state);
                TICKET_HINTS
            }
        };

        if let Some(footer) = footer {
            let bar = FooterBar::new(hints)
                .right_info(Some(crate::VERSION))
                .style(FooterBarStyle::from_theme(&self.theme));
            frame.render_widget(bar, footer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(AppConfig::default())
    }

    fn sign_in(app: &mut App) {
        if let CurrentScreen::Login(_) = app.screen {
            for c in "a@b.c".chars() {
                app.handle_key(key(KeyCode::Char(c)));
            }
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Char('x')));
            app.handle_key(key(KeyCode::Enter));
        }
    }

    #[test]
    fn test_starts_on_login() {
        assert!(matches!(app().screen, CurrentScreen::Login(_)));
    }

    #[test]
    fn test_quit_event_exits() {
        let mut a = app();
        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(a.handle_key(chord), EventResult::Exit);
    }

    #[test]
    fn test_login_leads_to_departments() {
        let mut a = app();
        sign_in(&mut a);
        assert!(matches!(a.screen, CurrentScreen::Departments(_)));
    }

    #[test]
    fn test_department_select_opens_dashboard() {
        let mut a = app();
        sign_in(&mut a);
        a.handle_key(key(KeyCode::Enter));
        assert!(matches!(a.screen, CurrentScreen::Dashboard(_)));
        assert_eq!(a.department, Some(DepartmentId::Dit));
    }

    #[test]
    fn test_cli_department_skips_login() {
        let mut a = app();
        a.enter_department(DepartmentId::Crm);
        match &a.screen {
            CurrentScreen::Dashboard(state) => assert_eq!(state.department(), DepartmentId::Crm),
            _ => panic!("expected dashboard"),
        }
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut a = app();
        a.enter_department(DepartmentId::Dit);
        a.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        a.handle_key(key(KeyCode::Char('l')));
        assert!(matches!(a.screen, CurrentScreen::Login(_)));
        assert_eq!(a.department, None);
    }

    #[test]
    fn test_change_department_keeps_session() {
        let mut a = app();
        a.enter_department(DepartmentId::Legal);
        a.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        a.handle_key(key(KeyCode::Char('d')));
        match &a.screen {
            CurrentScreen::Departments(screen) => {
                assert_eq!(screen.highlighted(), DepartmentId::Legal);
            }
            _ => panic!("expected department picker"),
        }
    }

    #[test]
    fn test_ticket_back_remounts_dashboard() {
        let mut a = app();
        a.enter_department(DepartmentId::Dit);
        a.open_ticket("RITM4268");
        match &a.screen {
            CurrentScreen::Ticket(state) => assert_eq!(state.ticket().id(), "RITM4268"),
            _ => panic!("expected ticket screen"),
        }

        a.handle_key(key(KeyCode::Char('b')));
        match &a.screen {
            CurrentScreen::Dashboard(state) => {
                assert_eq!(state.department(), DepartmentId::Dit);
            }
            _ => panic!("expected dashboard"),
        }
    }
}
