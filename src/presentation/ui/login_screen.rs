//! Login screen.

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::widgets::TextInput;

/// Which field currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
}

/// Login screen UI.
///
/// Sign-in is a mockup: any non-empty email and password pass. The
/// interesting state is local to the form, the show-password toggle and
/// the remember-me checkbox.
pub struct LoginScreen {
    email_input: TextInput,
    password_input: TextInput,
    focus: LoginFocus,
    show_password: bool,
    remember_me: bool,
    email_region: Cell<Rect>,
    password_region: Cell<Rect>,
    reveal_region: Cell<Rect>,
    remember_region: Cell<Rect>,
    submit_region: Cell<Rect>,
    social_region: Cell<Rect>,
}

impl LoginScreen {
    /// Creates new login screen.
    #[must_use]
    pub fn new() -> Self {
        let mut email_input = TextInput::new("Email").placeholder("you@company.com");
        email_input.set_focused(true);
        let password_input = TextInput::new("Password")
            .password()
            .placeholder("Enter your password");

        Self {
            email_input,
            password_input,
            focus: LoginFocus::Email,
            show_password: false,
            remember_me: false,
            email_region: Cell::new(Rect::default()),
            password_region: Cell::new(Rect::default()),
            reveal_region: Cell::new(Rect::default()),
            remember_region: Cell::new(Rect::default()),
            submit_region: Cell::new(Rect::default()),
            social_region: Cell::new(Rect::default()),
        }
    }

    /// Returns entered email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email_input.value()
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focus(&self) -> LoginFocus {
        self.focus
    }

    /// Returns whether the password is shown in clear text.
    #[must_use]
    pub const fn password_visible(&self) -> bool {
        self.show_password
    }

    /// Returns the remember-me preference.
    #[must_use]
    pub const fn remember_me(&self) -> bool {
        self.remember_me
    }

    fn set_focus(&mut self, focus: LoginFocus) {
        self.focus = focus;
        self.email_input.set_focused(focus == LoginFocus::Email);
        self.password_input
            .set_focused(focus == LoginFocus::Password);
    }

    fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
        self.password_input.set_masked(!self.show_password);
    }

    fn can_submit(&self) -> bool {
        !self.email_input.is_empty() && !self.password_input.is_empty()
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        match key.code {
            KeyCode::Enter => {
                if self.can_submit() {
                    return LoginAction::Submit;
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {
                let next = match self.focus {
                    LoginFocus::Email => LoginFocus::Password,
                    LoginFocus::Password => LoginFocus::Email,
                };
                self.set_focus(next);
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.remember_me = !self.remember_me;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_show_password();
            }
            _ => {
                match self.focus {
                    LoginFocus::Email => self.email_input.handle_key(&key),
                    LoginFocus::Password => self.password_input.handle_key(&key),
                };
            }
        }

        LoginAction::None
    }

    /// Handles a left pointer-down, returns action.
    pub fn handle_press(&mut self, position: Position) -> LoginAction {
        if self.email_region.get().contains(position) {
            self.set_focus(LoginFocus::Email);
        } else if self.password_region.get().contains(position) {
            self.set_focus(LoginFocus::Password);
        } else if self.reveal_region.get().contains(position) {
            self.toggle_show_password();
        } else if self.remember_region.get().contains(position) {
            self.remember_me = !self.remember_me;
        } else if self.submit_region.get().contains(position) && self.can_submit() {
            return LoginAction::Submit;
        } else if self.social_region.get().contains(position) {
            // The workspace identity provider signs in without the form.
            return LoginAction::Submit;
        }
        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(52),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Poppins Service Desk ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<10>(inner);

        let title =
            Paragraph::new("Sign in to your workspace").style(Style::default().fg(Color::White));
        title.render(areas[0], buf);

        self.email_region.set(areas[2]);
        (&self.email_input).render(areas[2], buf);

        let [password_area, reveal_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(8)]).areas(areas[3]);
        self.password_region.set(password_area);
        (&self.password_input).render(password_area, buf);

        self.reveal_region.set(reveal_area);
        let reveal_label = if self.show_password { " Hide " } else { " Show " };
        Paragraph::new(Span::styled(
            reveal_label,
            Style::default().fg(Color::Black).bg(Color::Gray),
        ))
        .render(reveal_area, buf);

        self.remember_region.set(areas[5]);
        let checkbox = if self.remember_me { "[x]" } else { "[ ]" };
        let remember_line = Line::from(vec![
            Span::styled(checkbox, Style::default().fg(Color::Yellow)),
            Span::raw(" Remember me (Ctrl+R)"),
        ]);
        Paragraph::new(remember_line).render(areas[5], buf);

        self.submit_region.set(areas[7]);
        let submit_style = if self.can_submit() {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::Gray)
        };
        Paragraph::new(Span::styled(" Sign In (Enter) ", submit_style)).render(areas[7], buf);

        self.social_region.set(areas[8]);
        Paragraph::new(Span::styled(
            " Sign in with Microsoft ",
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ))
        .render(areas[8], buf);

        let hints = Line::from(vec![
            Span::styled("Tab: Switch field", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Ctrl+S: Show password", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Ctrl+C: Quit", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(areas[9], buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_state() {
        let screen = LoginScreen::new();
        assert_eq!(screen.focus(), LoginFocus::Email);
        assert!(screen.email().is_empty());
        assert!(!screen.password_visible());
        assert!(!screen.remember_me());
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut screen = LoginScreen::new();
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), LoginFocus::Password);
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), LoginFocus::Email);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "yogi");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "hunter2");

        assert_eq!(screen.email(), "yogi");
        assert_eq!(screen.password_input.value(), "hunter2");
    }

    #[test]
    fn test_show_password_toggle_is_involution() {
        let mut screen = LoginScreen::new();
        let toggle = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        screen.handle_key(toggle);
        assert!(screen.password_visible());
        assert!(!screen.password_input.is_masked());

        screen.handle_key(toggle);
        assert!(!screen.password_visible());
        assert!(screen.password_input.is_masked());
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut screen = LoginScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);

        type_text(&mut screen, "yogi@company.com");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);

        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "pw");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
    }

    #[test]
    fn test_press_focuses_field_and_submits() {
        let mut screen = LoginScreen::new();
        screen.email_region.set(Rect::new(0, 0, 20, 3));
        screen.password_region.set(Rect::new(0, 3, 20, 3));
        screen.submit_region.set(Rect::new(0, 8, 20, 1));

        assert_eq!(screen.handle_press(Position::new(5, 4)), LoginAction::None);
        assert_eq!(screen.focus(), LoginFocus::Password);

        // Submit stays inert while the form is incomplete.
        assert_eq!(screen.handle_press(Position::new(5, 8)), LoginAction::None);

        type_text(&mut screen, "pw");
        screen.handle_press(Position::new(5, 1));
        type_text(&mut screen, "yogi@company.com");
        assert_eq!(
            screen.handle_press(Position::new(5, 8)),
            LoginAction::Submit
        );
    }

    #[test]
    fn test_social_press_signs_in_without_form() {
        let mut screen = LoginScreen::new();
        screen.social_region.set(Rect::new(0, 10, 24, 1));

        // The identity-provider path does not require the form fields.
        assert!(screen.email().is_empty());
        assert_eq!(
            screen.handle_press(Position::new(5, 10)),
            LoginAction::Submit
        );
    }
}
