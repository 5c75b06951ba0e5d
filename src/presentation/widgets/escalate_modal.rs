//! Escalation dialog for handing a ticket to a second-level helper.

use crate::domain::sample;
use crate::presentation::state::Overlay;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, Widget},
};

/// Maximum length of the escalation message.
pub const MESSAGE_LIMIT: usize = 2000;

/// What the owning screen should do after the modal handled an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscalateModalAction {
    /// Nothing to do; the event was not for the modal.
    None,
    /// The modal handled the event; do not route it further.
    Consumed,
    /// Close the dialog without sending.
    Close,
    /// Send the escalation and close the dialog.
    Send,
}

/// State of the escalate dialog.
///
/// The dialog is an overlay over the ticket detail screen. Selecting a
/// helper and typing a message are both local; Send hands the ticket off
/// and the dialog closes through the same seam as Cancel.
#[derive(Debug, Clone)]
pub struct EscalateModalState {
    overlay: Overlay,
    helpers: Vec<(String, String)>,
    selected_helper: usize,
    message: TextInput,
    helper_regions: Vec<Rect>,
    send_region: Rect,
    close_region: Rect,
}

impl Default for EscalateModalState {
    fn default() -> Self {
        Self::new()
    }
}

impl EscalateModalState {
    #[must_use]
    pub fn new() -> Self {
        let helpers = sample::escalation_helpers();
        Self {
            overlay: Overlay::new(),
            helper_regions: vec![Rect::default(); helpers.len()],
            helpers,
            selected_helper: 0,
            message: TextInput::new("Message")
                .placeholder("Describe why this ticket needs escalation...")
                .max_len(MESSAGE_LIMIT),
            send_region: Rect::default(),
            close_region: Rect::default(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Opens the dialog with a cleared message and the first helper selected.
    pub fn open(&mut self) {
        self.selected_helper = 0;
        self.message.clear();
        self.message.set_focused(true);
        self.overlay.open();
    }

    pub fn close(&mut self) {
        self.overlay.close();
    }

    /// Shared dismissal pass. The ticket screen calls this for every left
    /// pointer-down before routing the press.
    pub fn dismiss_on_outside_press(&mut self, position: Position) -> bool {
        self.overlay.dismiss_on_outside_press(position)
    }

    #[must_use]
    pub fn selected_helper(&self) -> &(String, String) {
        &self.helpers[self.selected_helper]
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.message.value()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> EscalateModalAction {
        match key.code {
            KeyCode::Esc => EscalateModalAction::Close,
            KeyCode::Enter => EscalateModalAction::Send,
            KeyCode::Up => {
                self.selected_helper = self
                    .selected_helper
                    .checked_sub(1)
                    .unwrap_or(self.helpers.len() - 1);
                EscalateModalAction::Consumed
            }
            KeyCode::Down => {
                self.selected_helper = (self.selected_helper + 1) % self.helpers.len();
                EscalateModalAction::Consumed
            }
            _ => {
                self.message.handle_key(key);
                EscalateModalAction::Consumed
            }
        }
    }

    /// Routes a left press that was not already consumed by the dismissal
    /// pass. Presses inside the dialog hit its controls; anything else is
    /// left to the screen underneath.
    pub fn handle_press(&mut self, position: Position) -> EscalateModalAction {
        if !self.is_open() {
            return EscalateModalAction::None;
        }
        if self.close_region.contains(position) {
            return EscalateModalAction::Close;
        }
        if self.send_region.contains(position) {
            return EscalateModalAction::Send;
        }
        for (i, region) in self.helper_regions.iter().enumerate() {
            if region.contains(position) {
                self.selected_helper = i;
                return EscalateModalAction::Consumed;
            }
        }
        if self.overlay.contains(position) {
            return EscalateModalAction::Consumed;
        }
        EscalateModalAction::None
    }
}

/// Renders the escalate dialog centered over the ticket screen.
pub struct EscalateModal<'a> {
    ticket_id: &'a str,
    theme: &'a Theme,
}

impl<'a> EscalateModal<'a> {
    #[must_use]
    pub fn new(ticket_id: &'a str, theme: &'a Theme) -> Self {
        Self { ticket_id, theme }
    }
}

impl StatefulWidget for EscalateModal<'_> {
    type State = EscalateModalState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = centered_rect(60, 70, area);
        state.overlay.set_region(area);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(format!(" Escalate {} ", self.ticket_id));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 4 {
            return;
        }

        state.close_region = Rect::new(area.right().saturating_sub(4), area.y, 3, 1);
        Paragraph::new(Span::styled(
            " ✕ ",
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ))
        .render(state.close_region, buf);

        #[allow(clippy::cast_possible_truncation)]
        let helper_rows = state.helpers.len() as u16;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(helper_rows),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new("Assign to second-level support")
            .style(self.theme.dimmed_style)
            .render(layout[0], buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(1); state.helpers.len()])
            .split(layout[1]);

        for (i, (name, email)) in state.helpers.iter().enumerate() {
            state.helper_regions[i] = rows[i];
            let marker = if i == state.selected_helper {
                "(•)"
            } else {
                "( )"
            };
            let style = if i == state.selected_helper {
                self.theme.highlight_style
            } else {
                Style::default().fg(Color::White)
            };
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{marker} {name}"), style),
                Span::styled(format!("  {email}"), self.theme.dimmed_style),
            ]))
            .render(rows[i], buf);
        }

        (&state.message).render(layout[2], buf);

        let counter = format!("{}/{}", state.message.len(), MESSAGE_LIMIT);
        Paragraph::new(counter)
            .style(self.theme.dimmed_style)
            .right_aligned()
            .render(layout[3], buf);

        state.send_region = layout[4];
        Paragraph::new(Span::styled(
            " Send Escalation (Enter) ",
            Style::default()
                .bg(self.theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ))
        .render(layout[4], buf);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_open_resets_draft() {
        let mut state = EscalateModalState::new();
        state.open();
        state.handle_key(&key(KeyCode::Char('x')));
        state.handle_key(&key(KeyCode::Down));
        state.close();

        state.open();
        assert!(state.message().is_empty());
        assert_eq!(state.selected_helper().0, "Mike Ross (Senior Dev)");
    }

    #[test_case(KeyCode::Esc, EscalateModalAction::Close ; "esc_closes")]
    #[test_case(KeyCode::Enter, EscalateModalAction::Send ; "enter_sends")]
    #[test_case(KeyCode::Down, EscalateModalAction::Consumed ; "down_consumed")]
    fn test_handle_key_actions(code: KeyCode, expected: EscalateModalAction) {
        let mut state = EscalateModalState::new();
        state.open();
        assert_eq!(state.handle_key(&key(code)), expected);
    }

    #[test]
    fn test_helper_selection_wraps() {
        let mut state = EscalateModalState::new();
        state.open();
        state.handle_key(&key(KeyCode::Up));
        assert_eq!(state.selected_helper().0, "Harvey Specter (Manager)");
        state.handle_key(&key(KeyCode::Down));
        assert_eq!(state.selected_helper().0, "Mike Ross (Senior Dev)");
    }

    #[test]
    fn test_message_capped_at_limit() {
        let mut state = EscalateModalState::new();
        state.open();
        for _ in 0..(MESSAGE_LIMIT + 10) {
            state.handle_key(&key(KeyCode::Char('a')));
        }
        assert_eq!(state.message().len(), MESSAGE_LIMIT);
    }

    #[test]
    fn test_press_routing() {
        let mut state = EscalateModalState::new();
        state.open();
        state.overlay.set_region(Rect::new(10, 5, 40, 20));
        state.close_region = Rect::new(46, 5, 3, 1);
        state.send_region = Rect::new(12, 22, 20, 1);
        state.helper_regions[1] = Rect::new(12, 8, 30, 1);

        assert_eq!(
            state.handle_press(Position::new(47, 5)),
            EscalateModalAction::Close
        );
        assert_eq!(
            state.handle_press(Position::new(13, 22)),
            EscalateModalAction::Send
        );
        assert_eq!(
            state.handle_press(Position::new(14, 8)),
            EscalateModalAction::Consumed
        );
        assert_eq!(state.selected_helper().0, "Rachel Zane (Legal)");
        assert_eq!(
            state.handle_press(Position::new(15, 10)),
            EscalateModalAction::Consumed
        );
    }

    #[test]
    fn test_closed_modal_ignores_presses() {
        let mut state = EscalateModalState::new();
        assert_eq!(
            state.handle_press(Position::new(0, 0)),
            EscalateModalAction::None
        );
    }
}
