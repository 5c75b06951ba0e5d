//! Department picker shown after sign-in.

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::entities::Department;
use crate::domain::{sample, DepartmentId};
use crate::presentation::state::{Selection, ViewCycle};
use crate::presentation::theme::Theme;

impl ViewCycle for DepartmentId {
    const ALL: &'static [Self] = &DepartmentId::ALL;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentAction {
    None,
    /// Enter the selected department's dashboard.
    Select(DepartmentId),
}

/// Department picker UI.
///
/// One card per department; arrow keys move the highlight and Enter
/// activates it. A pointer press on a card both highlights and activates,
/// there is no press-then-confirm step.
pub struct DepartmentScreen {
    departments: Vec<Department>,
    selection: Selection<DepartmentId>,
    theme: Theme,
    card_regions: Vec<Cell<Rect>>,
}

impl DepartmentScreen {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let departments = sample::departments();
        Self {
            card_regions: vec![Cell::new(Rect::default()); departments.len()],
            departments,
            selection: Selection::new(DepartmentId::Dit),
            theme,
        }
    }

    /// The currently highlighted department.
    #[must_use]
    pub fn highlighted(&self) -> DepartmentId {
        self.selection.active()
    }

    /// Moves the highlight without activating.
    pub fn highlight(&mut self, id: DepartmentId) {
        self.selection.select(id);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DepartmentAction {
        match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
                self.selection.select_next();
                DepartmentAction::None
            }
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
                self.selection.select_previous();
                DepartmentAction::None
            }
            KeyCode::Enter => DepartmentAction::Select(self.selection.active()),
            _ => DepartmentAction::None,
        }
    }

    pub fn handle_press(&mut self, position: Position) -> DepartmentAction {
        for (i, region) in self.card_regions.iter().enumerate() {
            if region.get().contains(position) {
                let id = self.departments[i].id();
                self.selection.select(id);
                return DepartmentAction::Select(id);
            }
        }
        DepartmentAction::None
    }

    fn render_card(&self, department: &Department, area: Rect, buf: &mut Buffer) {
        let highlighted = self.selection.is_active(department.id());
        let border_style = if highlighted {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", department.title()));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                department.subtitle().to_string(),
                Style::default().fg(Color::White),
            )),
            Line::raw(""),
        ];
        for service in department.services() {
            lines.push(Line::from(vec![
                Span::styled("• ", self.theme.dimmed_style),
                Span::raw(service.clone()),
            ]));
        }
        if department.is_featured() {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                " POPULAR ",
                self.theme.badge_style,
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for &DepartmentScreen {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Fill(1),
        ]);
        let [header_area, cards_area, _] = vertical.areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(
                "Select a department",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  (arrows to move, Enter to open)",
                self.theme.dimmed_style,
            ),
        ]))
        .render(header_area, buf);

        let columns = Layout::horizontal(vec![
            Constraint::Ratio(1, self.departments.len() as u32);
            self.departments.len()
        ])
        .split(cards_area);

        for (i, department) in self.departments.iter().enumerate() {
            self.card_regions[i].set(columns[i]);
            self.render_card(department, columns[i], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use test_case::test_case;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> DepartmentScreen {
        DepartmentScreen::new(Theme::default())
    }

    #[test]
    fn test_initial_highlight() {
        assert_eq!(screen().highlighted(), DepartmentId::Dit);
    }

    #[test_case(KeyCode::Right, DepartmentId::Creative ; "right_moves_forward")]
    #[test_case(KeyCode::Left, DepartmentId::Crm ; "left_wraps_back")]
    #[test_case(KeyCode::Tab, DepartmentId::Creative ; "tab_moves_forward")]
    fn test_highlight_movement(code: KeyCode, expected: DepartmentId) {
        let mut s = screen();
        s.handle_key(key(code));
        assert_eq!(s.highlighted(), expected);
    }

    #[test]
    fn test_enter_selects_highlighted() {
        let mut s = screen();
        s.highlight(DepartmentId::Legal);
        assert_eq!(
            s.handle_key(key(KeyCode::Enter)),
            DepartmentAction::Select(DepartmentId::Legal)
        );
    }

    #[test]
    fn test_press_on_card_highlights_and_selects() {
        let mut s = screen();
        s.card_regions[2].set(Rect::new(40, 2, 20, 12));

        let action = s.handle_press(Position::new(45, 5));
        assert_eq!(action, DepartmentAction::Select(DepartmentId::Hco));
        assert_eq!(s.highlighted(), DepartmentId::Hco);
    }

    #[test]
    fn test_press_outside_cards_is_inert() {
        let mut s = screen();
        assert_eq!(s.handle_press(Position::new(0, 0)), DepartmentAction::None);
        assert_eq!(s.highlighted(), DepartmentId::Dit);
    }

    #[test]
    fn test_every_department_reachable_by_cycling() {
        let mut s = screen();
        let mut seen = Vec::new();
        for _ in 0..DepartmentId::ALL.len() {
            seen.push(s.highlighted());
            s.handle_key(key(KeyCode::Right));
        }
        for id in DepartmentId::ALL {
            assert!(seen.contains(&id));
        }
    }
}
