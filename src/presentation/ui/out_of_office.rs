//! Out-of-office view: request form plus recent requests.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{OutOfOfficeRequest, RequestStatus};
use crate::domain::sample;
use crate::presentation::state::{Selection, ViewCycle};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::TextInput;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Tabs of the out-of-office view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfOfficeTab {
    MyRequests,
    RequestForm,
}

impl ViewCycle for OutOfOfficeTab {
    const ALL: &'static [Self] = &[Self::MyRequests, Self::RequestForm];
}

/// Form field order within the request tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OooField {
    Start,
    End,
    Reason,
}

impl ViewCycle for OooField {
    const ALL: &'static [Self] = &[Self::Start, Self::End, Self::Reason];
}

/// State of the out-of-office view.
///
/// Opens on the request form, not the request list. Submitting validates
/// the dates, logs the request and shows a confirmation line; the recent
/// requests card is a fixed record set and is not appended to.
pub struct OutOfOfficeState {
    tab: Selection<OutOfOfficeTab>,
    field: Selection<OooField>,
    start_input: TextInput,
    end_input: TextInput,
    reason_input: TextInput,
    search_input: TextInput,
    feedback: Option<(bool, String)>,
    recent: Vec<OutOfOfficeRequest>,
    tab_regions: [Rect; 2],
    field_regions: [Rect; 3],
    submit_region: Rect,
}

impl Default for OutOfOfficeState {
    fn default() -> Self {
        Self::new()
    }
}

impl OutOfOfficeState {
    #[must_use]
    pub fn new() -> Self {
        let mut start_input = TextInput::new("Start date").placeholder("YYYY-MM-DD");
        start_input.set_focused(true);
        Self {
            tab: Selection::new(OutOfOfficeTab::RequestForm),
            field: Selection::new(OooField::Start),
            start_input,
            end_input: TextInput::new("End date").placeholder("YYYY-MM-DD"),
            reason_input: TextInput::new("Reason").placeholder("Why will you be away?"),
            search_input: TextInput::new("Search").placeholder("Filter by reason..."),
            feedback: None,
            recent: sample::recent_requests(),
            tab_regions: [Rect::default(); 2],
            field_regions: [Rect::default(); 3],
            submit_region: Rect::default(),
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> OutOfOfficeTab {
        self.tab.active()
    }

    pub fn select_tab(&mut self, tab: OutOfOfficeTab) {
        self.tab.select(tab);
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        let on_list = self.tab.active() == OutOfOfficeTab::MyRequests;
        self.search_input.set_focused(on_list);
        if !on_list {
            self.refocus();
        }
    }

    /// Recent requests whose reason matches the search query.
    #[must_use]
    pub fn filtered_requests(&self) -> Vec<&OutOfOfficeRequest> {
        let query = self.search_input.value().trim().to_lowercase();
        self.recent
            .iter()
            .filter(|request| query.is_empty() || request.reason().to_lowercase().contains(&query))
            .collect()
    }

    /// Last submit outcome: `(accepted, message)`.
    #[must_use]
    pub fn feedback(&self) -> Option<&(bool, String)> {
        self.feedback.as_ref()
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.field.active() {
            OooField::Start => &mut self.start_input,
            OooField::End => &mut self.end_input,
            OooField::Reason => &mut self.reason_input,
        }
    }

    fn refocus(&mut self) {
        let active = self.field.active();
        self.start_input.set_focused(active == OooField::Start);
        self.end_input.set_focused(active == OooField::End);
        self.reason_input.set_focused(active == OooField::Reason);
    }

    fn submit(&mut self) {
        let start = self.start_input.value().trim().to_string();
        let end = self.end_input.value().trim().to_string();
        let reason = self.reason_input.value().trim().to_string();

        let outcome = Self::validate(&start, &end, &reason);
        match outcome {
            Ok(()) => {
                tracing::info!(%start, %end, %reason, "out-of-office request submitted");
                self.feedback = Some((
                    true,
                    format!("Request submitted: {start} to {end}, pending approval"),
                ));
                self.start_input.clear();
                self.end_input.clear();
                self.reason_input.clear();
                self.field.select(OooField::Start);
                self.refocus();
            }
            Err(message) => {
                self.feedback = Some((false, message));
            }
        }
    }

    fn validate(start: &str, end: &str, reason: &str) -> Result<(), String> {
        let start_date = NaiveDate::parse_from_str(start, DATE_FORMAT)
            .map_err(|_| "Start date must be YYYY-MM-DD".to_string())?;
        let end_date = NaiveDate::parse_from_str(end, DATE_FORMAT)
            .map_err(|_| "End date must be YYYY-MM-DD".to_string())?;
        if end_date < start_date {
            return Err("End date is before start date".to_string());
        }
        if reason.is_empty() {
            return Err("A reason is required".to_string());
        }
        Ok(())
    }

    /// Handles a key while this view is active. Returns `true` if consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.tab.select_next();
            self.sync_focus();
            return true;
        }

        if self.tab.active() == OutOfOfficeTab::MyRequests {
            return self.search_input.handle_key(key);
        }

        match key.code {
            KeyCode::Tab => {
                self.field.select_next();
                self.refocus();
                true
            }
            KeyCode::BackTab => {
                self.field.select_previous();
                self.refocus();
                true
            }
            KeyCode::Enter => {
                self.submit();
                true
            }
            _ => self.focused_input_mut().handle_key(key),
        }
    }

    /// Handles a left press inside this view. Returns `true` if consumed.
    pub fn handle_press(&mut self, position: Position) -> bool {
        if self.tab_regions[0].contains(position) {
            self.select_tab(OutOfOfficeTab::MyRequests);
            return true;
        }
        if self.tab_regions[1].contains(position) {
            self.select_tab(OutOfOfficeTab::RequestForm);
            return true;
        }
        if self.tab.active() == OutOfOfficeTab::RequestForm {
            for (i, field) in [OooField::Start, OooField::End, OooField::Reason]
                .into_iter()
                .enumerate()
            {
                if self.field_regions[i].contains(position) {
                    self.field.select(field);
                    self.refocus();
                    return true;
                }
            }
            if self.submit_region.contains(position) {
                self.submit();
                return true;
            }
        }
        false
    }
}

/// Renders the out-of-office view.
pub struct OutOfOfficePanel<'a> {
    theme: &'a Theme,
}

impl<'a> OutOfOfficePanel<'a> {
    #[must_use]
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer, state: &mut OutOfOfficeState) {
        let [left, right] =
            Layout::horizontal([Constraint::Length(16), Constraint::Length(16)]).areas(area);
        state.tab_regions = [left, right];

        let labels = [
            (OutOfOfficeTab::MyRequests, left, " My Requests "),
            (OutOfOfficeTab::RequestForm, right, " New Request "),
        ];
        for (tab, region, label) in labels {
            let style = if state.tab.is_active(tab) {
                self.theme.highlight_style
            } else {
                self.theme.dimmed_style
            };
            Paragraph::new(Span::styled(label, style)).render(region, buf);
        }
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer, state: &mut OutOfOfficeState) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        state.field_regions = [layout[0], layout[1], layout[2]];
        (&state.start_input).render(layout[0], buf);
        (&state.end_input).render(layout[1], buf);
        (&state.reason_input).render(layout[2], buf);

        state.submit_region = layout[3];
        Paragraph::new(Span::styled(
            " Submit Request (Enter) ",
            Style::default()
                .bg(self.theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ))
        .render(layout[3], buf);

        if let Some((accepted, message)) = &state.feedback {
            let style = if *accepted {
                Style::default().fg(Color::Green)
            } else {
                self.theme.danger_style
            };
            Paragraph::new(Span::styled(message.clone(), style)).render(layout[4], buf);
        }
    }

    fn render_requests(&self, area: Rect, buf: &mut Buffer, state: &OutOfOfficeState) {
        let [search_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);
        (&state.search_input).render(search_area, buf);

        let requests = state.filtered_requests();
        if requests.is_empty() {
            Paragraph::new("No active requests found.")
                .style(self.theme.dimmed_style)
                .render(list_area, buf);
            return;
        }

        let mut lines = Vec::new();
        for request in requests {
            let status_style = match request.status() {
                RequestStatus::Approved => Style::default().fg(Color::Green),
                RequestStatus::Pending => Style::default().fg(Color::Yellow),
                RequestStatus::Rejected => self.theme.danger_style,
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} to {}", request.start_date(), request.end_date()),
                    Style::default().fg(Color::White),
                ),
                Span::raw("  "),
                Span::styled(request.reason().to_string(), self.theme.dimmed_style),
                Span::raw("  "),
                Span::styled(format!("[{}]", request.status().label()), status_style),
            ]));
        }
        Paragraph::new(lines).render(list_area, buf);
    }
}

impl StatefulWidget for OutOfOfficePanel<'_> {
    type State = OutOfOfficeState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Out of Office ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [tabs_area, _, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        self.render_tabs(tabs_area, buf, state);

        match state.tab.active() {
            OutOfOfficeTab::RequestForm => self.render_form(body_area, buf, state),
            OutOfOfficeTab::MyRequests => self.render_requests(body_area, buf, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut OutOfOfficeState, text: &str) {
        for c in text.chars() {
            state.handle_key(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_opens_on_request_form() {
        let state = OutOfOfficeState::new();
        assert_eq!(state.active_tab(), OutOfOfficeTab::RequestForm);
    }

    #[test]
    fn test_tab_switch_is_consumed() {
        let mut state = OutOfOfficeState::new();
        let chord = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert!(state.handle_key(&chord));
        assert_eq!(state.active_tab(), OutOfOfficeTab::MyRequests);
    }

    #[test]
    fn test_valid_submission_clears_form() {
        let mut state = OutOfOfficeState::new();
        type_text(&mut state, "2026-09-01");
        state.handle_key(&key(KeyCode::Tab));
        type_text(&mut state, "2026-09-03");
        state.handle_key(&key(KeyCode::Tab));
        type_text(&mut state, "Conference");
        state.handle_key(&key(KeyCode::Enter));

        let (accepted, message) = state.feedback().expect("feedback after submit");
        assert!(accepted);
        assert!(message.contains("2026-09-01"));
        assert!(state.start_input.is_empty());
        assert!(state.reason_input.is_empty());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut state = OutOfOfficeState::new();
        type_text(&mut state, "2026-09-05");
        state.handle_key(&key(KeyCode::Tab));
        type_text(&mut state, "2026-09-01");
        state.handle_key(&key(KeyCode::Tab));
        type_text(&mut state, "Trip");
        state.handle_key(&key(KeyCode::Enter));

        let (accepted, message) = state.feedback().expect("feedback after submit");
        assert!(!accepted);
        assert!(message.contains("before start"));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut state = OutOfOfficeState::new();
        type_text(&mut state, "next tuesday");
        state.handle_key(&key(KeyCode::Enter));

        let (accepted, _) = state.feedback().expect("feedback after submit");
        assert!(!accepted);
    }

    #[test]
    fn test_submission_does_not_grow_recent_list() {
        let mut state = OutOfOfficeState::new();
        let before = state.recent.len();
        type_text(&mut state, "2026-09-01");
        state.handle_key(&key(KeyCode::Tab));
        type_text(&mut state, "2026-09-01");
        state.handle_key(&key(KeyCode::Tab));
        type_text(&mut state, "Sick");
        state.handle_key(&key(KeyCode::Enter));
        assert_eq!(state.recent.len(), before);
    }

    #[test]
    fn test_search_filters_requests_by_reason() {
        let mut state = OutOfOfficeState::new();
        let chord = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        state.handle_key(&chord);
        assert_eq!(state.active_tab(), OutOfOfficeTab::MyRequests);
        assert_eq!(state.filtered_requests().len(), state.recent.len());

        type_text(&mut state, "sakit");
        assert_eq!(state.filtered_requests().len(), 2);

        type_text(&mut state, "zzz");
        // An unmatched query leaves the list empty; the view falls back to
        // the placeholder line.
        assert!(state.filtered_requests().is_empty());
    }

    #[test]
    fn test_search_keys_do_not_touch_form() {
        let mut state = OutOfOfficeState::new();
        let chord = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        state.handle_key(&chord);

        type_text(&mut state, "abc");
        state.handle_key(&chord);
        assert_eq!(state.active_tab(), OutOfOfficeTab::RequestForm);
        assert!(state.start_input.is_empty());
        assert_eq!(state.search_input.value(), "abc");
    }

    #[test]
    fn test_press_switches_tab_and_field() {
        let mut state = OutOfOfficeState::new();
        state.tab_regions = [Rect::new(0, 0, 16, 1), Rect::new(16, 0, 16, 1)];
        state.field_regions = [
            Rect::new(0, 2, 30, 3),
            Rect::new(0, 5, 30, 3),
            Rect::new(0, 8, 30, 3),
        ];

        assert!(state.handle_press(Position::new(2, 0)));
        assert_eq!(state.active_tab(), OutOfOfficeTab::MyRequests);

        assert!(state.handle_press(Position::new(18, 0)));
        assert_eq!(state.active_tab(), OutOfOfficeTab::RequestForm);

        assert!(state.handle_press(Position::new(5, 6)));
        assert_eq!(state.field.active(), OooField::End);

        assert!(!state.handle_press(Position::new(70, 20)));
    }
}
