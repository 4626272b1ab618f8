//! Screen layout and rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::CalculatorApp;
use crate::tui::keypad::KeypadWidget;

/// Title shown above the display
pub const APP_TITLE: &str = " Tallypad ";

/// Screen regions, shared between rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Expression display area
    pub display: Rect,
    /// Keypad area
    pub keypad: Rect,
    /// Keyboard shortcut help area
    pub help: Rect,
}

/// Splits the terminal area into display, keypad, and help regions
#[must_use]
pub fn layout(area: Rect) -> UiLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(12)])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(22), Constraint::Length(24)])
        .split(rows[1]);

    UiLayout {
        display: rows[0],
        keypad: body[0],
        help: body[1],
    }
}

/// Renders the full UI
pub fn render(frame: &mut Frame, app: &CalculatorApp) {
    let regions = layout(frame.area());

    render_display(frame, app, regions.display);
    frame.render_widget(KeypadWidget::new(app.keypad()), regions.keypad);
    render_help(frame, regions.help);
}

fn render_display(frame: &mut Frame, app: &CalculatorApp, area: Rect) {
    let style = if app.is_error() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };

    let display = Paragraph::new(Line::from(Span::styled(app.display(), style)))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(APP_TITLE)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(display, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Yellow);
    let lines = vec![
        Line::from(vec![Span::styled("0-9 .", key_style), Span::raw("  enter")]),
        Line::from(vec![Span::styled("+-*/ ", key_style), Span::raw("  operator")]),
        Line::from(vec![Span::styled("%    ", key_style), Span::raw("  percent")]),
        Line::from(vec![Span::styled("Enter", key_style), Span::raw("  evaluate")]),
        Line::from(vec![Span::styled("Bksp ", key_style), Span::raw("  delete")]),
        Line::from(vec![Span::styled("Esc  ", key_style), Span::raw("  clear")]),
        Line::from(vec![Span::styled("^C   ", key_style), Span::raw("  quit")]),
        Line::from(""),
        Line::from(Span::raw("Click buttons with")),
        Line::from(Span::raw("the mouse.")),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::KeyAction;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    // ===== Layout tests =====

    #[test]
    fn test_layout_regions_disjoint() {
        let regions = layout(Rect::new(0, 0, 60, 20));
        assert_eq!(regions.display.height, 3);
        assert_eq!(regions.keypad.y, 3);
        assert_eq!(regions.help.y, 3);
        assert_eq!(regions.keypad.x + regions.keypad.width, regions.help.x);
    }

    #[test]
    fn test_layout_keypad_fills_left() {
        let regions = layout(Rect::new(0, 0, 80, 24));
        assert!(regions.keypad.width >= 22);
        assert_eq!(regions.help.width, 24);
    }

    // ===== Render tests =====

    #[test]
    fn test_render_initial_state() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = CalculatorApp::new();

        terminal.draw(|frame| render(frame, &app)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Tallypad"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("Keys"));
        assert!(content.contains('0'));
    }

    #[test]
    fn test_render_expression() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = CalculatorApp::new();
        app.handle_key(KeyAction::Digit('1'));
        app.handle_key(KeyAction::Digit('2'));

        terminal.draw(|frame| render(frame, &app)).unwrap();

        assert!(buffer_content(&terminal).contains("12"));
    }

    #[test]
    fn test_render_error_state() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = CalculatorApp::new();
        app.handle_key(KeyAction::Digit('1'));
        app.handle_key(KeyAction::Operator(crate::core::Operation::Divide));
        app.handle_key(KeyAction::Digit('0'));
        app.handle_key(KeyAction::Evaluate);

        terminal.draw(|frame| render(frame, &app)).unwrap();

        assert!(buffer_content(&terminal).contains("Error"));
    }

    #[test]
    fn test_render_small_terminal() {
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = CalculatorApp::new();
        // Must not panic on a cramped terminal
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
