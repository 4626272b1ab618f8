//! Tallypad terminal calculator
//!
//! Run with: cargo run

use std::io;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tallypad::tui::{layout, render, CalculatorApp, InputHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Routes a mouse click to the keypad button under it
fn handle_mouse(app: &mut CalculatorApp, mouse: MouseEvent, area: ratatui::layout::Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let regions = layout(area);
    if let Some(action) = app
        .keypad()
        .hit_test(regions.keypad, mouse.column, mouse.row)
    {
        app.handle_button(action);
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|frame| render(frame, &app))?;

        match event::read()? {
            Event::Key(key) => app.handle_key(input_handler.handle_key(key)),
            Event::Mouse(mouse) => {
                let area = terminal.size()?;
                handle_mouse(
                    &mut app,
                    mouse,
                    ratatui::layout::Rect::new(0, 0, area.width, area.height),
                );
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
