// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::context::AppContext;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, sync::Arc, time::Duration};

pub fn run(ctx: Arc<dyn AppContext>, cfg: Config) -> Result<()> {
    // Panic Hook: leave the alternate screen so the message is readable
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log::error!("PANIC: {:?}", info);
        default_hook(info);
    }));

    // --- 1. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 2. STATE INIT ---
    let mut app_state = AppState::new_with_ctx(ctx, cfg);
    app_state.update_clock(chrono::Local::now().naive_local());

    // --- 3. UI LOOP ---
    let result = run_loop(&mut terminal, &mut app_state);

    // --- 4. CLEANUP ---
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &*state))?;

        if !event::poll(Duration::from_millis(250))? {
            state.update_clock(chrono::Local::now().naive_local());
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Filter out KeyRelease events to prevent double input on Windows
            if key.kind == event::KeyEventKind::Release {
                continue;
            }

            match handlers::handle_key_event(key, state) {
                Some(Action::Quit) => break,
                Some(Action::SaveConfig) => {
                    let cfg = state.updated_config();
                    match cfg.save(state.ctx.as_ref()) {
                        Ok(()) => state.config = cfg,
                        Err(e) => {
                            log::warn!("Could not save config: {}", e);
                            state.message = format!("Could not save config: {}", e);
                        }
                    }
                }
                None => {}
            }
        }
    }
    log::info!("Session ended with {} course(s)", state.timetable.len());
    Ok(())
}
