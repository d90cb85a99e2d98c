//! Runtime: unified event loop and input routing for the console.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop over input events and timer ticks.
//! - Route events through `MainView` and execute returned `Effect`s.
//! - Render only when something changed.
//!
//! Input comes from a dedicated thread blocking on `crossterm` reads and
//! forwarding events over a channel. The ticker runs fast only while a
//! deadline is pending (toast phases, the search debounce) and drops to a
//! long idle interval otherwise.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::MouseEventKind;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use landlord_types::{Effect, Msg, Severity};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::ConsoleOptions;
use crate::app::App;
use crate::ui::main_component::MainView;

/// Spawn a dedicated task that blocks on terminal input and forwards
/// `crossterm` events over a channel. Keeping `poll()` and `read()`
/// together avoids lost events on some terminals.
async fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let poll_interval = Duration::from_millis(16);
        loop {
            match event::poll(poll_interval) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        // Hover movement is unused; don't flood the channel.
                        if event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved) {
                            continue;
                        }
                        if let Err(error) = sender.send(event).await {
                            warn!("Failed to send event: {}", error);
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("Failed to read event: {}", error);
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    warn!("Failed to poll events: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        main_view.render(frame, area, app);
    })?;
    Ok(())
}

/// Handle raw crossterm input events and update `App` via the main view.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the runtime: terminal setup, the event loop, teardown.
pub async fn run_app(options: ConsoleOptions) -> Result<()> {
    let mut input_receiver = spawn_input_thread().await;
    let mut main_view = MainView::new();
    let mut app = App::new(options);
    let mut terminal = setup_terminal()?;

    // Ticking strategy: fast while a deadline is pending, slow when idle.
    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut effects: Vec<Effect> = Vec::with_capacity(5);
    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        let needs_animation = app.has_pending_timers() || !effects.is_empty();
        let target_interval = if needs_animation { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(input_event) => {
                        if let Event::Key(key_event) = input_event
                            && key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        effects.extend(handle_input_event(&mut app, &mut main_view, input_event));
                        needs_render = true;
                    }
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
            }

            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, Msg::Tick));
                needs_render = needs_animation || !effects.is_empty();
            }

            _ = signal::ctrl_c() => { break; }
        }

        // Effects may queue further effects (an action reporting a toast);
        // drain until settled before drawing.
        while !effects.is_empty() {
            let batch: Vec<Effect> = effects.drain(..).collect();
            process_effects(&mut app, batch, &mut effects);
            needs_render = true;
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}

/// Executes a batch of effects against the application state. Follow-up
/// effects land in `queued_effects` for the next drain round.
fn process_effects(app: &mut App, effects: Vec<Effect>, queued_effects: &mut Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::SwitchTo(route) => app.switch_route(route),
            Effect::ShowModal(modal) => app.open_modal(modal),
            Effect::CloseModal => app.close_modal(),
            Effect::OpenContextMenu { column, row, route } => app.open_context_menu(column, row, route),
            Effect::CloseContextMenu => app.close_context_menu(),
            Effect::ShowToast { message, severity } => app.toasts.push(message, severity, Instant::now()),
            Effect::DispatchSearch(query) => {
                debug!(query = %query, "Search dispatched");
                app.search.last_query = Some(query);
            }
            Effect::RunAction(action_id) => match app.ctx.actions.get(&action_id) {
                Some(entry) => queued_effects.extend((entry.handler)(app)),
                None => {
                    warn!(action = %action_id, "Unknown action identifier");
                    queued_effects.push(Effect::ShowToast {
                        message: format!("Unknown action \"{action_id}\""),
                        severity: Severity::Warning,
                    });
                }
            },
        }
    }
}
