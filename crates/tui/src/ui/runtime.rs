//! Runtime: unified event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input and periodic ticks.
//! - Route events through `MainView` and apply returned `Effect`s.
//!
//! Input comes from a dedicated thread that blocks on
//! `crossterm::event::read()` and forwards events over a channel; keeping
//! `poll()` and `read()` on the same OS thread avoids lost or delayed events
//! in some terminals.

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use navdeck_types::{Effect, Msg};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::app::App;
use crate::ui::main_view::MainView;

/// Spawn a dedicated input task that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
async fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::spawn(async move {
        let sixteen_ms = Duration::from_millis(16);
        loop {
            if event::poll(sixteen_ms).unwrap_or(false) {
                match event::read() {
                    Ok(event) => {
                        if let Err(e) = sender.send(event).await {
                            tracing::warn!("Failed to send event: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read event: {}", e);
                        break;
                    }
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
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the event
/// producer, runs the async event loop, and performs cleanup on exit.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut input_receiver = spawn_input_thread().await;
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = app.update(&Msg::Resize(width, height));
    }

    let mut effects: Vec<Effect> = Vec::new();
    let mut ticker = time::interval(Duration::from_millis(250));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Track the last known terminal size to synthesize Resize messages when
    // some terminals fail to emit them reliably.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(event) => {
                        if let Event::Key(key_event) = event
                            && key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        effects.extend(handle_input_event(&mut app, &mut main_view, event));
                        needs_render = true;
                    }
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
            }
            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, &Msg::Tick));
            }
            _ = signal::ctrl_c() => break,
        }

        // Fallback: detect terminal size changes even if no explicit Resize
        // event was received.
        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            effects.extend(app.update(&Msg::Resize(width, height)));
            needs_render = true;
        }

        for effect in effects.drain(..) {
            app.apply_effect(effect);
            needs_render = true;
        }
        if app.should_quit {
            break;
        }

        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
