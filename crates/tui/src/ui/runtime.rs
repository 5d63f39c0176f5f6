//! Runtime: event loop and terminal lifecycle for the sidebar TUI.
//!
//! A spawned task polls terminal input and forwards it over a channel until
//! the loop drops its receiver; the loop owns the `App`, routes keys through `MainView`, runs the
//! returned effects and redraws only when the app is dirty.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::time::Duration;

use tokio::{signal, sync::mpsc, task::JoinHandle};

use crate::app::App;
use crate::ui::main_component::MainView;

type Backend = CrosstermBackend<std::io::Stdout>;

/// How long one poll for terminal input may block before the forwarder
/// rechecks whether the loop is still listening.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Wait up to `timeout` for the next terminal event.
fn read_terminal_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? { event::read().map(Some) } else { Ok(None) }
}

/// Forward events from `next_event` until the receiver goes away or reading fails.
///
/// `next_event` must return within its timeout so the closed-channel check
/// runs; a reader parked forever would keep the runtime from shutting down.
async fn forward_input<F>(sender: mpsc::Sender<Event>, mut next_event: F)
where
    F: FnMut(Duration) -> std::io::Result<Option<Event>>,
{
    while !sender.is_closed() {
        match next_event(POLL_INTERVAL) {
            Ok(Some(event)) => {
                if sender.send(event).await.is_err() {
                    break;
                }
            }
            Ok(None) => tokio::task::yield_now().await,
            Err(e) => {
                tracing::warn!("Failed to read event: {}", e);
                break;
            }
        }
    }
}

/// Spawn the terminal input forwarder. Dropping the receiver stops it within
/// one poll interval.
fn spawn_input_thread() -> (mpsc::Receiver<Event>, JoinHandle<()>) {
    let (sender, receiver) = mpsc::channel(256);
    let handle = tokio::spawn(forward_input(sender, read_terminal_event));
    (receiver, handle)
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Returns `false` once an effect asks the loop to stop.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> bool {
    match input_event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let effects = main_view.handle_key_events(app, key);
            effects.into_iter().all(|effect| app.run_effect(effect))
        }
        Event::Resize(..) => {
            app.mark_dirty();
            true
        }
        _ => true,
    }
}

async fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let (mut input_receiver, input_task) = spawn_input_thread();
    let outcome = drive(terminal, app, main_view, &mut input_receiver).await;
    drop(input_receiver);
    if let Err(e) = input_task.await {
        tracing::warn!("input forwarder ended abnormally: {}", e);
    }
    outcome
}

async fn drive(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    loop {
        if app.take_dirty() {
            render(terminal, app, main_view)?;
        }
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(input_event) = maybe_event else { break };
                if !handle_input_event(app, main_view, input_event) {
                    break;
                }
            }
            _ = signal::ctrl_c() => break,
        }
    }
    Ok(())
}

/// Entry point: set up the terminal, run the loop, and always restore the
/// terminal before returning.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal)?;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[tokio::test]
    async fn forwarder_stops_once_receiver_is_dropped() {
        let (sender, receiver) = mpsc::channel(4);
        let task = tokio::spawn(forward_input(sender, |_| Ok(None)));
        drop(receiver);
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("forwarder finished")
            .expect("forwarder did not panic");
    }

    #[tokio::test]
    async fn forwarder_delivers_events_then_stops_on_read_error() {
        let (sender, mut receiver) = mpsc::channel(4);
        let mut pending = vec![Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))];
        let task = tokio::spawn(forward_input(sender, move |_| match pending.pop() {
            Some(event) => Ok(Some(event)),
            None => Err(std::io::Error::other("terminal closed")),
        }));
        let first = receiver.recv().await.expect("key forwarded");
        assert!(matches!(first, Event::Key(key) if key.code == KeyCode::Char('q')));
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("forwarder finished")
            .expect("forwarder did not panic");
        assert!(receiver.recv().await.is_none());
    }
}
