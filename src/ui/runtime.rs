use crate::carousel::{TimerDriver, TokioTimerDriver};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::screen::Screen;
use anyhow::Context;
use std::time::Instant;

/// Run the showcase until the user quits.
///
/// Autoplay timers sleep on a small tokio runtime and report back through the
/// same channel as keyboard and mouse input, so every carousel mutation
/// happens on this thread, one event at a time.
pub fn run(config: Config) -> anyhow::Result<()> {
    let timers = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("autoplay")
        .enable_time()
        .build()
        .context("failed to start autoplay runtime")?;

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let handle = timers.handle().clone();
    let timer_tx = events.sender();

    let mut app = App::new(
        &config,
        |section| -> Box<dyn TimerDriver> {
            let tx = timer_tx.clone();
            Box::new(TokioTimerDriver::new(handle.clone(), move |token| {
                let _ = tx.send(AppEvent::Autoplay { section, token });
            }))
        },
        events.sender(),
    )
    .context("invalid carousel configuration")?;

    let mut screen = Screen::enter().context("failed to set up terminal")?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start();

    loop {
        screen.draw(&app)?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, Instant::now()),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Autoplay { section, token }) => {
                app.on_autoplay(section, token);
            }
            Ok(AppEvent::SlideChanged { section, direction }) => {
                app.on_slide_changed(section, direction, Instant::now());
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.stop();
    drop(app);
    drop(screen);
    timers.shutdown_background();
    Ok(())
}
