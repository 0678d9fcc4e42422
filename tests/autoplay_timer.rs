//! Autoplay against the tokio clock, with time paused and auto-advanced.

use estate_carousel::carousel::{Carousel, CarouselConfig, TimerDriver, TimerToken, TokioTimerDriver};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::{timeout, Instant};

fn tokio_driver() -> (TokioTimerDriver, UnboundedReceiver<TimerToken>) {
    let (tx, rx) = unbounded_channel();
    let driver = TokioTimerDriver::new(Handle::current(), move |token| {
        let _ = tx.send(token);
    });
    (driver, rx)
}

fn hero(slides: usize) -> (Carousel<usize>, UnboundedReceiver<TimerToken>) {
    let (driver, rx) = tokio_driver();
    let carousel = Carousel::new(
        (0..slides).collect(),
        CarouselConfig::default(),
        Box::new(driver),
    )
    .unwrap();
    (carousel, rx)
}

#[tokio::test(start_paused = true)]
async fn advances_after_default_interval() {
    let (mut carousel, mut rx) = hero(3);
    let started = Instant::now();
    carousel.start();

    let token = rx.recv().await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(6000));
    assert!(carousel.on_timer(token));
    assert_eq!(carousel.state().current_index, 1);

    let token = rx.recv().await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(12000));
    assert!(carousel.on_timer(token));
    assert_eq!(carousel.state().current_index, 2);
}

#[tokio::test(start_paused = true)]
async fn manual_navigation_restarts_the_interval() {
    let (mut carousel, mut rx) = hero(3);
    let started = Instant::now();
    carousel.start();

    tokio::time::sleep(Duration::from_millis(4000)).await;
    carousel.next();

    // the first tick (due at 6000ms) was aborted
    let token = rx.recv().await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(10000));
    assert_eq!(carousel.pending_timer(), Some(token));
    assert!(carousel.on_timer(token));
    assert_eq!(carousel.state().current_index, 2);
}

#[tokio::test(start_paused = true)]
async fn rapid_clicks_deliver_a_single_tick() {
    let (mut carousel, mut rx) = hero(5);
    carousel.start();
    for _ in 0..5 {
        carousel.next();
    }

    let token = rx.recv().await.unwrap();
    assert_eq!(carousel.pending_timer(), Some(token));
    assert!(carousel.on_timer(token));

    // nothing else was queued behind it
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_the_pending_tick() {
    let (mut carousel, mut rx) = hero(3);
    carousel.start();
    carousel.stop();

    let waited = timeout(Duration::from_secs(60), rx.recv()).await;
    assert!(waited.is_err(), "tick delivered after stop");
    assert_eq!(carousel.state().current_index, 0);
}

#[tokio::test(start_paused = true)]
async fn paused_carousel_stays_put() {
    let (mut carousel, mut rx) = hero(3);
    carousel.start();
    carousel.pause();

    let waited = timeout(Duration::from_secs(60), rx.recv()).await;
    assert!(waited.is_err());

    carousel.resume();
    let started = Instant::now();
    let token = rx.recv().await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(6000));
    assert!(carousel.on_timer(token));
    assert_eq!(carousel.state().current_index, 1);
}

#[tokio::test(start_paused = true)]
async fn driver_tracks_live_tasks() {
    let (mut driver, mut rx) = tokio_driver();
    driver.schedule(TimerToken(1), Duration::from_millis(100));
    driver.schedule(TimerToken(2), Duration::from_millis(200));
    assert_eq!(driver.live_tasks(), 2);

    driver.cancel(TimerToken(1));
    assert_eq!(driver.live_tasks(), 1);

    assert_eq!(rx.recv().await, Some(TimerToken(2)));
    tokio::task::yield_now().await;
    assert_eq!(driver.live_tasks(), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_driver_aborts_tasks() {
    let (mut driver, mut rx) = tokio_driver();
    driver.schedule(TimerToken(7), Duration::from_millis(100));
    drop(driver);

    // the sender lived inside the aborted task's callback
    let waited = timeout(Duration::from_secs(1), rx.recv()).await;
    assert!(matches!(waited, Ok(None) | Err(_)));
}
