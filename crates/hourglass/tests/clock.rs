#![forbid(unsafe_code)]

use hourglass::{Clock, Error, StaticClock, SystemClock, TimeUnit};

#[tokio::test(start_paused = true)]
async fn system_clock_sleep_suspends_for_requested_amount() {
    let clock = SystemClock;
    let before = tokio::time::Instant::now();
    clock.sleep(250, TimeUnit::Millisecond).await.unwrap();
    assert!(before.elapsed() >= std::time::Duration::from_millis(250));
}

#[tokio::test]
async fn system_clock_rejects_calendar_sleep() {
    let clock = SystemClock;
    let result = clock.sleep(1, TimeUnit::Month).await;
    assert_eq!(result, Err(Error::CalendarUnit(TimeUnit::Month)));
}

#[tokio::test(start_paused = true)]
async fn static_clock_sleep_is_a_noop() {
    let clock = StaticClock::default();
    let before = tokio::time::Instant::now();
    // even calendar units succeed; nothing is suspended
    clock.sleep(7, TimeUnit::Year).await.unwrap();
    clock.sleep(1_000, TimeUnit::Second).await.unwrap();
    assert_eq!(before.elapsed(), std::time::Duration::ZERO);
}

#[tokio::test]
async fn clocks_are_substitutable_behind_the_trait() {
    let clocks: Vec<Box<dyn Clock>> = vec![
        Box::new(SystemClock),
        Box::new(StaticClock::new(1_700_000_000i64)),
    ];
    for clock in &clocks {
        assert!(clock.timestamp() > 0);
        clock.sleep(0, TimeUnit::Nanosecond).await.unwrap();
    }
}

#[tokio::test]
async fn frozen_timestamp_is_stable_across_calls() {
    let clock = StaticClock::default();
    let first = clock.timestamp();
    let second = clock.timestamp();
    assert_eq!(first, second);
}
