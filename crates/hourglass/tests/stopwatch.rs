#![forbid(unsafe_code)]

use hourglass::{HighResolutionTimer, MonotonicTimer, Stopwatch, TimeUnit};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn stopwatch_tracks_real_time() {
    let watch = Stopwatch::start();
    std::thread::sleep(Duration::from_millis(20));
    let elapsed = watch.elapsed();
    assert!(elapsed.as_millis() >= 20);
    assert!(elapsed.value_in(TimeUnit::Second).unwrap() < 10.0);
}

#[test]
fn concurrent_elapsed_reads_are_safe() {
    let timer: Arc<dyn HighResolutionTimer> = Arc::new(MonotonicTimer);
    let watch = Stopwatch::start_with(timer);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let mut previous = watch.elapsed();
                for _ in 0..100 {
                    let sample = watch.elapsed();
                    assert!(sample >= previous);
                    previous = sample;
                }
            });
        }
    });
}

#[test]
fn timer_is_shared_not_consumed() {
    let timer: Arc<dyn HighResolutionTimer> = Arc::new(MonotonicTimer);
    let first = Stopwatch::start_with(timer.clone());
    let second = Stopwatch::start_with(timer.clone());
    // the earlier stopwatch, sampled later, can never report less
    let late = second.elapsed();
    let early = first.elapsed();
    assert!(early >= late);
}
