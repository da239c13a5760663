use std::time::{Duration, Instant};

/// Runs `f` and returns its result together with the wall time it took.
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
