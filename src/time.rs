use std::time::Instant;

/// Run `func`, returning its result alongside the elapsed wall time in
/// milliseconds.
pub fn timed<T, F: FnOnce() -> T>(func: F) -> (T, f64) {
    let start = Instant::now();
    let result = func();
    (result, start.elapsed().as_secs_f64() * 1e3)
}
