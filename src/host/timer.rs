use gloo_timers::callback::Timeout;

/// Runs `f` once after `millis`.
pub fn after_delay(millis: u32, f: impl FnOnce() + 'static) {
    Timeout::new(millis, f).forget();
}
