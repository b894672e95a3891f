use gloo_timers::future::TimeoutFuture;

/// Fake network round-trip; zero means resolve immediately
pub async fn simulate_latency(ms: u32) {
    if ms > 0 {
        TimeoutFuture::new(ms).await;
    }
}
