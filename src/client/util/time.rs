use std::time::Duration;

use chrono::{Local, NaiveDateTime};

/// Current local wall-clock time, used for departure countdowns.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn unix_millis() -> i64 {
    Local::now().timestamp_millis()
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
