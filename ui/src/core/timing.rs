//! Clocks, sleeps and animation-frame ticks.

/// Milliseconds on a monotonic clock (`performance.now()` in the browser).
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    ORIGIN.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = ms.min(u32::MAX as u64) as u32;
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Resolves on the next `requestAnimationFrame` callback with its timestamp.
#[cfg(target_arch = "wasm32")]
pub async fn next_frame() -> f64 {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return now_ms();
    };

    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let callback = Closure::once_into_js(move |ts: f64| {
            let _ = resolve.call1(&wasm_bindgen::JsValue::NULL, &ts.into());
        });
        if window
            .request_animation_frame(callback.unchecked_ref())
            .is_err()
        {
            tracing::warn!("requestAnimationFrame unavailable");
        }
    });

    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(value) => value.as_f64().unwrap_or_else(now_ms),
        Err(_) => now_ms(),
    }
}

/// Native builds have no compositor; tick at roughly 60 Hz.
#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() -> f64 {
    sleep_ms(16).await;
    now_ms()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
    }

    #[test]
    fn sleep_advances_the_clock() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let before = now_ms();
        rt.block_on(sleep_ms(5));
        assert!(now_ms() - before >= 5.0);
    }
}
