//! Per-request timing and memory diagnostics
//!
//! The middleware captures a `RequestContext` when a request arrives, stores
//! it in the request extensions, and stamps two headers on the response:
//!
//! - `X-Debug-Time: 1.23 ms` - wall-clock time spent on the request
//! - `X-Debug-Memory: 4.00 KB` - change in process resident memory
//!
//! Memory is read from `/proc/self/status` and reported as 0 elsewhere.
//! Under concurrent load the memory figure includes other requests' work.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Header carrying elapsed request time.
pub const DEBUG_TIME_HEADER: &str = "x-debug-time";

/// Header carrying the resident memory delta.
pub const DEBUG_MEMORY_HEADER: &str = "x-debug-memory";

/// Start-of-request measurements
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    started: Instant,
    start_memory_kb: Option<u64>,
}

impl RequestContext {
    pub fn begin() -> Self {
        Self {
            started: Instant::now(),
            start_memory_kb: resident_memory_kb(),
        }
    }

    /// Milliseconds since the request started.
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Kilobytes of resident memory gained (or lost) since the request started.
    pub fn memory_delta_kb(&self) -> f64 {
        match (self.start_memory_kb, resident_memory_kb()) {
            (Some(start), Some(now)) => now as f64 - start as f64,
            _ => 0.0,
        }
    }
}

/// Attach debug headers to every response.
pub async fn debug_headers(mut request: Request, next: Next) -> Response {
    let ctx = RequestContext::begin();
    request.extensions_mut().insert(ctx);

    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    let elapsed_ms = ctx.elapsed_ms();
    let memory_kb = ctx.memory_delta_kb();

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&format!("{:.2} ms", elapsed_ms)) {
        headers.insert(HeaderName::from_static(DEBUG_TIME_HEADER), value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("{:.2} KB", memory_kb)) {
        headers.insert(HeaderName::from_static(DEBUG_MEMORY_HEADER), value);
    }

    tracing::debug!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        duration_ms = %format!("{:.2}", elapsed_ms),
        "Request completed"
    );

    response
}

#[cfg(target_os = "linux")]
fn resident_memory_kb() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_vm_rss(&status)
}

#[cfg(not(target_os = "linux"))]
fn resident_memory_kb() -> Option<u64> {
    None
}

/// Extract the `VmRSS` figure (in kB) from `/proc/self/status` text.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_vm_rss(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmRSS:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kb| kb.parse().ok())
}
