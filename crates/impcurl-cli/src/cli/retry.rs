//! `--retries` support for `impcurl get`.

use impcurl_core::RequestError;
use std::thread;
use std::time::Duration;

/// Delay before the first retry; doubled for each further one.
pub(crate) const FIRST_DELAY: Duration = Duration::from_millis(500);
const MAX_DELAY: Duration = Duration::from_secs(10);

/// curl timeouts and connection-level failures, throttling and 5xx.
pub(crate) fn is_transient(err: &RequestError) -> bool {
    match err {
        // timeout, resolve proxy, resolve host, connect, empty reply, send, recv
        RequestError::Tool { exit_code } => matches!(exit_code, 28 | 5 | 6 | 7 | 52 | 55 | 56),
        RequestError::Http { status, .. } => *status == 429 || (500..600).contains(status),
        _ => false,
    }
}

/// Delay before retry number `retry` (1-based).
fn delay_before(retry: u32, first: Duration) -> Duration {
    let factor = 1u32 << retry.saturating_sub(1).min(16);
    first.saturating_mul(factor).min(MAX_DELAY)
}

/// Call `request` once, then again up to `retries` times while it keeps
/// failing with a transient error. The last result is returned as is.
pub(crate) fn with_retries<T>(
    retries: u32,
    first_delay: Duration,
    mut request: impl FnMut() -> Result<T, RequestError>,
) -> Result<T, RequestError> {
    let mut retry = 0;
    loop {
        match request() {
            Err(err) if retry < retries && is_transient(&err) => {
                retry += 1;
                let delay = delay_before(retry, first_delay);
                tracing::info!(retry, retries, ?delay, error = %err, "retrying request");
                thread::sleep(delay);
            }
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> RequestError {
        RequestError::Http {
            status,
            reason: String::new(),
        }
    }

    #[test]
    fn transient_errors() {
        assert!(is_transient(&RequestError::Tool { exit_code: 28 }));
        assert!(is_transient(&RequestError::Tool { exit_code: 6 }));
        assert!(is_transient(&RequestError::Tool { exit_code: 56 }));
        assert!(!is_transient(&RequestError::Tool { exit_code: 3 }));
        assert!(is_transient(&http(429)));
        assert!(is_transient(&http(502)));
        assert!(!is_transient(&http(404)));
        assert!(!is_transient(&RequestError::BinaryNotFound {
            binary: "curl".to_string()
        }));
    }

    #[test]
    fn delay_doubles_up_to_cap() {
        let first = Duration::from_millis(500);
        assert_eq!(delay_before(1, first), Duration::from_millis(500));
        assert_eq!(delay_before(2, first), Duration::from_secs(1));
        assert_eq!(delay_before(3, first), Duration::from_secs(2));
        assert_eq!(delay_before(10, first), MAX_DELAY);
        assert_eq!(delay_before(u32::MAX, first), MAX_DELAY);
    }

    #[test]
    fn retries_transient_failures_until_success() {
        let mut calls = 0;
        let out = with_retries(5, Duration::ZERO, || {
            calls += 1;
            if calls < 3 {
                Err(RequestError::Tool { exit_code: 28 })
            } else {
                Ok(calls)
            }
        })
        .unwrap();
        assert_eq!(out, 3);
    }

    #[test]
    fn zero_retries_calls_once() {
        let mut calls = 0;
        let err = with_retries(0, Duration::ZERO, || -> Result<(), _> {
            calls += 1;
            Err(RequestError::Tool { exit_code: 7 })
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), Some(7));
        assert_eq!(calls, 1);
    }

    #[test]
    fn gives_up_after_retries() {
        let mut calls = 0;
        let err = with_retries(2, Duration::ZERO, || -> Result<(), _> {
            calls += 1;
            Err(http(503))
        })
        .unwrap_err();
        assert_eq!(err.http_status(), Some(503));
        assert_eq!(calls, 3);
    }

    #[test]
    fn permanent_failure_is_not_retried() {
        let mut calls = 0;
        let err = with_retries(5, Duration::ZERO, || -> Result<(), _> {
            calls += 1;
            Err(http(404))
        })
        .unwrap_err();
        assert!(err.is_http_error());
        assert_eq!(calls, 1);
    }
}
