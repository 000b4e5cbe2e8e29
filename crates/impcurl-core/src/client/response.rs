//! Turn curl's stdout into a `Response` plus the header chain.

use http::{HeaderMap, StatusCode};

use crate::error::RequestError;
use crate::extract::{extract_responses, parse_header_block, parse_status_line};

/// Final response of a request.
#[derive(Debug, Clone)]
pub struct Response {
    /// Status code as sent by the server, not range-checked.
    pub status: u16,
    /// Headers of the final response (case-insensitive, multi-valued).
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Everything a request produced: the final response and the headers of
/// every hop (CONNECT replies, redirects, final response) in order.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub response: Response,
    pub chain: Vec<HeaderMap>,
}

impl Exchange {
    /// Raw body bytes of the final response.
    pub fn body(&self) -> &[u8] {
        &self.response.body
    }

    pub fn status(&self) -> u16 {
        self.response.status
    }

    /// Typed status, or `None` outside 100..=999.
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.response.status).ok()
    }

    pub fn into_body(self) -> Vec<u8> {
        self.response.body
    }
}

/// Build an `Exchange` from the stdout of a successful curl run.
///
/// Status and headers always come from the last extracted block. Blocks
/// that parse to zero header fields are left out of the chain. A status >= 400
/// becomes `RequestError::Http`.
pub(crate) fn assemble(stdout: &[u8]) -> Result<Exchange, RequestError> {
    let extracted = extract_responses(stdout)?;

    let last = extracted.last_block();
    let chain: Vec<HeaderMap> = extracted
        .blocks
        .iter()
        .map(|&block| parse_header_block(block))
        .filter(|headers| !headers.is_empty())
        .collect();

    let status = parse_status_line(last)?;
    if status >= 400 {
        return Err(RequestError::Http {
            status,
            reason: reason_phrase(status).to_string(),
        });
    }

    let headers = parse_header_block(last);
    Ok(Exchange {
        response: Response {
            status,
            headers,
            body: extracted.body.to_vec(),
        },
        chain,
    })
}

/// Standard reason phrase, "Unknown" for codes without one.
fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown")
}
