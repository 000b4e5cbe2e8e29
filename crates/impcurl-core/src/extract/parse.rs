//! Parse a single response header block.

use http::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::RequestError;

/// Parse header lines of a block into a case-insensitive, multi-valued map.
///
/// Every `\r\n`-separated line containing a colon is split at the first one;
/// name and value are trimmed. Lines that are not legal header fields (the
/// status line, stray text) are ignored.
pub fn parse_header_block(block: &[u8]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for line in block.split(|&b| b == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let Some(colon) = line.iter().position(|&b| b == b':') else {
            continue;
        };
        let name = line[..colon].trim_ascii();
        let value = line[colon + 1..].trim_ascii();
        match (HeaderName::from_bytes(name), HeaderValue::from_bytes(value)) {
            (Ok(name), Ok(value)) => {
                headers.append(name, value);
            }
            _ => {
                tracing::trace!(line = %String::from_utf8_lossy(line), "skipping non-header line");
            }
        }
    }
    headers
}

/// Status code from the first line of a header block.
///
/// The line is split on spaces; the second token must be an integer
/// (`HTTP/2 200`, `HTTP/1.1 404 Not Found`). Its range is not checked.
pub fn parse_status_line(block: &[u8]) -> Result<u16, RequestError> {
    let first = block.split(|&b| b == b'\n').next().unwrap_or_default();
    let line = String::from_utf8_lossy(first.trim_ascii_end());
    let mut tokens = line.split(' ');
    let (Some(_), Some(token)) = (tokens.next(), tokens.next()) else {
        return Err(RequestError::StatusLine {
            line: line.to_string(),
        });
    };
    token.parse::<u16>().map_err(|_| RequestError::StatusCode {
        token: token.to_string(),
    })
}
