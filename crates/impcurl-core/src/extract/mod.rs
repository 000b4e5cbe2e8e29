//! Splitting curl's `--include` output into response header blocks and body.
//!
//! With `--include`, curl writes every response it sees (CONNECT replies from
//! a proxy, each redirect hop, the final response) to stdout as raw
//! status-line + header blocks, each terminated by `\r\n\r\n`, followed by
//! the body of the last one. Curl prints HTTP/2 responses in the same textual
//! form, so one delimiter convention covers every protocol version.

mod parse;

pub use parse::{parse_header_block, parse_status_line};

use std::fmt;

pub(crate) const DELIMITER: &[u8] = b"\r\n\r\n";
const PROTOCOL_PREFIX: &[u8] = b"HTTP/";

/// Returned when curl's output holds no `HTTP/` header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    NoValidResponses,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::NoValidResponses => write!(f, "unable to extract valid HTTP responses"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Header blocks and final body, borrowed from the raw output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<'a> {
    /// Every response header block, in output order, without its delimiter.
    pub blocks: Vec<&'a [u8]>,
    /// Bytes following the last delimiter.
    pub body: &'a [u8],
}

impl<'a> Extracted<'a> {
    /// Header block of the final response.
    pub fn last_block(&self) -> &'a [u8] {
        // `extract_responses` never returns an empty block list.
        self.blocks.last().copied().unwrap_or_default()
    }
}

/// Split `output` into response header blocks and the body of the last one.
///
/// Segments between delimiters that do not start with `HTTP/` (proxy banners
/// and similar noise) are skipped. The body is everything after the last
/// delimiter, so intermediate hops never contribute to it.
pub fn extract_responses(output: &[u8]) -> Result<Extracted<'_>, ExtractError> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(end) = find(&output[pos..], DELIMITER) {
        let block = &output[pos..pos + end];
        if is_response_block(block) {
            blocks.push(block);
        }
        pos += end + DELIMITER.len();
    }

    if blocks.is_empty() {
        return Err(ExtractError::NoValidResponses);
    }

    tracing::trace!(blocks = blocks.len(), body_len = output.len() - pos, "extracted responses");

    Ok(Extracted {
        blocks,
        body: &output[pos..],
    })
}

fn is_response_block(block: &[u8]) -> bool {
    block.starts_with(PROTOCOL_PREFIX) && block.trim_ascii().len() > PROTOCOL_PREFIX.len()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
