//! Byte-to-text conversion for the legacy-encoded source page.
//!
//! The bestseller feed is served in a non-Unicode codepage (EUC-KR), so the
//! raw payload is decoded explicitly by label. Invalid byte sequences are an
//! error that aborts the run, never a silent replacement.

use encoding_rs::Encoding;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown encoding label `{label}`")]
    UnknownEncoding { label: String },
    #[error("payload is not valid {encoding}")]
    InvalidBytes { encoding: &'static str },
}

/// Decode a raw page body declared to be in `encoding_label` (a WHATWG
/// encoding label such as `euc-kr`).
pub fn decode_page(body: &[u8], encoding_label: &str) -> Result<String, DecodeError> {
    let encoding =
        Encoding::for_label(encoding_label.as_bytes()).ok_or_else(|| DecodeError::UnknownEncoding {
            label: encoding_label.to_string(),
        })?;

    let (text, _, had_errors) = encoding.decode(body);
    if had_errors {
        return Err(DecodeError::InvalidBytes {
            encoding: encoding.name(),
        });
    }

    Ok(text.into_owned())
}
