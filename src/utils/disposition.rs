//! Best-effort filename derivation from a `content-disposition` header.
//!
//! The portal percent-encodes filenames, sometimes twice, so the value is
//! decoded twice; a decode failure falls back to the undecoded text. This is
//! deliberately no smarter than typical server behavior requires.

use std::borrow::Cow;

/// Placeholder used when no filename can be derived from the response
pub const UNKNOWN_FILE: &str = "unknown_file";

/// Derive a bare filename from a raw `content-disposition` header value.
///
/// Takes the text after the last `filename=`, strips surrounding quotes,
/// percent-decodes twice, reduces to the final path component, and cuts at
/// the first `;` so trailing parameters never leak into the name. Returns
/// `None` when the header carries no usable filename.
pub fn filename_from_disposition(value: &str) -> Option<String> {
    if !value.contains("filename=") {
        return None;
    }

    let raw = value.split("filename=").last()?.trim().trim_matches('"');

    let decoded = decode_lossy(raw);
    let decoded = decode_lossy(&decoded);

    // Reduce to a bare filename: no directory components, no parameters
    let base = decoded
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(decoded.as_str());
    let name = base.split(';').next().unwrap_or(base).trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Percent-decode, keeping the input when it is not valid UTF-8 once decoded
fn decode_lossy(input: &str) -> String {
    match urlencoding::decode(input) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => input.to_string(),
    }
}
