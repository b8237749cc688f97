//! HTML escaping for text content and attribute values
//!
//! Five characters are replaced:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&#34;`
//! - `'` → `&#39;`
//!
//! Tag names and attribute keys are never passed through here.

use std::borrow::Cow;
use std::io;

use crate::render::Sink;

fn entity(c: u8) -> Option<&'static str> {
    match c {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&#34;"),
        b'\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape `s`, borrowing it unchanged when nothing needs escaping.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.bytes().any(|b| entity(b).is_some()) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    let _ = push_escaped(s, |chunk| {
        escaped.push_str(chunk);
        Ok(())
    });
    Cow::Owned(escaped)
}

/// Write the escaped form of `s` straight to `sink`.
///
/// Unescaped runs are written as single slices, so plain text costs one
/// write and no allocation.
pub(crate) fn escape_into<S: Sink + ?Sized>(sink: &mut S, s: &str) -> io::Result<()> {
    push_escaped(s, |chunk| sink.put(chunk))
}

// All escapable characters are ASCII, so splitting at their byte offsets
// always lands on char boundaries.
fn push_escaped<F>(s: &str, mut out: F) -> io::Result<()>
where
    F: FnMut(&str) -> io::Result<()>,
{
    let mut start = 0;
    for (i, b) in s.bytes().enumerate() {
        if let Some(rep) = entity(b) {
            if start < i {
                out(&s[start..i])?;
            }
            out(rep)?;
            start = i + 1;
        }
    }
    if start < s.len() {
        out(&s[start..])?;
    }
    Ok(())
}
