//! SGR escape emission
//!
//! Injected escapes can optionally be wrapped in protection markers so a
//! later consumer (readline prompts, for one) can tell decoration apart
//! from real content without parsing ANSI.

use std::io::{self, Write};

use super::color::ColorDescriptor;

/// Marks the start of injected, zero-width bytes
pub const IGNORE_START: u8 = 0x01;
/// Marks the end of injected, zero-width bytes
pub const IGNORE_END: u8 = 0x02;

/// Reset all attributes
pub const RESET: &[u8] = b"\x1b[0m";

/// An escape the highlighter injects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// `ESC [ <bold> ; <code> m`, opening a colored run
    Start(ColorDescriptor),
    /// `ESC [ 0 m`
    Reset,
}

/// Write an escape sequence, bracketed by markers when `protect` is set
///
/// The sequence is formatted straight into `out`.
pub fn write_escape<W: Write + ?Sized>(out: &mut W, escape: Escape, protect: bool) -> io::Result<()> {
    if protect {
        out.write_all(&[IGNORE_START])?;
    }
    match escape {
        Escape::Start(color) => write!(out, "\x1b[{};{}m", u8::from(color.bold), color.code)?,
        Escape::Reset => out.write_all(RESET)?,
    }
    if protect {
        out.write_all(&[IGNORE_END])?;
    }
    Ok(())
}

/// Remove every marker-delimited run from protected output
///
/// An unterminated run swallows the rest of the input.
pub fn strip_protected(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut inside = false;
    for &byte in data {
        match byte {
            IGNORE_START => inside = true,
            IGNORE_END if inside => inside = false,
            _ if !inside => out.push(byte),
            _ => {}
        }
    }
    out
}

/// Remove SGR sequences (`ESC [ ... m`) from output
///
/// Only the sequences this crate emits are recognised; any other
/// escape byte is left alone.
pub fn strip_sgr(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        if data[i] == 0x1b && data.get(i + 1) == Some(&b'[') {
            let params = &data[i + 2..];
            if let Some(len) = params.iter().position(|&b| b == b'm') {
                if params[..len].iter().all(|&b| b.is_ascii_digit() || b == b';') {
                    i += len + 3;
                    continue;
                }
            }
        }
        out.push(data[i]);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_start() {
        let mut out = Vec::new();
        write_escape(&mut out, Escape::Start(ColorDescriptor::new(true, 30)), false).unwrap();
        write_escape(&mut out, Escape::Start(ColorDescriptor::new(false, 33)), false).unwrap();
        assert_eq!(out, b"\x1b[1;30m\x1b[0;33m");
    }

    #[test]
    fn test_write_escape_plain() {
        let mut out = Vec::new();
        write_escape(&mut out, Escape::Reset, false).unwrap();
        assert_eq!(out, b"\x1b[0m");
    }

    #[test]
    fn test_write_escape_protected() {
        let mut out = Vec::new();
        write_escape(&mut out, Escape::Reset, true).unwrap();
        assert_eq!(out, b"\x01\x1b[0m\x02");
    }

    #[test]
    fn test_write_start_into_fixed_buffer() {
        // A borrowed slice sink; the sequence must fit exactly, markers included
        let mut buf = [0u8; 9];
        let mut sink = &mut buf[..];
        write_escape(&mut sink, Escape::Start(ColorDescriptor::new(false, 35)), true).unwrap();
        assert!(sink.is_empty());
        assert_eq!(&buf, b"\x01\x1b[0;35m\x02");

        let mut small = [0u8; 4];
        let mut sink = &mut small[..];
        assert!(write_escape(&mut sink, Escape::Start(ColorDescriptor::new(true, 31)), false).is_err());
    }

    #[test]
    fn test_strip_protected() {
        assert_eq!(strip_protected(b"\x01\x1b[0;33m\x02if\x01\x1b[0m\x02"), b"if");
        assert_eq!(strip_protected(b"plain"), b"plain");
        // Stray end marker outside a run is content
        assert_eq!(strip_protected(b"a\x02b"), b"a\x02b");
    }

    #[test]
    fn test_strip_sgr() {
        assert_eq!(strip_sgr(b"\x1b[1;30m// hi\x1b[0m\nx"), b"// hi\nx");
        assert_eq!(strip_sgr(b"\x1b[A"), b"\x1b[A");
        assert_eq!(strip_sgr(b"a\x1b"), b"a\x1b");
    }
}
