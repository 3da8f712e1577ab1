//! Two-way merge of sorted integer token streams.
//!
//! This is the core of the tool: a linear-time, constant-memory merge of two
//! already-sorted inputs. Each input is consumed through a [`TokenCursor`]
//! holding a one-token lookahead, and every integer is written to the output
//! as soon as it is chosen, so nothing is buffered beyond the two cursor
//! heads and the underlying I/O buffers.

use std::io::{self, BufRead, Write};

/// Outcome of a completed merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeResult {
    /// Total number of integers written to the output.
    pub items_written: u64,
}

/// One-token lookahead over a stream of whitespace-separated integers.
///
/// `head` holds the most recently read integer that has not been emitted yet,
/// or `None` once the stream is exhausted. End of input and a token that does
/// not parse as an `i64` are deliberately indistinguishable: both leave the
/// cursor exhausted, and an exhausted cursor is never read again.
struct TokenCursor<R: BufRead> {
    reader: R,
    head: Option<i64>,
}

impl<R: BufRead> TokenCursor<R> {
    /// Wrap a reader and prime the cursor with one read attempt.
    fn new(reader: R) -> io::Result<Self> {
        let mut cursor = Self { reader, head: None };
        cursor.refill()?;
        Ok(cursor)
    }

    /// Advance to the next integer token, or to the exhausted state.
    fn refill(&mut self) -> io::Result<()> {
        self.head = match next_token(&mut self.reader)? {
            Some(token) => std::str::from_utf8(&token)
                .ok()
                .and_then(|s| s.parse::<i64>().ok()),
            None => None,
        };
        Ok(())
    }

    /// Emit the held head and everything left in the stream, in order.
    ///
    /// Returns the number of integers written. Used for the drain phase,
    /// where only one source remains and no comparisons are needed.
    fn drain_into<W: Write>(mut self, output: &mut W) -> io::Result<u64> {
        let mut written = 0;
        while let Some(value) = self.head {
            writeln!(output, "{value}")?;
            written += 1;
            self.refill()?;
        }
        Ok(written)
    }
}

/// Which source still has data once the interleave phase ends.
enum Remainder<A: BufRead, B: BufRead> {
    StreamA(TokenCursor<A>),
    StreamB(TokenCursor<B>),
    BothExhausted,
}

/// Read the next whitespace-delimited token, or `None` at end of input.
///
/// Works directly on the `BufRead` buffer so a token may span buffer
/// boundaries without any per-token allocation beyond the token itself.
fn next_token<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut token: Vec<u8> = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0;
        let mut terminated = false;
        for &byte in buf {
            used += 1;
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    terminated = true;
                    break;
                }
            } else {
                token.push(byte);
            }
        }
        reader.consume(used);
        if terminated {
            break;
        }
    }
    Ok(if token.is_empty() { None } else { Some(token) })
}

/// Merge two sorted integer streams into `output`, one integer per line.
///
/// The output is non-decreasing iff both inputs were; no re-sorting happens,
/// only interleaving. Every parsed integer appears exactly once, in the same
/// relative order as in its source. On equal heads the value from stream A is
/// emitted first.
pub fn merge<A: BufRead, B: BufRead, W: Write>(
    input_a: A,
    input_b: B,
    output: &mut W,
) -> io::Result<MergeResult> {
    let mut cursor_a = TokenCursor::new(input_a)?;
    let mut cursor_b = TokenCursor::new(input_b)?;
    let mut items_written: u64 = 0;

    // Interleave while both cursors are active. The same match classifies the
    // initial state: if either side failed its priming read, we fall straight
    // through to the drain phase with the other side as the remainder.
    let remainder = loop {
        match (cursor_a.head, cursor_b.head) {
            (Some(a), Some(b)) => {
                if a <= b {
                    writeln!(output, "{a}")?;
                    items_written += 1;
                    cursor_a.refill()?;
                } else {
                    writeln!(output, "{b}")?;
                    items_written += 1;
                    cursor_b.refill()?;
                }
            }
            (Some(_), None) => break Remainder::StreamA(cursor_a),
            (None, Some(_)) => break Remainder::StreamB(cursor_b),
            (None, None) => break Remainder::BothExhausted,
        }
    };

    // Drain phase: the surviving cursor still holds an unemitted head, which
    // goes out first, followed by the rest of its stream.
    items_written += match remainder {
        Remainder::StreamA(cursor) => cursor.drain_into(output)?,
        Remainder::StreamB(cursor) => cursor.drain_into(output)?,
        Remainder::BothExhausted => 0,
    };

    Ok(MergeResult { items_written })
}
