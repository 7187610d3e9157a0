use bytes::Bytes;
use log::trace;

use crate::matcher;

/// Splits a buffer into lines without copying.
///
/// Each item is a view into the original buffer with the trailing `\n`
/// (and a `\r` right before it) removed. A final line without a newline is
/// still yielded; an empty buffer yields nothing.
pub fn lines(input: &Bytes) -> Lines {
    Lines { rest: input.clone() }
}

pub struct Lines {
    rest: Bytes,
}

impl Iterator for Lines {
    type Item = Bytes;

    fn next(&mut self) -> Option<Bytes> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match self.rest.iter().position(|&b| b == b'\n') {
            Some(newline) => {
                let with_newline = self.rest.split_to(newline + 1);
                with_newline.slice(..newline)
            }
            None => self.rest.split_to(self.rest.len()),
        };
        Some(trim_carriage_return(line))
    }
}

fn trim_carriage_return(line: Bytes) -> Bytes {
    if line.last() == Some(&b'\r') {
        line.slice(..line.len() - 1)
    } else {
        line
    }
}

/// Lines of `input` selected by `pattern`; with `invert` the non-matching ones.
pub fn matching_lines<'p>(
    pattern: &'p [u8],
    input: &Bytes,
    invert: bool,
) -> impl Iterator<Item = Bytes> + 'p {
    lines(input).filter(move |line| {
        let matched = matcher::is_match_bytes(pattern, line);
        trace!(
            "{:?} {} line {:?}",
            String::from_utf8_lossy(pattern),
            if matched { "matched" } else { "rejected" },
            String::from_utf8_lossy(line)
        );
        matched != invert
    })
}
