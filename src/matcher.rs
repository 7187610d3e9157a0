//! Backtracking matcher for a tiny pattern language, usable in `const` context.
//!
//! Pattern language:
//! - `.` matches any single byte
//! - `^` as the first symbol anchors the match to the start of the text
//! - `$` as the last symbol anchors the match to the end of the text
//! - `*` repeats a symbol zero or more times (see [`match_here`] for which one)
//! - every other byte, including `^` and `$` away from the ends, matches itself
//!
//! There is no validation pass. Every pattern is accepted and every call
//! returns a `bool`; a malformed pattern such as a leading `*` simply matches
//! according to the rules below, which may not be what the author meant.

const ANY: u8 = b'.';
const START: u8 = b'^';
const END: u8 = b'$';
const STAR: u8 = b'*';

/// Returns true if `pattern` occurs in `text`.
///
/// ```
/// const FOUND: bool = pikegrep::is_match("bcd$", "abcd");
/// assert!(FOUND);
/// assert!(!pikegrep::is_match("^bcd", "abcde"));
/// ```
pub const fn is_match(pattern: &str, text: &str) -> bool {
    is_match_bytes(pattern.as_bytes(), text.as_bytes())
}

/// Byte-level form of [`is_match`].
///
/// An empty pattern matches anything. A leading `^` pins the match to offset
/// zero. Otherwise every start offset from `0` to `text.len() - 1` is tried in
/// turn; the empty suffix past the last byte is only tried when `text` itself
/// is empty, so `"$"` finds nothing in `"abc"`.
pub const fn is_match_bytes(pattern: &[u8], text: &[u8]) -> bool {
    match pattern {
        [] => true,
        [START, rest @ ..] => match_here(rest, text),
        _ => {
            let mut text = text;
            loop {
                if match_here(pattern, text) {
                    return true;
                }
                match text {
                    [_, rest @ ..] if !rest.is_empty() => text = rest,
                    _ => return false,
                }
            }
        }
    }
}

/// Returns true if `pattern` matches at the very start of `text`.
///
/// A `*` at the head of the pattern starts a repetition of the `*` byte
/// itself and skips the symbol after it, so `"a*b"` reads as `a` followed by
/// "any run of `*`" with the `b` dropped. It is not the usual "repeat the
/// previous symbol" rule.
pub const fn match_here(pattern: &[u8], text: &[u8]) -> bool {
    let mut pattern = pattern;
    let mut text = text;
    loop {
        match pattern {
            [] => return true,
            [STAR] => return match_star(STAR, &[], text),
            [STAR, _, rest @ ..] => return match_star(STAR, rest, text),
            [END] => return text.is_empty(),
            [symbol, pattern_rest @ ..] => match text {
                [c, text_rest @ ..] if *symbol == ANY || *symbol == *c => {
                    pattern = pattern_rest;
                    text = text_rest;
                }
                _ => return false,
            },
        }
    }
}

/// Matches zero or more repetitions of `symbol` followed by `pattern`.
///
/// The remainder is tried first against the current text; the loop then
/// moves forward one byte while the byte *after* the current front is
/// `symbol` (or `symbol` is `.`). Stops after at most `text.len()` passes.
///
/// This is a deliberate departure from the `constexpr` form of this loop,
/// which never advances `text`: it spins forever whenever the `text[1]`
/// look-ahead holds and reads out of bounds on one-byte text. Here the text
/// advances on each pass and a missing `text[1]` ends the loop. Results agree
/// with the non-advancing loop on every input where that loop terminates.
pub const fn match_star(symbol: u8, pattern: &[u8], text: &[u8]) -> bool {
    let mut text = text;
    loop {
        if match_here(pattern, text) {
            return true;
        }
        match text {
            // look-ahead is text[1], not text[0]
            [_, rest @ ..] if !rest.is_empty() && (rest[0] == symbol || symbol == ANY) => {
                text = rest;
            }
            _ => return false,
        }
    }
}
