use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Longest piece of a line handed to the evaluator at once: a 128-byte
/// buffer, less its terminator.
pub(crate) const MAX_LINE_LEN: usize = 127;

/// Reads stdin-style input line by line, but yields long lines in pieces of
/// at most `max_len` bytes. A line's newline stays on its last piece.
/// Invalid UTF-8 is replaced rather than reported, so one bad line can't end
/// the input.
pub(crate) struct Fragments<R> {
    reader: R,
    max_len: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead> Fragments<R> {
    pub(crate) fn new(reader: R, max_len: usize) -> Fragments<R> {
        Fragments {
            reader,
            max_len,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for Fragments<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<io::Result<String>> {
        if self.pending.is_empty() {
            let mut bytes = vec![];
            match self.reader.read_until(b'\n', &mut bytes) {
                Ok(0) => return None,
                Ok(_) => {
                    // Bytes that aren't UTF-8 become U+FFFD, which the lexer rejects.
                    let line = String::from_utf8_lossy(&bytes);
                    self.pending.extend(split_fragments(&line, self.max_len));
                }
                Err(e) => return Some(Err(e)),
            }
        }
        self.pending.pop_front().map(Ok)
    }
}

/// Cuts `line` into pieces of at most `max_len` bytes without splitting a
/// character. A character wider than `max_len` gets a piece of its own.
fn split_fragments(line: &str, max_len: usize) -> Vec<String> {
    let mut pieces = vec![];
    let mut rest = line;
    while !rest.is_empty() {
        let mut end = max_len.min(rest.len());
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let (head, tail) = rest.split_at(end);
        pieces.push(head.to_owned());
        rest = tail;
    }
    pieces
}
