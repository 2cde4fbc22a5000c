//! Small text helpers shared by every message.

/// Cap for the literal dump in a received-type description.
pub const TYPE_DUMP_MAX_LEN: usize = 25;

/// Cap for the value dump in invalid-value messages.
pub const VALUE_DUMP_MAX_LEN: usize = 128;

const ELLIPSIS: char = '…';

/// Wrap `text` in curved single quotes: `‘text’`.
pub fn curly_quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 6);
    out.push('‘');
    out.push_str(text);
    out.push('’');
    out
}

/// Keep the first `cap` characters of `text`, marking a cut with `…`.
///
/// Counts Unicode scalar values, so the cut never splits a character.
pub fn ellipsify(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len_utf8());
            out.push_str(&text[..cut]);
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

/// Join items as an English list: `a`, `a <conj> b`, `a, b, <conj> c`.
pub(crate) fn join_list<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {conjunction} {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::<str>::as_ref).collect();
            format!("{}, {conjunction} {}", head.join(", "), last.as_ref())
        }
    }
}
