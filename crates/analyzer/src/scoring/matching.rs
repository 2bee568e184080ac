//! Hand-rolled text scanners backing the scoring rules.
//!
//! This is deliberately crude pattern work, not linguistic analysis. The
//! behavior of each scanner is part of the rubric contract, down to its
//! quirks, so keep the semantics exact rather than improving them.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word occurrence check: a match may not be flanked by a word
/// character on either side. "javascripting" therefore never matches
/// "javascript", while "c++" is fine because '+' is not a word character.
pub(crate) fn contains_word(haystack: &str, needle: &str) -> bool {
    debug_assert!(!needle.is_empty());
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let begin = from + pos;
        let end = begin + needle.len();
        let left_ok = haystack[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let right_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        if left_ok && right_ok {
            return true;
        }
        from = begin + needle.chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// Stem-at-word-start check: the occurrence must begin at a word boundary
/// but may extend into a longer word, so "project" covers "projects" and
/// "skill" covers "skills".
pub(crate) fn contains_stem(haystack: &str, stem: &str) -> bool {
    debug_assert!(!stem.is_empty());
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(stem) {
        let begin = from + pos;
        let left_ok = haystack[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        if left_ok {
            return true;
        }
        from = begin + stem.chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// Counts date-like tokens: a 4-digit year, or an `m/yyyy` / `mm/yyyy`
/// form. Tokens are consumed left to right; repeated years count every
/// occurrence.
pub(crate) fn count_date_tokens(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        if i + 4 <= bytes.len() && bytes[i..i + 4].iter().all(u8::is_ascii_digit) {
            count += 1;
            i += 4;
            continue;
        }
        // Try the two-digit month first, then fall back to one digit.
        let mut matched = false;
        for month_len in [2usize, 1] {
            let slash = i + month_len;
            if slash < bytes.len()
                && bytes[i..slash].iter().all(u8::is_ascii_digit)
                && bytes[slash] == b'/'
                && slash + 5 <= bytes.len()
                && bytes[slash + 1..slash + 5].iter().all(u8::is_ascii_digit)
            {
                count += 1;
                i = slash + 5;
                matched = true;
                break;
            }
        }
        if !matched {
            i += 1;
        }
    }
    count
}

const OUTCOME_NOUNS: &[&str] = &[
    "users",
    "clients",
    "requests",
    "revenue",
    "performance",
    "improvement",
    "increase",
    "decrease",
    "growth",
];

/// True when the lowered text contains a quantified-achievement marker: a
/// digit run followed by `%`, by `k`, or by an optional `+`, optional
/// whitespace, and one of the outcome nouns.
pub(crate) fn has_quantified_achievement(lower: &str) -> bool {
    let bytes = lower.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j < bytes.len() && (bytes[j] == b'%' || bytes[j] == b'k') {
            return true;
        }
        let mut k = j;
        if k < bytes.len() && bytes[k] == b'+' {
            k += 1;
        }
        while k < bytes.len() && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        if OUTCOME_NOUNS
            .iter()
            .any(|noun| bytes[k..].starts_with(noun.as_bytes()))
        {
            return true;
        }
        i = j;
    }
    false
}

/// Counts the proxy-error patterns behind the grammar rule, on the lowered
/// text: a standalone "i" followed by whitespace, a lowercase letter after
/// a period (every sentence boundary trips this once the text is lowered;
/// the crudeness is contractual), and maximal whitespace runs of length
/// two or more.
pub(crate) fn count_grammar_flags(lower: &str) -> usize {
    let chars: Vec<char> = lower.chars().collect();
    let mut flags = 0;

    for idx in 0..chars.len() {
        if chars[idx] == 'i'
            && (idx == 0 || !is_word_char(chars[idx - 1]))
            && chars.get(idx + 1).is_some_and(|c| c.is_whitespace())
        {
            flags += 1;
        }
    }

    for idx in 0..chars.len() {
        if chars[idx] == '.' {
            let mut j = idx + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && chars[j].is_ascii_lowercase() {
                flags += 1;
            }
        }
    }

    let mut run = 0;
    for &c in &chars {
        if c.is_whitespace() {
            run += 1;
        } else {
            if run >= 2 {
                flags += 1;
            }
            run = 0;
        }
    }
    if run >= 2 {
        flags += 1;
    }

    flags
}
