//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::consts::BACKSLASH_SENTINEL;
use std::borrow::Cow;

/// Replaces every backslash of a trailing run of backslashes with a sentinel.
///
/// The markup scanner treats `\` as an escape for the character that follows
/// it. A backslash at the very end of the input escapes nothing, so the run is
/// swapped for [`BACKSLASH_SENTINEL`] before scanning and restored afterwards.
/// Text that does not end with a backslash is returned borrowed.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use styledconsole_formatter::escape_trailing_backslash;
///
/// assert!(matches!(escape_trailing_backslash("noop"), Cow::Borrowed(_)));
/// assert_eq!(escape_trailing_backslash("super super\\\\"), "super super\0\0");
/// ```
pub fn escape_trailing_backslash(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim_end_matches('\\');
    if trimmed.len() == text.len() {
        return Cow::Borrowed(text);
    }

    let count = text.len() - trimmed.len();
    let mut escaped = String::with_capacity(text.len());
    escaped.push_str(trimmed);
    escaped.extend(std::iter::repeat_n(BACKSLASH_SENTINEL, count));
    Cow::Owned(escaped)
}

/// Escapes markup so that `text` is printed literally by the formatter.
///
/// Every `<` not already preceded by a backslash is prefixed with one, then
/// trailing backslashes are guarded with [`escape_trailing_backslash`].
///
/// ```
/// # use styledconsole_formatter::{escape_markup, format_text};
///
/// let escaped = escape_markup("<fg=red>not red</>");
/// assert_eq!(escaped, "\\<fg=red>not red\\</>");
/// assert_eq!(format_text(&escaped, 0), "<fg=red>not red</>");
/// ```
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut previous = None;
    for ch in text.chars() {
        if ch == '<' && previous != Some('\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
        previous = Some(ch);
    }
    escape_trailing_backslash(&escaped).into_owned()
}

/// Removes the `\` escapes from a tag body, keeping each escaped character.
///
/// A lone backslash at the end of the body is kept.
pub(crate) fn unescape_tag_body(body: &str) -> Cow<'_, str> {
    if !body.contains('\\') {
        return Cow::Borrowed(body);
    }

    let mut unescaped = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            unescaped.push(chars.next().unwrap_or('\\'));
        } else {
            unescaped.push(ch);
        }
    }
    Cow::Owned(unescaped)
}

/// Extracts the byte range `start..end` of `text` without ever failing.
///
/// Both indices are clamped into `0..=text.len()` and moved down to the
/// nearest character boundary. A reversed range is clipped rather than
/// swapped: its start is pulled back to its end, yielding an empty string.
///
/// ```
/// # use styledconsole_formatter::get_substring;
///
/// assert_eq!(get_substring("zaaaz", 1, 4), "aaa");
/// assert_eq!(get_substring("zaaaz", 1, 50), "aaaz");
/// assert_eq!(get_substring("zaaaz", 50, 51), "");
/// ```
pub fn get_substring(text: &str, start: isize, end: isize) -> &str {
    let len = text.len() as isize;
    let mut start = start.clamp(0, len) as usize;
    let mut end = end.clamp(0, len) as usize;
    if start >= end {
        return "";
    }
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[start..end]
}
