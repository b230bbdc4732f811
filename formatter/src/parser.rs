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

use crate::utility::get_substring;

/// A piece of marked-up text, as produced by [`MarkupParser`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupEvent<'a> {
    /// Literal text, to be printed under the current style.
    Text(&'a str),
    /// An opening tag such as `<fg=red>`.
    Open {
        /// The tag as written, angle brackets included
        raw: &'a str,
        /// The attribute string between the angle brackets
        body: &'a str,
    },
    /// A closing tag, `</>` or `</anything>`.
    Close {
        /// The tag as written, angle brackets included
        raw: &'a str,
        /// Whatever follows `</`; never used for matching
        body: &'a str,
    },
}

/// Splits marked-up text into [`MarkupEvent`]s.
///
/// The parser only recognizes tag *shapes*; it does not decode attribute
/// strings or track nesting.
///
/// - An opening tag is `<` followed by an ASCII letter, then any characters
///   other than `<` and `>`, then `>`.
/// - A closing tag is `</`, then any characters other than `<` and `>`, then `>`.
/// - Inside a tag, `\` escapes the next character.
/// - Outside a tag, `\<` is an escaped `<`: it yields a literal `<` and never
///   starts a tag.
/// - Anything else, including a `<` that never becomes a tag, is text.
///
/// ```
/// use styledconsole_formatter::{MarkupEvent, MarkupParser};
///
/// let events: Vec<_> = MarkupParser::new("a <fg=red>b</> c").collect();
/// assert_eq!(
///     events,
///     vec![
///         MarkupEvent::Text("a "),
///         MarkupEvent::Open { raw: "<fg=red>", body: "fg=red" },
///         MarkupEvent::Text("b"),
///         MarkupEvent::Close { raw: "</>", body: "" },
///         MarkupEvent::Text(" c"),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct MarkupParser<'a> {
    /// The full input being scanned.
    input: &'a str,
    /// Byte offset of the next unscanned character.
    position: usize,
}

impl<'a> MarkupParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Advance past `len` bytes of `rest`, returning them.
    fn take(&mut self, rest: &'a str, len: usize) -> &'a str {
        self.position += len;
        get_substring(rest, 0, len as isize)
    }

    /// Length of the tag at the start of `text`, if there is one.
    fn tag_length(text: &str) -> Option<usize> {
        let bytes = text.as_bytes();
        let body_start = match *bytes.get(1)? {
            b'/' => 2,
            b if b.is_ascii_alphabetic() => 1,
            _ => return None,
        };

        let mut index = body_start;
        while index < bytes.len() {
            match bytes[index] {
                b'\\' => index += 2,
                b'<' => return None,
                b'>' => return Some(index + 1),
                _ => index += 1,
            }
        }
        None
    }
}

impl<'a> Iterator for MarkupParser<'a> {
    type Item = MarkupEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = get_substring(self.input, self.position as isize, self.input.len() as isize);
        if rest.is_empty() {
            return None;
        }

        let bytes = rest.as_bytes();
        for index in 0..bytes.len() {
            match bytes[index] {
                b'\\' if bytes.get(index + 1) == Some(&b'<') => {
                    if index > 0 {
                        return Some(MarkupEvent::Text(self.take(rest, index)));
                    }
                    // Drop the backslash, keep the bracket
                    self.position += 1;
                    let rest = get_substring(rest, 1, rest.len() as isize);
                    return Some(MarkupEvent::Text(self.take(rest, 1)));
                }
                b'<' => {
                    let Some(length) = Self::tag_length(&rest[index..]) else {
                        continue;
                    };
                    if index > 0 {
                        return Some(MarkupEvent::Text(self.take(rest, index)));
                    }
                    let raw = self.take(rest, length);
                    return Some(if raw.starts_with("</") {
                        MarkupEvent::Close {
                            raw,
                            body: get_substring(raw, 2, length as isize - 1),
                        }
                    } else {
                        MarkupEvent::Open {
                            raw,
                            body: get_substring(raw, 1, length as isize - 1),
                        }
                    });
                }
                _ => {}
            }
        }

        Some(MarkupEvent::Text(self.take(rest, rest.len())))
    }
}
