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

use crate::consts::ESC;
use std::borrow::Cow;

/// Removes the escape sequences the formatter emits from a string.
///
/// Strips Control Sequence Introducer (CSI) sequences such as the SGR color
/// codes, and Operating System Command (OSC) sequences such as the OSC 8
/// hyperlink wrapper. OSC sequences end with either BEL or the String
/// Terminator (`ESC \`).
///
/// Returns the input borrowed when it contains no escape character.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use styledconsole_formatter::strip_ansi_codes;
///
/// let colored = "\x1b[31;42mRed on green\x1b[39;49m";
/// assert_eq!(strip_ansi_codes(colored), "Red on green");
///
/// let link = "\x1b]8;;https://example.com\x1b\\site\x1b]8;;\x1b\\";
/// assert_eq!(strip_ansi_codes(link), "site");
///
/// let plain = "Plain Text";
/// assert!(matches!(strip_ansi_codes(plain), Cow::Borrowed(_)));
/// ```
pub fn strip_ansi_codes(str: &str) -> Cow<'_, str> {
    if !str.contains(ESC) {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len());
    let mut chars = str.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ESC {
            result.push(ch);
            continue;
        }
        match chars.peek() {
            Some('[') => {
                chars.next();
                // Parameters run until the final byte (0x40-0x7E)
                for ch in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&ch) {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                while let Some(ch) = chars.next() {
                    if ch == '\x07' {
                        break;
                    }
                    if ch == ESC && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            // Lone escape
            _ => {}
        }
    }

    Cow::Owned(result)
}

/// Number of characters a string occupies once escape sequences are removed.
///
/// ```
/// # use styledconsole_formatter::visible_width;
/// assert_eq!(visible_width("\x1b[1mbold\x1b[22m"), 4);
/// ```
pub fn visible_width(str: &str) -> usize {
    strip_ansi_codes(str).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_sgr() {
        assert_eq!(
            strip_ansi_codes("\x1b[1mBold\x1b[22m and \x1b[4mUnderlined\x1b[24m"),
            "Bold and Underlined"
        );
    }

    #[test]
    fn test_strip_osc_bel_terminated() {
        assert_eq!(strip_ansi_codes("\x1b]0;title\x07text"), "text");
    }

    #[test]
    fn test_strip_lone_escape() {
        assert_eq!(strip_ansi_codes("a\x1bb"), "ab");
    }

    #[test]
    fn test_strip_unterminated() {
        assert_eq!(strip_ansi_codes("text\x1b[31"), "text");
        assert_eq!(strip_ansi_codes("text\x1b]8;;http"), "text");
    }

    #[test]
    fn test_visible_width() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("héllo"), 5);
        assert_eq!(visible_width("\x1b[31;42mab\x1b[39;49m\n"), 3);
    }
}
