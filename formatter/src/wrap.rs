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

use crate::{ColorMode, OutputStyle};

/// Wrap a literal run of text at `width` columns under `style`.
///
/// `column` is the position on the line being built when the run starts and is
/// updated to the position after it, so consecutive runs flow onto the same
/// line. Renders colors as written; see [`wrap_line_with_mode`] to downsample.
///
/// - A `\n` in `text` ends the line. If the style renders escape codes, the
///   line is padded with spaces up to `width` first so a background color
///   fills it.
/// - The line breaks right after the character that brings `column` to
///   `width`. A `\n` that immediately follows such a break ends the same
///   line and is absorbed.
/// - A `column` already at or past `width` breaks before the first character.
///   A negative `column` counts as `0`.
/// - Every physical line is wrapped in the style's open and close codes.
/// - Empty `text` yields an empty string and leaves `column` untouched.
/// - A `width` of `0` disables wrapping and padding.
///
/// # Examples
///
/// ```
/// use styledconsole_formatter::{wrap_line, OutputStyle};
///
/// let style = OutputStyle::default().with_foreground("red");
/// let mut column = 0;
/// let output = wrap_line("abcdef", 4, &mut column, &style);
/// assert_eq!(output, "\x1b[31mabcd\x1b[39m\n\x1b[31mef\x1b[39m");
/// assert_eq!(column, 2);
/// ```
pub fn wrap_line(text: &str, width: usize, column: &mut isize, style: &OutputStyle) -> String {
    wrap_line_with_mode(text, width, column, style, ColorMode::default())
}

/// [`wrap_line`], rendering `style` for `color_mode`.
pub fn wrap_line_with_mode(
    text: &str,
    width: usize,
    column: &mut isize,
    style: &OutputStyle,
    color_mode: ColorMode,
) -> String {
    let mut line_filled = false;
    wrap_span(text, width, column, &mut line_filled, style, color_mode)
}

/// Wrap one span of a larger output.
///
/// `line_filled` is set while the last thing written was an automatic break,
/// so a `\n` starting the next span of the same output is absorbed too.
pub(crate) fn wrap_span(
    text: &str,
    width: usize,
    column: &mut isize,
    line_filled: &mut bool,
    style: &OutputStyle,
    color_mode: ColorMode,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let (open, close) = style.render(color_mode);
    let mut writer = LineWriter {
        output: String::with_capacity(text.len()),
        line: String::new(),
        styled: !open.is_empty() || !close.is_empty(),
        open,
        close,
        width,
        column: (*column).max(0) as usize,
        line_filled: *line_filled,
    };

    if width > 0 && *column >= width as isize {
        writer.output.push('\n');
        writer.column = 0;
        writer.line_filled = true;
    }

    for ch in text.chars() {
        if ch == '\n' {
            if writer.line_filled {
                writer.line_filled = false;
            } else {
                writer.break_line(true);
            }
            continue;
        }
        writer.line.push(ch);
        writer.column += 1;
        writer.line_filled = false;
        if width > 0 && writer.column >= width {
            writer.break_line(false);
            writer.line_filled = true;
        }
    }

    writer.flush_line();
    *column = writer.column as isize;
    *line_filled = writer.line_filled;
    writer.output
}

/// Accumulates one physical line at a time.
struct LineWriter {
    output: String,
    line: String,
    styled: bool,
    open: String,
    close: String,
    width: usize,
    column: usize,
    /// Last write was an automatic break.
    line_filled: bool,
}

impl LineWriter {
    /// Close the current line and start a new one.
    fn break_line(&mut self, pad: bool) {
        if pad && self.styled && self.column < self.width {
            let padding = self.width - self.column;
            self.line.extend(std::iter::repeat_n(' ', padding));
        }
        self.flush_line();
        self.output.push('\n');
        self.column = 0;
    }

    fn flush_line(&mut self) {
        if self.line.is_empty() {
            return;
        }
        if self.styled {
            self.output.push_str(&self.open);
            self.output.push_str(&self.line);
            self.output.push_str(&self.close);
        } else {
            self.output.push_str(&self.line);
        }
        self.line.clear();
    }
}
