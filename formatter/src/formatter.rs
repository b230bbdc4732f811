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
use crate::utility::{escape_trailing_backslash, unescape_tag_body};
use crate::wrap::wrap_span;
use crate::{FormatterConfig, MarkupEvent, MarkupParser, OutputStyle, StyleResult, StyleStack};
use bytes::BufMut;
use std::collections::HashMap;
use tracing::{instrument, trace};

/// Renders marked-up text into styled, wrapped terminal output.
///
/// A `Formatter` holds the output configuration and a registry of named
/// styles. Formatting borrows it immutably; the style stack and column counter
/// of a call live only for that call, so one formatter can serve many threads.
///
/// # Markup
///
/// - `<fg=red;bg=blue;options=bold,underscore;href=https://...>` opens a style
/// - `<name>` opens a registered named style
/// - `</>` or `</anything>` closes the innermost style
/// - `\<` prints a literal `<`
/// - A tag that does not decode is printed as written
///
/// # Examples
///
/// ```rust
/// use styledconsole_formatter::{Formatter, FormatterConfig};
///
/// let formatter = Formatter::with_default_styles(FormatterConfig::enabled().with_width(20));
/// assert_eq!(formatter.format("<info>done</info>"), "\x1b[32mdone\x1b[39m");
/// assert_eq!(formatter.format("<fg=blue>testtest"), "\x1b[34mtesttest\x1b[39m");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    config: FormatterConfig,
    styles: HashMap<String, OutputStyle>,
}

impl Formatter {
    /// Creates a formatter with no named styles.
    pub fn new(config: FormatterConfig) -> Self {
        Self {
            config,
            styles: HashMap::new(),
        }
    }

    /// Creates a formatter with the `error`, `info`, `comment` and `question`
    /// named styles registered.
    pub fn with_default_styles(config: FormatterConfig) -> Self {
        let mut formatter = Self::new(config);
        formatter.set_style(
            "error",
            OutputStyle::default()
                .with_foreground("white")
                .with_background("red"),
        );
        formatter.set_style("info", OutputStyle::default().with_foreground("green"));
        formatter.set_style("comment", OutputStyle::default().with_foreground("yellow"));
        formatter.set_style(
            "question",
            OutputStyle::default()
                .with_foreground("black")
                .with_background("cyan"),
        );
        formatter
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Register a named style. Names are case-insensitive.
    pub fn set_style(&mut self, name: impl AsRef<str>, style: OutputStyle) {
        self.styles.insert(name.as_ref().to_ascii_lowercase(), style);
    }

    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(&name.to_ascii_lowercase())
    }

    pub fn style(&self, name: &str) -> Option<&OutputStyle> {
        self.styles.get(&name.to_ascii_lowercase())
    }

    /// Format `text`, starting at column `0`.
    pub fn format(&self, text: &str) -> String {
        let mut column = 0;
        self.format_with_column(text, &mut column)
    }

    /// Format `text`, continuing a line that already holds `column` characters.
    ///
    /// `column` is updated to the position after the output, so feeding the
    /// same counter to successive calls keeps wrapping continuous.
    #[instrument(skip_all, level = "trace", fields(width = self.config.width, column = *column))]
    pub fn format_with_column(&self, text: &str, column: &mut isize) -> String {
        let escaped = escape_trailing_backslash(text);
        let mut span = Span {
            stack: StyleStack::new(),
            pending: String::new(),
            line_filled: false,
        };
        let mut output = String::with_capacity(text.len());

        for event in MarkupParser::new(&escaped) {
            match event {
                MarkupEvent::Text(text) => span.pending.push_str(text),
                MarkupEvent::Open { raw, body } => match self.resolve(body) {
                    Ok(style) => {
                        self.flush(&mut output, &mut span, column);
                        span.stack.push(style);
                    }
                    Err(error) => {
                        trace!(tag = raw, %error, "printing undecodable tag as text");
                        span.pending.push_str(raw);
                    }
                },
                MarkupEvent::Close { .. } => {
                    self.flush(&mut output, &mut span, column);
                    span.stack.pop_current();
                }
            }
        }
        self.flush(&mut output, &mut span, column);

        if output.contains(BACKSLASH_SENTINEL) {
            output = output.replace(BACKSLASH_SENTINEL, "\\");
        }
        output
    }

    /// Format `text` into a byte buffer, returning the number of bytes written.
    pub fn format_to<B: BufMut>(&self, text: &str, dst: &mut B) -> usize {
        let output = self.format(text);
        dst.put_slice(output.as_bytes());
        output.len()
    }

    /// Named style first, attribute string second.
    fn resolve(&self, body: &str) -> StyleResult<OutputStyle> {
        let body = unescape_tag_body(body);
        match self.style(&body) {
            Some(style) => Ok(style.clone()),
            None => OutputStyle::decode(&body),
        }
    }

    /// Wrap the accumulated literal text under the current style.
    fn flush(&self, output: &mut String, span: &mut Span, column: &mut isize) {
        if span.pending.is_empty() {
            return;
        }
        output.push_str(&wrap_span(
            &span.pending,
            self.config.width,
            column,
            &mut span.line_filled,
            &span.stack.current(),
            self.config.color_mode,
        ));
        span.pending.clear();
    }
}

/// Per-call scan state.
struct Span {
    stack: StyleStack,
    /// Literal text not yet wrapped.
    pending: String,
    /// The previous flush ended on an automatic line break.
    line_filled: bool,
}

/// Format marked-up `text` wrapped at `width` columns, with colors rendered as
/// written and no named styles.
///
/// ```rust
/// use styledconsole_formatter::format_text;
///
/// assert_eq!(format_text("<fg=red>awesome text</>", 20), "\x1b[31mawesome text\x1b[39m");
/// assert_eq!(format_text("<toto=titi>qsdf</fg=blue>", 20), "<toto=titi>qsdf");
/// ```
pub fn format_text(text: &str, width: usize) -> String {
    Formatter::new(FormatterConfig::enabled().with_width(width)).format(text)
}
