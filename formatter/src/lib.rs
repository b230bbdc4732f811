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

//! Styled, width-aware text formatting for terminals.
//!
//! Text marked up with inline style tags is rendered into ANSI escape
//! sequences while being wrapped at a fixed column width. The active style is
//! re-emitted on every wrapped line.
//!
//! ```
//! use styledconsole_formatter::format_text;
//!
//! let output = format_text("done: <fg=green;options=bold>ok</>", 80);
//! assert_eq!(output, "done: \x1b[32;1mok\x1b[39;22m");
//! ```

mod config;
mod consts;
mod formatter;
mod parser;
mod result;
mod stack;
mod style;
pub mod utility;
mod wrap;

pub use self::config::{ColorMode, FormatterConfig};
pub use self::consts::{BACKSLASH_SENTINEL, DEFAULT_WIDTH};
pub use self::formatter::{Formatter, format_text};
pub use self::parser::{MarkupEvent, MarkupParser};
pub use self::result::{StyleError, StyleResult};
pub use self::stack::StyleStack;
pub use self::style::{Color, OutputStyle, StyleOption, decode_style};
pub use self::utility::{
    escape_markup, escape_trailing_backslash, get_substring, strip_ansi_codes, visible_width,
};
pub use self::wrap::{wrap_line, wrap_line_with_mode};
