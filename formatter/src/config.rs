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

use crate::consts::DEFAULT_WIDTH;

/// Formatter configuration.
///
/// Terminal capability detection is left to the caller: pick the preset that
/// matches what the output device supports and the column width to wrap at.
///
/// ```
/// use styledconsole_formatter::{ColorMode, FormatterConfig};
///
/// let config = FormatterConfig::basic_color_only().with_width(40);
/// assert_eq!(config.width, 40);
/// assert_eq!(config.color_mode, ColorMode::Basic);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormatterConfig {
    /// Column width to wrap at. `0` disables wrapping and line padding.
    pub width: usize,
    /// SGR Color Mode Sequence Conversion Settings
    pub color_mode: ColorMode,
}

impl FormatterConfig {
    /// Strip all styling, emitting plain wrapped text.
    pub fn plain() -> FormatterConfig {
        FormatterConfig {
            width: DEFAULT_WIDTH,
            color_mode: ColorMode::None,
        }
    }
    /// Downsample every color to the 16 color palette
    pub fn basic_color_only() -> FormatterConfig {
        FormatterConfig {
            width: DEFAULT_WIDTH,
            color_mode: ColorMode::Basic,
        }
    }
    /// Downsample true colors to the 256 color palette
    pub fn fixed_color_only() -> FormatterConfig {
        FormatterConfig {
            width: DEFAULT_WIDTH,
            color_mode: ColorMode::FixedColor,
        }
    }
    /// Emit colors as written
    pub fn true_color_only() -> FormatterConfig {
        FormatterConfig {
            width: DEFAULT_WIDTH,
            color_mode: ColorMode::TrueColor,
        }
    }
    /// Enable all styling
    pub fn enabled() -> FormatterConfig {
        Self::true_color_only()
    }

    /// Replace the wrap width.
    pub fn with_width(mut self, width: usize) -> FormatterConfig {
        self.width = width;
        self
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

/// Represents the color capabilities of a terminal.
///
/// `ColorMode` defines which level of ANSI escape sequence support is used when
/// rendering a style. Colors written with more depth than the mode allows are
/// downsampled to the nearest palette entry rather than dropped.
///
/// - **None**: No escape codes are generated, resulting in plain text output
/// - **Basic**: 4-bit color supporting 16 colors (8 basic + 8 bright variants)
/// - **FixedColor**: 8-bit color supporting 256 colors
/// - **TrueColor**: 24-bit RGB color
///
/// ```
/// use styledconsole_formatter::{ColorMode, OutputStyle};
///
/// let style = OutputStyle::default().with_foreground("#ff0000");
/// assert_eq!(style.render(ColorMode::TrueColor).0, "\x1b[38;2;255;0;0m");
/// assert_eq!(style.render(ColorMode::FixedColor).0, "\x1b[38;5;196m");
/// assert_eq!(style.render(ColorMode::Basic).0, "\x1b[91m");
/// assert_eq!(style.render(ColorMode::None).0, "");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// No escape codes are generated.
    ///
    /// Use this mode when writing to files or pipes, or when the `NO_COLOR`
    /// convention asks for plain output.
    None,
    /// 4-bit color mode supporting 16 colors.
    Basic,
    /// 8-bit color mode supporting 256 colors.
    FixedColor,
    /// 24-bit true color mode.
    #[default]
    TrueColor,
}

impl ColorMode {
    /// Returns `true` if this color mode emits escape codes at all.
    ///
    /// ```
    /// use styledconsole_formatter::ColorMode;
    ///
    /// assert!(!ColorMode::None.is_ansi());
    /// assert!(ColorMode::Basic.is_ansi());
    /// assert!(ColorMode::FixedColor.is_ansi());
    /// assert!(ColorMode::TrueColor.is_ansi());
    /// ```
    pub fn is_ansi(&self) -> bool {
        match self {
            ColorMode::None => false,
            ColorMode::Basic | ColorMode::FixedColor | ColorMode::TrueColor => true,
        }
    }
}
