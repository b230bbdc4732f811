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

use crate::consts::{CSI, OPTION_SEPARATOR, OSC8_PREFIX, PAIR_SEPARATOR, ST};
use crate::{ColorMode, StyleError, StyleResult};
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::trace;

/// The attributes of one style span: colors, hyperlink target and text options.
///
/// `OutputStyle` is the decoded form of a markup tag such as
/// `<fg=red;bg=green;options=bold>`. Color values are kept as the tokens they
/// were written with and are only resolved when the style is rendered, so an
/// unknown color is accepted here and simply produces no escape code later.
///
/// # Examples
///
/// ```rust
/// use styledconsole_formatter::{ColorMode, OutputStyle};
///
/// let style: OutputStyle = "fg=red;bg=green".parse().unwrap();
/// let (open, close) = style.render(ColorMode::TrueColor);
/// assert_eq!(open, "\x1b[31;42m");
/// assert_eq!(close, "\x1b[39;49m");
/// ```
///
/// # Escape Codes
///
/// Rendering produces an open/close pair. The open code sets every attribute,
/// the close code reverts each one individually instead of issuing a full
/// reset, so an enclosing span is not disturbed:
///
/// - Foreground: `30-37`, `90-97`, `38;5;<n>`, `38;2;<r>;<g>;<b>`, reverted by `39`
/// - Background: `40-47`, `100-107`, `48;5;<n>`, `48;2;<r>;<g>;<b>`, reverted by `49`
/// - Options: see [`StyleOption`]
/// - Hyperlink: `ESC ] 8 ; ; <href> ESC \`, reverted by `ESC ] 8 ; ; ESC \`
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OutputStyle {
    /// Foreground color token, e.g. `red`, `bright-blue`, `208` or `#ff8800`.
    pub foreground: Option<String>,
    /// Background color token.
    pub background: Option<String>,
    /// Hyperlink target.
    pub href: Option<String>,
    /// Text options. Ordered, so rendering is deterministic.
    pub options: BTreeSet<StyleOption>,
}

impl OutputStyle {
    /// Decode a `;`-separated list of `key=value` pairs.
    ///
    /// Recognized keys are `fg`, `bg`, `href` and `options` (a `,`-separated
    /// list of [`StyleOption`] tokens). Unknown option tokens are dropped. Any
    /// other key invalidates the whole string.
    ///
    /// ```rust
    /// use styledconsole_formatter::{OutputStyle, StyleError};
    ///
    /// let style = OutputStyle::decode("fg=red;options=bold,sparkly").unwrap();
    /// assert_eq!(style.foreground.as_deref(), Some("red"));
    /// assert_eq!(style.options.len(), 1);
    ///
    /// assert!(matches!(
    ///     OutputStyle::decode("toto=titi;fg=red"),
    ///     Err(StyleError::UnknownKey { .. })
    /// ));
    /// ```
    pub fn decode(attributes: &str) -> StyleResult<OutputStyle> {
        let mut style = OutputStyle::default();

        for pair in attributes.split(PAIR_SEPARATOR) {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }

            let Some((key, value)) = pair.split_once('=') else {
                return Err(StyleError::MissingValue {
                    pair: pair.to_string(),
                });
            };
            let key = key.trim();
            let value = value.trim();
            let value = (!value.is_empty()).then(|| value.to_string());

            match key.to_ascii_lowercase().as_str() {
                "fg" => style.foreground = value,
                "bg" => style.background = value,
                "href" => style.href = value,
                "options" => {
                    for token in value.iter().flat_map(|v| v.split(OPTION_SEPARATOR)) {
                        match StyleOption::from_token(token) {
                            Some(option) => {
                                style.options.insert(option);
                            }
                            None => trace!(token, "dropping unknown style option"),
                        }
                    }
                }
                _ => {
                    return Err(StyleError::UnknownKey {
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(style)
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none()
            && self.background.is_none()
            && self.href.is_none()
            && self.options.is_empty()
    }

    /// Set the foreground color token.
    pub fn with_foreground(mut self, color: impl Into<String>) -> Self {
        self.foreground = Some(color.into());
        self
    }

    /// Set the background color token.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Set the hyperlink target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Add a text option.
    pub fn with_option(mut self, option: StyleOption) -> Self {
        self.options.insert(option);
        self
    }

    /// Overlay `other` on top of this style.
    ///
    /// Each attribute set in `other` replaces the one in `self`; options are
    /// unioned.
    pub fn merge(&self, other: &OutputStyle) -> OutputStyle {
        OutputStyle {
            foreground: other.foreground.clone().or_else(|| self.foreground.clone()),
            background: other.background.clone().or_else(|| self.background.clone()),
            href: other.href.clone().or_else(|| self.href.clone()),
            options: self.options.union(&other.options).copied().collect(),
        }
    }

    /// Render the open and close escape codes for this style.
    ///
    /// Both codes are empty when the style is empty, when every color token is
    /// unknown and no option or hyperlink is set, or when `color_mode` is
    /// [`ColorMode::None`].
    pub fn render(&self, color_mode: ColorMode) -> (String, String) {
        if !color_mode.is_ansi() {
            return (String::new(), String::new());
        }

        let mut set_codes = Vec::new();
        let mut unset_codes = Vec::new();

        if let Some(color) = self.foreground.as_deref().and_then(Color::from_token) {
            set_codes.push(color.downsample(color_mode).foreground_code());
            unset_codes.push("39".to_string());
        }

        if let Some(color) = self.background.as_deref().and_then(Color::from_token) {
            set_codes.push(color.downsample(color_mode).background_code());
            unset_codes.push("49".to_string());
        }

        for option in &self.options {
            set_codes.push(option.set_code().to_string());
            // Bold and dim share their reset
            let unset = option.unset_code().to_string();
            if !unset_codes.contains(&unset) {
                unset_codes.push(unset);
            }
        }

        let mut open = String::new();
        let mut close = String::new();

        if !set_codes.is_empty() {
            open = format!("{}{}m", CSI, set_codes.join(";"));
            close = format!("{}{}m", CSI, unset_codes.join(";"));
        }

        if let Some(href) = &self.href {
            open.push_str(OSC8_PREFIX);
            open.push_str(href);
            open.push_str(ST);
            close.insert_str(0, &format!("{}{}", OSC8_PREFIX, ST));
        }

        (open, close)
    }

    /// Wrap `text` in this style's escape codes.
    ///
    /// Empty text stays empty, no codes are emitted around nothing.
    pub fn apply(&self, text: &str, color_mode: ColorMode) -> String {
        if text.is_empty() {
            return String::new();
        }
        let (open, close) = self.render(color_mode);
        format!("{}{}{}", open, text, close)
    }
}

impl FromStr for OutputStyle {
    type Err = StyleError;

    fn from_str(attributes: &str) -> StyleResult<Self> {
        OutputStyle::decode(attributes)
    }
}

/// Encodes the style back into its attribute string form.
///
/// The output decodes to an equal style.
impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pairs = Vec::new();
        if let Some(fg) = &self.foreground {
            pairs.push(format!("fg={}", fg));
        }
        if let Some(bg) = &self.background {
            pairs.push(format!("bg={}", bg));
        }
        if let Some(href) = &self.href {
            pairs.push(format!("href={}", href));
        }
        if !self.options.is_empty() {
            let options: Vec<&str> = self.options.iter().map(StyleOption::as_str).collect();
            pairs.push(format!("options={}", options.join(",")));
        }
        write!(f, "{}", pairs.join(";"))
    }
}

/// Decode a style attribute string. See [`OutputStyle::decode`].
pub fn decode_style(attributes: &str) -> StyleResult<OutputStyle> {
    OutputStyle::decode(attributes)
}

/// A text option of the `options` attribute.
///
/// | Token                        | Set | Unset |
/// |------------------------------|-----|-------|
/// | `bold`                       | `1` | `22`  |
/// | `dim`                        | `2` | `22`  |
/// | `italic`                     | `3` | `23`  |
/// | `underscore` / `underline`   | `4` | `24`  |
/// | `blink`                      | `5` | `25`  |
/// | `reverse`                    | `7` | `27`  |
/// | `conceal`                    | `8` | `28`  |
/// | `strikethrough`              | `9` | `29`  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleOption {
    Bold,
    Dim,
    Italic,
    Underscore,
    Blink,
    Reverse,
    Conceal,
    Strikethrough,
}

impl StyleOption {
    /// Look up an option by token, ignoring case and surrounding whitespace.
    pub fn from_token(token: &str) -> Option<StyleOption> {
        match token.trim().to_ascii_lowercase().as_str() {
            "bold" => Some(StyleOption::Bold),
            "dim" => Some(StyleOption::Dim),
            "italic" => Some(StyleOption::Italic),
            "underscore" | "underline" => Some(StyleOption::Underscore),
            "blink" => Some(StyleOption::Blink),
            "reverse" => Some(StyleOption::Reverse),
            "conceal" => Some(StyleOption::Conceal),
            "strikethrough" => Some(StyleOption::Strikethrough),
            _ => None,
        }
    }

    /// Canonical token.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleOption::Bold => "bold",
            StyleOption::Dim => "dim",
            StyleOption::Italic => "italic",
            StyleOption::Underscore => "underscore",
            StyleOption::Blink => "blink",
            StyleOption::Reverse => "reverse",
            StyleOption::Conceal => "conceal",
            StyleOption::Strikethrough => "strikethrough",
        }
    }

    pub fn set_code(&self) -> u8 {
        match self {
            StyleOption::Bold => 1,
            StyleOption::Dim => 2,
            StyleOption::Italic => 3,
            StyleOption::Underscore => 4,
            StyleOption::Blink => 5,
            StyleOption::Reverse => 7,
            StyleOption::Conceal => 8,
            StyleOption::Strikethrough => 9,
        }
    }

    pub fn unset_code(&self) -> u8 {
        match self {
            StyleOption::Bold | StyleOption::Dim => 22,
            StyleOption::Italic => 23,
            StyleOption::Underscore => 24,
            StyleOption::Blink => 25,
            StyleOption::Reverse => 27,
            StyleOption::Conceal => 28,
            StyleOption::Strikethrough => 29,
        }
    }
}

/// A terminal color resolved from a color token.
///
/// | Token                                   | Color                  |
/// |-----------------------------------------|------------------------|
/// | `default`                               | Terminal default       |
/// | `black` .. `white`, `purple`            | Basic palette          |
/// | `gray`, `grey`, `bright-<name>`         | Bright palette         |
/// | `0` .. `255`                            | 256-color palette      |
/// | `#rgb`, `#rrggbb`                       | 24-bit RGB             |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Color {
    /// Terminal default color (FG `39`, BG `49`).
    Default,

    /// Black - Color #0 (FG `30`, BG `40`).
    Black,
    /// Red - Color #1 (FG `31`, BG `41`).
    Red,
    /// Green - Color #2 (FG `32`, BG `42`).
    Green,
    /// Yellow - Color #3 (FG `33`, BG `43`).
    Yellow,
    /// Blue - Color #4 (FG `34`, BG `44`).
    Blue,
    /// Magenta - Color #5 (FG `35`, BG `45`).
    Magenta,
    /// Cyan - Color #6 (FG `36`, BG `46`).
    Cyan,
    /// White - Color #7 (FG `37`, BG `47`).
    White,

    /// Black - Color #8 (FG `90`, BG `100`).
    BrightBlack,
    /// Red - Color #9 (FG `91`, BG `101`).
    BrightRed,
    /// Green - Color #10 (FG `92`, BG `102`).
    BrightGreen,
    /// Yellow - Color #11 (FG `93`, BG `103`).
    BrightYellow,
    /// Blue - Color #12 (FG `94`, BG `104`).
    BrightBlue,
    /// Magenta - Color #13 (FG `95`, BG `105`).
    BrightMagenta,
    /// Cyan - Color #14 (FG `96`, BG `106`).
    BrightCyan,
    /// White - Color #15 (FG `97`, BG `107`).
    BrightWhite,

    /// A color number from 0 to 255, for use in 256-color terminal environments.
    ///
    /// - Colours 0 to 15 are the basic and bright palettes.
    /// - Colours 16 to 231 are a six by six by six color cube.
    /// - Colours 232 to 255 are shades of gray from black to white.
    Fixed(u8),

    /// A 24-bit RGB color, as specified by ISO-8613-3.
    RGB(u8, u8, u8),
}

/// The sixteen palette colors in index order.
const PALETTE: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::BrightBlack,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

/// xterm default RGB values for [`PALETTE`].
const PALETTE_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

impl Color {
    /// Resolve a color token. Returns `None` for tokens that name no color.
    ///
    /// ```rust
    /// use styledconsole_formatter::Color;
    ///
    /// assert_eq!(Color::from_token("red"), Some(Color::Red));
    /// assert_eq!(Color::from_token("bright-blue"), Some(Color::BrightBlue));
    /// assert_eq!(Color::from_token("208"), Some(Color::Fixed(208)));
    /// assert_eq!(Color::from_token("#f80"), Some(Color::RGB(255, 136, 0)));
    /// assert_eq!(Color::from_token("wrong"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Color> {
        let token = token.trim().to_ascii_lowercase();

        if let Some(hex) = token.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Ok(index) = token.parse::<u8>() {
            return Some(Color::Fixed(index));
        }
        if let Some(name) = token.strip_prefix("bright-") {
            return match Self::from_name(name)? {
                Color::BrightBlack => None,
                color => color.index().map(|i| PALETTE[i as usize + 8]),
            };
        }
        match token.as_str() {
            "default" => Some(Color::Default),
            "gray" | "grey" => Some(Color::BrightBlack),
            name => Self::from_name(name),
        }
    }

    fn from_name(name: &str) -> Option<Color> {
        match name {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" | "purple" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "gray" | "grey" => Some(Color::BrightBlack),
            _ => None,
        }
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = hex
                    .chars()
                    .filter_map(|c| c.to_digit(16))
                    .map(|d| (d * 17) as u8);
                Some(Color::RGB(channels.next()?, channels.next()?, channels.next()?))
            }
            6 => Some(Color::RGB(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            _ => None,
        }
    }

    /// Palette index of a basic or bright color.
    fn index(&self) -> Option<u8> {
        PALETTE.iter().position(|c| c == self).map(|i| i as u8)
    }

    /// Converts this color to the nearest entry of the 16 color palette.
    ///
    /// Palette colors are returned unchanged, fixed colors 0-15 map onto the
    /// palette directly, everything else picks the palette entry with the
    /// smallest Euclidean distance in RGB space.
    pub fn to_basic(&self) -> Color {
        match self {
            Color::Fixed(n) if *n < 16 => PALETTE[*n as usize],
            Color::Fixed(_) | Color::RGB(..) => match self.to_truecolor() {
                Color::RGB(r, g, b) => Self::nearest_palette(r, g, b),
                other => other,
            },
            other => *other,
        }
    }

    /// Converts this color to the 256 color palette.
    ///
    /// RGB colors snap to the 6x6x6 color cube; palette colors keep their
    /// basic codes, which every 256-color terminal understands.
    pub fn to_fixed(&self) -> Color {
        match self {
            Color::RGB(r, g, b) => {
                let level = |v: u8| (v as u16 * 5 + 127) / 255;
                Color::Fixed((16 + 36 * level(*r) + 6 * level(*g) + level(*b)) as u8)
            }
            other => *other,
        }
    }

    /// Converts this color to 24-bit RGB.
    ///
    /// [`Color::Default`] has no RGB value and is returned unchanged.
    pub fn to_truecolor(&self) -> Color {
        match self {
            Color::Default => Color::Default,
            Color::RGB(r, g, b) => Color::RGB(*r, *g, *b),
            Color::Fixed(n) if *n < 16 => {
                let (r, g, b) = PALETTE_RGB[*n as usize];
                Color::RGB(r, g, b)
            }
            Color::Fixed(n) if *n < 232 => {
                // 216-color cube (16-231)
                let idx = *n as u16 - 16;
                let r = ((idx / 36) * 51) as u8;
                let g = (((idx % 36) / 6) * 51) as u8;
                let b = ((idx % 6) * 51) as u8;
                Color::RGB(r, g, b)
            }
            Color::Fixed(n) => {
                // Grayscale (232-255)
                let gray = ((*n as u16 - 232) * 10 + 8) as u8;
                Color::RGB(gray, gray, gray)
            }
            palette => match palette.index() {
                Some(i) => {
                    let (r, g, b) = PALETTE_RGB[i as usize];
                    Color::RGB(r, g, b)
                }
                None => *palette,
            },
        }
    }

    fn nearest_palette(r: u8, g: u8, b: u8) -> Color {
        let distance = |(pr, pg, pb): (u8, u8, u8)| {
            let dr = r as i32 - pr as i32;
            let dg = g as i32 - pg as i32;
            let db = b as i32 - pb as i32;
            dr * dr + dg * dg + db * db
        };
        PALETTE_RGB
            .iter()
            .enumerate()
            .min_by_key(|(_, rgb)| distance(**rgb))
            .map(|(i, _)| PALETTE[i])
            .unwrap_or(Color::Default)
    }

    /// Reduce this color to what `color_mode` can display.
    pub fn downsample(&self, color_mode: ColorMode) -> Color {
        match color_mode {
            ColorMode::None | ColorMode::TrueColor => *self,
            ColorMode::FixedColor => self.to_fixed(),
            ColorMode::Basic => self.to_basic(),
        }
    }

    /// SGR parameter selecting this color as foreground.
    pub fn foreground_code(&self) -> String {
        match self {
            Color::Default => "39".to_string(),
            Color::Fixed(n) => format!("38;5;{}", n),
            Color::RGB(r, g, b) => format!("38;2;{};{};{}", r, g, b),
            palette => match palette.index() {
                Some(i) if i < 8 => (30 + i).to_string(),
                Some(i) => (90 + i - 8).to_string(),
                None => "39".to_string(),
            },
        }
    }

    /// SGR parameter selecting this color as background.
    pub fn background_code(&self) -> String {
        match self {
            Color::Default => "49".to_string(),
            Color::Fixed(n) => format!("48;5;{}", n),
            Color::RGB(r, g, b) => format!("48;2;{};{};{}", r, g, b),
            palette => match palette.index() {
                Some(i) if i < 8 => (40 + i).to_string(),
                Some(i) => (100 + i - 8).to_string(),
                None => "49".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_on_green() -> OutputStyle {
        OutputStyle::default()
            .with_foreground("red")
            .with_background("green")
    }

    #[test]
    fn test_style_default() {
        let style = OutputStyle::default();
        assert_eq!(style.foreground, None);
        assert_eq!(style.background, None);
        assert_eq!(style.href, None);
        assert!(style.options.is_empty());
        assert!(style.is_empty());
    }

    #[test]
    fn test_decode_colors() {
        assert_eq!(OutputStyle::decode("bg=green;fg=red"), Ok(red_on_green()));
    }

    #[test]
    fn test_decode_options_and_href() {
        let style = OutputStyle::decode("bg=aie;fg=ieua;href=http://github.com;options=bold,italic")
            .unwrap();
        assert_eq!(style.foreground.as_deref(), Some("ieua"));
        assert_eq!(style.background.as_deref(), Some("aie"));
        assert_eq!(style.href.as_deref(), Some("http://github.com"));
        assert_eq!(
            style.options,
            BTreeSet::from([StyleOption::Bold, StyleOption::Italic])
        );
    }

    #[test]
    fn test_decode_href_keeps_equals_signs() {
        let style = OutputStyle::decode("href=https://example.com/?a=1").unwrap();
        assert_eq!(style.href.as_deref(), Some("https://example.com/?a=1"));
    }

    #[test]
    fn test_decode_unknown_key_is_invalid() {
        assert_eq!(
            OutputStyle::decode("toto=titi;fg=red"),
            Err(StyleError::UnknownKey {
                key: "toto".to_string()
            })
        );
        assert!(OutputStyle::decode("fg=red;toto=titi").is_err());
    }

    #[test]
    fn test_decode_missing_value() {
        assert_eq!(
            OutputStyle::decode("fg=red;bold"),
            Err(StyleError::MissingValue {
                pair: "bold".to_string()
            })
        );
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(OutputStyle::decode(""), Ok(OutputStyle::default()));
        assert_eq!(
            OutputStyle::decode("fg=red;"),
            Ok(OutputStyle::default().with_foreground("red"))
        );
    }

    #[test]
    fn test_decode_drops_unknown_options() {
        let style = OutputStyle::decode("options=bold,sparkly, UNDERLINE").unwrap();
        assert_eq!(
            style.options,
            BTreeSet::from([StyleOption::Bold, StyleOption::Underscore])
        );
    }

    #[test]
    fn test_decode_key_case_insensitive() {
        assert_eq!(OutputStyle::decode("FG=red").unwrap().foreground.as_deref(), Some("red"));
    }

    #[test]
    fn test_from_str() {
        let style: OutputStyle = "fg=blue".parse().unwrap();
        assert_eq!(style.foreground.as_deref(), Some("blue"));
        assert!("nope=1".parse::<OutputStyle>().is_err());
    }

    #[test]
    fn test_display_decodes_back() {
        let style = red_on_green()
            .with_href("http://github.com")
            .with_option(StyleOption::Italic)
            .with_option(StyleOption::Bold);
        let encoded = style.to_string();
        assert_eq!(
            encoded,
            "fg=red;bg=green;href=http://github.com;options=bold,italic"
        );
        assert_eq!(decode_style(&encoded), Ok(style));
    }

    #[test]
    fn test_render_empty_style() {
        let (open, close) = OutputStyle::default().render(ColorMode::TrueColor);
        assert_eq!(open, "");
        assert_eq!(close, "");
    }

    #[test]
    fn test_render_colors() {
        let (open, close) = red_on_green().render(ColorMode::TrueColor);
        assert_eq!(open, "\x1b[31;42m");
        assert_eq!(close, "\x1b[39;49m");
    }

    #[test]
    fn test_render_unknown_color_is_noop() {
        let style = OutputStyle::default().with_foreground("wrong");
        assert!(!style.is_empty());
        assert_eq!(style.render(ColorMode::TrueColor), (String::new(), String::new()));
    }

    #[test]
    fn test_render_options() {
        let style = OutputStyle::decode("options=italic,bold,dim").unwrap();
        let (open, close) = style.render(ColorMode::Basic);
        assert_eq!(open, "\x1b[1;2;3m");
        assert_eq!(close, "\x1b[22;23m");
    }

    #[test]
    fn test_render_href() {
        let style = OutputStyle::default()
            .with_foreground("blue")
            .with_href("https://example.com");
        let (open, close) = style.render(ColorMode::TrueColor);
        assert_eq!(open, "\x1b[34m\x1b]8;;https://example.com\x1b\\");
        assert_eq!(close, "\x1b]8;;\x1b\\\x1b[39m");
    }

    #[test]
    fn test_render_href_only() {
        let style = OutputStyle::default().with_href("https://example.com");
        let (open, close) = style.render(ColorMode::Basic);
        assert_eq!(open, "\x1b]8;;https://example.com\x1b\\");
        assert_eq!(close, "\x1b]8;;\x1b\\");
    }

    #[test]
    fn test_render_no_color_mode() {
        assert_eq!(
            red_on_green().render(ColorMode::None),
            (String::new(), String::new())
        );
    }

    #[test]
    fn test_render_downsampled() {
        let style = OutputStyle::default()
            .with_foreground("#ff0000")
            .with_background("201");
        assert_eq!(style.render(ColorMode::TrueColor).0, "\x1b[38;2;255;0;0;48;5;201m");
        assert_eq!(style.render(ColorMode::FixedColor).0, "\x1b[38;5;196;48;5;201m");
        assert_eq!(style.render(ColorMode::Basic).0, "\x1b[91;105m");
    }

    #[test]
    fn test_apply() {
        assert_eq!(
            red_on_green().apply("text", ColorMode::TrueColor),
            "\x1b[31;42mtext\x1b[39;49m"
        );
        assert_eq!(red_on_green().apply("", ColorMode::TrueColor), "");
    }

    #[test]
    fn test_merge() {
        let base = red_on_green().with_option(StyleOption::Bold);
        let top = OutputStyle::default()
            .with_background("blue")
            .with_option(StyleOption::Italic);
        let merged = base.merge(&top);
        assert_eq!(merged.foreground.as_deref(), Some("red"));
        assert_eq!(merged.background.as_deref(), Some("blue"));
        assert_eq!(
            merged.options,
            BTreeSet::from([StyleOption::Bold, StyleOption::Italic])
        );
    }

    #[test]
    fn test_color_from_token() {
        let test_cases = vec![
            ("default", Some(Color::Default)),
            ("RED", Some(Color::Red)),
            ("purple", Some(Color::Magenta)),
            ("grey", Some(Color::BrightBlack)),
            ("bright-white", Some(Color::BrightWhite)),
            ("bright-gray", None),
            ("bright-nope", None),
            ("0", Some(Color::Fixed(0))),
            ("255", Some(Color::Fixed(255))),
            ("256", None),
            ("#ABCDEF", Some(Color::RGB(0xab, 0xcd, 0xef))),
            ("#12345", None),
            ("#zzz", None),
        ];

        for (token, expected) in test_cases {
            assert_eq!(Color::from_token(token), expected, "Failed for token: {:?}", token);
        }
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Black.foreground_code(), "30");
        assert_eq!(Color::White.background_code(), "47");
        assert_eq!(Color::BrightBlack.foreground_code(), "90");
        assert_eq!(Color::BrightWhite.background_code(), "107");
        assert_eq!(Color::Default.foreground_code(), "39");
        assert_eq!(Color::Fixed(42).background_code(), "48;5;42");
        assert_eq!(Color::RGB(1, 2, 3).foreground_code(), "38;2;1;2;3");
    }

    #[test]
    fn test_to_basic() {
        assert_eq!(Color::Red.to_basic(), Color::Red);
        assert_eq!(Color::Fixed(1).to_basic(), Color::Red);
        assert_eq!(Color::Fixed(9).to_basic(), Color::BrightRed);
        assert_eq!(Color::RGB(0, 0, 0).to_basic(), Color::Black);
        assert_eq!(Color::RGB(250, 250, 250).to_basic(), Color::BrightWhite);
        assert_eq!(Color::Fixed(232).to_basic(), Color::Black);
        assert_eq!(Color::Default.to_basic(), Color::Default);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(Color::RGB(255, 0, 0).to_fixed(), Color::Fixed(196));
        assert_eq!(Color::RGB(0, 0, 0).to_fixed(), Color::Fixed(16));
        assert_eq!(Color::RGB(255, 255, 255).to_fixed(), Color::Fixed(231));
        assert_eq!(Color::Cyan.to_fixed(), Color::Cyan);
    }

    #[test]
    fn test_to_truecolor() {
        assert_eq!(Color::Blue.to_truecolor(), Color::RGB(0, 0, 238));
        assert_eq!(Color::Fixed(196).to_truecolor(), Color::RGB(255, 0, 0));
        assert_eq!(Color::Fixed(232).to_truecolor(), Color::RGB(8, 8, 8));
    }

    #[test]
    fn test_option_codes() {
        for token in [
            "bold",
            "dim",
            "italic",
            "underscore",
            "blink",
            "reverse",
            "conceal",
            "strikethrough",
        ] {
            let option = StyleOption::from_token(token).unwrap();
            assert_eq!(option.as_str(), token);
            assert!(option.unset_code() > 20 && option.set_code() < 10);
        }
    }
}
