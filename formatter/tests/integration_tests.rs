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

//! End-to-end tests of the public formatting API

use bytes::BytesMut;
use styledconsole_formatter::{
    ColorMode, Formatter, FormatterConfig, OutputStyle, StyleError, StyleOption, escape_markup,
    format_text, strip_ansi_codes, visible_width,
};

#[test]
fn test_log_line_with_status() {
    let output = format_text("[<fg=green>OK</>] service started", 80);
    assert_eq!(output, "[\x1b[32mOK\x1b[39m] service started");
    assert_eq!(strip_ansi_codes(&output), "[OK] service started");
}

#[test]
fn test_every_wrapped_line_fits_width() {
    let text = "<bg=blue;fg=white>The quick brown fox jumps over the lazy dog.\nIt barks.</> Then it sleeps for a long while.";
    let output = format_text(text, 12);
    for line in output.split('\n') {
        assert!(visible_width(line) <= 12, "line too wide: {:?}", line);
    }
    assert_eq!(
        strip_ansi_codes(&output).replace('\n', "").replace(' ', ""),
        "Thequickbrownfoxjumpsoverthelazydog.Itbarks.Thenitsleepsforalongwhile."
    );
}

#[test]
fn test_background_fills_line_before_newline() {
    let output = format_text("<bg=red>ab\ncd</>", 6);
    assert_eq!(output, "\x1b[41mab    \x1b[49m\n\x1b[41mcd\x1b[49m");
}

#[test]
fn test_hyperlink() {
    assert_eq!(
        format_text("see <href=https://example.com>site</>", 80),
        "see \x1b]8;;https://example.com\x1b\\site\x1b]8;;\x1b\\"
    );
}

#[test]
fn test_options_and_colors_combine() {
    assert_eq!(
        format_text("<fg=yellow;options=bold,underscore>warn</>", 80),
        "\x1b[33;1;4mwarn\x1b[39;22;24m"
    );
}

#[test]
fn test_stray_close_tags_are_ignored() {
    assert_eq!(format_text("</>a</x>b</>", 80), "ab");
}

#[test]
fn test_escaped_user_input_prints_literally() {
    let user = "<fg=red>not a tag</> \\";
    let output = format_text(&format!("<fg=cyan>{}</>", escape_markup(user)), 80);
    assert_eq!(strip_ansi_codes(&output), user);
}

#[test]
fn test_color_modes() {
    let text = "<fg=#ff6600>x</>";
    let render = |config: FormatterConfig| Formatter::new(config).format(text);

    assert_eq!(render(FormatterConfig::true_color_only()), "\x1b[38;2;255;102;0mx\x1b[39m");
    assert_eq!(render(FormatterConfig::fixed_color_only()), "\x1b[38;5;208mx\x1b[39m");
    assert_eq!(render(FormatterConfig::plain()), "x");
    assert_eq!(render(FormatterConfig::basic_color_only()), "\x1b[91mx\x1b[39m");
}

#[test]
fn test_named_style_overrides_attribute_decoding() {
    let mut formatter = Formatter::new(FormatterConfig::default());
    formatter.set_style(
        "title",
        OutputStyle::default()
            .with_foreground("bright-white")
            .with_option(StyleOption::Bold),
    );
    assert_eq!(formatter.format("<title>Menu</title>"), "\x1b[97;1mMenu\x1b[39;22m");
    assert_eq!(formatter.config().color_mode, ColorMode::TrueColor);
}

#[test]
fn test_column_carries_across_calls() {
    let formatter = Formatter::new(FormatterConfig::enabled().with_width(10));
    let mut column = 0;
    let mut output = formatter.format_with_column("Loading: ", &mut column);
    output.push_str(&formatter.format_with_column("<fg=green>done</>", &mut column));
    assert_eq!(output, "Loading: \x1b[32md\x1b[39m\n\x1b[32mone\x1b[39m");
    assert_eq!(column, 3);
}

#[test]
fn test_format_to_appends() {
    let formatter = Formatter::new(FormatterConfig::plain());
    let mut buffer = BytesMut::from("> ");
    assert_eq!(formatter.format_to("<fg=red>hi</>", &mut buffer), 2);
    assert_eq!(&buffer[..], b"> hi");
}

#[test]
fn test_decode_errors_are_reported() {
    let error = OutputStyle::decode("fg=red;size=12").unwrap_err();
    assert_eq!(
        error,
        StyleError::UnknownKey {
            key: "size".to_string()
        }
    );
    assert!(matches!(
        OutputStyle::decode("fg"),
        Err(StyleError::MissingValue { .. })
    ));
}

#[test]
fn test_full_width_line_then_newline() {
    let line = "x".repeat(80);
    let output = format_text(&format!("<bg=green>{}\nnext</>", line), 80);
    assert_eq!(
        output,
        format!("\x1b[42m{}\x1b[49m\n\x1b[42mnext\x1b[49m", line)
    );
}

#[test]
fn test_escaped_bracket_in_hyperlink_target() {
    let output = format_text("<href=https://example.com/a\\>b>link</>", 80);
    assert_eq!(strip_ansi_codes(&output), "link");
    assert!(output.starts_with("\x1b]8;;https://example.com/a>b\x1b\\"));
}
