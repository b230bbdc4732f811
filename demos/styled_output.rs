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

//! Styled Output Demonstration
//!
//! Renders a few marked-up messages at several widths and color modes.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example styled_output
//! RUST_LOG=trace cargo run --example styled_output
//! ```

use styledconsole_formatter::{Formatter, FormatterConfig, OutputStyle, StyleOption, escape_markup};

fn main() {
    tracing_subscriber::fmt::init();

    let mut formatter = Formatter::with_default_styles(FormatterConfig::enabled().with_width(40));
    formatter.set_style(
        "title",
        OutputStyle::default()
            .with_foreground("bright-cyan")
            .with_option(StyleOption::Bold),
    );

    println!("{}", formatter.format("<title>STYLED CONSOLE DEMONSTRATION</title>\n"));

    // Named styles
    println!("{}", formatter.format("<info>info:</info> build finished"));
    println!("{}", formatter.format("<comment>comment:</comment> 3 warnings"));
    println!("{}", formatter.format("<question>Continue?</question> [y/n]"));
    println!("{}", formatter.format("<error>error: disk full</error>\n"));

    // Inline attributes, nesting and wrapping
    println!(
        "{}",
        formatter.format(
            "<bg=blue;fg=white>A long message on a blue background wraps at forty columns              and <options=bold,underscore>nested</> attributes merge.\nBlank space is filled.</>\n"
        )
    );

    // Hyperlinks
    println!(
        "{}",
        formatter.format("Docs: <href=https://docs.rs;fg=bright-blue>docs.rs</>\n")
    );

    // The same markup in every color mode
    let sample = "<fg=#ff6600>orange</> <fg=208>fixed</> <bg=#336>navy</>";
    for (name, config) in [
        ("true color", FormatterConfig::true_color_only()),
        ("256 colors", FormatterConfig::fixed_color_only()),
        ("16 colors", FormatterConfig::basic_color_only()),
        ("plain", FormatterConfig::plain()),
    ] {
        println!("{:>12}: {}", name, Formatter::new(config).format(sample));
    }

    // Untrusted text is escaped before it is embedded in markup
    let user_input = "<fg=red>not markup</> C:\\";
    println!(
        "\n{}",
        formatter.format(&format!("<comment>echo:</comment> {}", escape_markup(user_input)))
    );

    // Successive calls keep wrapping continuous
    let narrow = Formatter::new(FormatterConfig::enabled().with_width(16));
    let mut column = 0;
    print!("{}", narrow.format_with_column("progress: ", &mut column));
    for _ in 0..3 {
        print!("{}", narrow.format_with_column("<fg=green>###</>", &mut column));
    }
    println!();
}
