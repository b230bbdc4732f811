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

/// Escape character that introduces every control sequence.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer (`ESC [`).
pub const CSI: &str = "\x1b[";

/// Operating System Command 8 prefix used for hyperlinks (`ESC ] 8 ; ;`).
pub const OSC8_PREFIX: &str = "\x1b]8;;";

/// String Terminator (`ESC \`).
pub const ST: &str = "\x1b\\";

/// Stand-in for a trailing backslash while markup is being scanned.
///
/// Never appears in normal terminal text. Restored to `\` once formatting
/// completes.
pub const BACKSLASH_SENTINEL: char = '\0';

/// Width used by [`FormatterConfig::default`](crate::FormatterConfig).
pub const DEFAULT_WIDTH: usize = 80;

/// Separator between `key=value` pairs of a style attribute string.
pub const PAIR_SEPARATOR: char = ';';

/// Separator between tokens of the `options` attribute.
pub const OPTION_SEPARATOR: char = ',';
