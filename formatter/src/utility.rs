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

//! Text helpers used around the markup scanner.

mod escape;
mod strip;

pub(crate) use self::escape::unescape_tag_body;
pub use self::escape::{escape_markup, escape_trailing_backslash, get_substring};
pub use self::strip::{strip_ansi_codes, visible_width};
