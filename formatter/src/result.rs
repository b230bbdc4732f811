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

//! Error types for the formatter crate.
//!
//! Decoding a style attribute string is the only fallible operation in this
//! crate. The formatter never surfaces these errors to its callers; a tag that
//! fails to decode is emitted as literal text instead.

/// Result type alias for operations that may fail with a [`StyleError`].
pub type StyleResult<T> = Result<T, StyleError>;

/// Errors that can occur while decoding a style attribute string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The attribute string contained a key other than `fg`, `bg`, `href` or `options`.
    ///
    /// A single unknown key invalidates the whole attribute string, no partial
    /// style is produced.
    #[error("Unknown style key '{key}'")]
    UnknownKey {
        /// The offending key, as written
        key: String,
    },

    /// A non-empty `;`-separated pair had no `=` separator.
    #[error("Style attribute '{pair}' is missing a value")]
    MissingValue {
        /// The offending pair, as written
        pair: String,
    },
}

impl StyleError {
    /// The raw fragment of the attribute string that caused the failure.
    pub fn fragment(&self) -> &str {
        match self {
            StyleError::UnknownKey { key } => key,
            StyleError::MissingValue { pair } => pair,
        }
    }
}
