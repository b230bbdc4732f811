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

use crate::OutputStyle;
use tracing::debug;

/// The styles opened by the tags enclosing the current scan position.
///
/// The effective style is the merge of every entry from the bottom up, so a
/// nested `<bg=blue>` inside `<fg=red>` renders red on blue.
///
/// ```rust
/// use styledconsole_formatter::{OutputStyle, StyleStack};
///
/// let mut stack = StyleStack::new();
/// stack.push(OutputStyle::default().with_foreground("red"));
/// stack.push(OutputStyle::default().with_background("blue"));
///
/// let current = stack.current();
/// assert_eq!(current.foreground.as_deref(), Some("red"));
/// assert_eq!(current.background.as_deref(), Some("blue"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleStack {
    styles: Vec<OutputStyle>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self { styles: Vec::new() }
    }

    /// Push a style on top of the stack.
    pub fn push(&mut self, style: OutputStyle) {
        self.styles.push(style);
    }

    /// Remove the most recently pushed style.
    ///
    /// Closing more tags than were opened is tolerated: popping an empty stack
    /// changes nothing and returns `None`.
    pub fn pop_current(&mut self) -> Option<OutputStyle> {
        let popped = self.styles.pop();
        if popped.is_none() {
            debug!("close tag without a matching open tag");
        }
        popped
    }

    /// The effective style: every entry merged from the bottom up.
    pub fn current(&self) -> OutputStyle {
        self.styles
            .iter()
            .fold(OutputStyle::default(), |merged, style| merged.merge(style))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Drop every style.
    pub fn clear(&mut self) {
        self.styles.clear();
    }
}
