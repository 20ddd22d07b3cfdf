// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;
use serde::Serialize;

use crate::types::side::Side;

/// A term/definition pair and the number of times it was answered wrongly.
///
/// The serialized field names are capitalized, and that is the card-list file
/// format.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
    /// Missing in hand-written card lists, where it counts as zero.
    #[serde(default)]
    pub mistakes: usize,
}

impl Flashcard {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes: 0,
        }
    }

    #[cfg(test)]
    pub fn with_mistakes(mut self, mistakes: usize) -> Self {
        self.mistakes = mistakes;
        self
    }

    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Term => &self.term,
            Side::Definition => &self.definition,
        }
    }
}
