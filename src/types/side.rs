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

use std::fmt::Display;
use std::fmt::Formatter;

/// Which side of a card a lookup compares against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Term,
    Definition,
}

impl Side {
    /// The prompt shown when reading this side of a new card.
    pub fn prompt(&self) -> &'static str {
        match self {
            Side::Term => "The card:",
            Side::Definition => "The definition of the card:",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Term => write!(f, "card"),
            Side::Definition => write!(f, "definition"),
        }
    }
}
