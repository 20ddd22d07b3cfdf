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

pub const MAIN_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// An action typed at the main prompt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Log,
    HardestCard,
    ResetStats,
    Exit,
}

impl Command {
    /// Matches input exactly and case-sensitively. Anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "add" => Some(Command::Add),
            "remove" => Some(Command::Remove),
            "import" => Some(Command::Import),
            "export" => Some(Command::Export),
            "ask" => Some(Command::Ask),
            "log" => Some(Command::Log),
            "hardest card" => Some(Command::HardestCard),
            "reset stats" => Some(Command::ResetStats),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Import => "import",
            Command::Export => "export",
            Command::Ask => "ask",
            Command::Log => "log",
            Command::HardestCard => "hardest card",
            Command::ResetStats => "reset stats",
            Command::Exit => "exit",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
