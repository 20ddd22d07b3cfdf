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

use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::command::Command;
use crate::command::MAIN_PROMPT;
use crate::console::Console;
use crate::deck::Deck;
use crate::error::Fallible;
use crate::hardest::hardest_card_message;
use crate::quiz;
use crate::storage::load_cards;
use crate::storage::save_cards;
use crate::types::card::Flashcard;
use crate::types::side::Side;

/// The interactive session: a deck, the console it is driven through, and
/// where to save the deck on exit.
pub struct Session<R, W> {
    deck: Deck,
    console: Console<R, W>,
    export_to: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, export_to: Option<PathBuf>) -> Self {
        Self {
            deck: Deck::new(),
            console,
            export_to,
        }
    }

    #[cfg(test)]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[cfg(test)]
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Runs the command loop until `exit`.
    pub fn run(&mut self) -> Fallible<()> {
        loop {
            let input = self.console.ask(MAIN_PROMPT)?;
            let Some(command) = Command::parse(&input) else {
                log::debug!("Ignoring unknown action {input:?}.");
                continue;
            };
            log::debug!("Action: {command}");
            match command {
                Command::Add => self.add()?,
                Command::Remove => self.remove()?,
                Command::Import => {
                    let path = self.read_path()?;
                    self.import_file(&path)?;
                }
                Command::Export => {
                    let path = self.read_path()?;
                    self.export_file(&path)?;
                }
                Command::Ask => quiz::ask(&mut self.deck, &mut self.console)?,
                Command::Log => self.save_log()?,
                Command::HardestCard => {
                    let message = hardest_card_message(&self.deck);
                    self.console.say(message)?;
                }
                Command::ResetStats => {
                    self.deck.reset();
                    self.console.say("Card statistics have been reset.")?;
                }
                Command::Exit => {
                    if let Some(path) = self.export_to.clone() {
                        self.export_file(&path)?;
                    }
                    self.console.say("Bye bye!")?;
                    return Ok(());
                }
            }
        }
    }

    /// Loads a card list and merges it into the deck. A file that can't be
    /// read is reported and skipped.
    pub fn import_file(&mut self, path: &Path) -> Fallible<()> {
        match load_cards(path)? {
            Some(cards) => {
                self.console
                    .say(format!("{} cards have been loaded.", cards.len()))?;
                self.deck.update(cards);
            }
            None => self.console.say("File not found.")?,
        }
        Ok(())
    }

    pub fn export_file(&mut self, path: &Path) -> Fallible<()> {
        save_cards(path, self.deck.cards())?;
        self.console
            .say(format!("{} cards have been saved.", self.deck.len()))?;
        Ok(())
    }

    fn read_path(&mut self) -> Fallible<PathBuf> {
        let name = self.console.ask("File name:")?;
        Ok(PathBuf::from(name))
    }

    fn add(&mut self) -> Fallible<()> {
        let term = self.read_side(Side::Term)?;
        let definition = self.read_side(Side::Definition)?;
        self.console.say(format!(
            "The pair (\"{term}\":\"{definition}\") has been added."
        ))?;
        self.deck.add(Flashcard::new(term, definition));
        Ok(())
    }

    /// Reads one side of a new card, asking again until it is unique.
    fn read_side(&mut self, side: Side) -> Fallible<String> {
        self.console.say(side.prompt())?;
        loop {
            let text = self.console.read_line()?;
            if self.deck.contains(&text, side).is_none() {
                return Ok(text);
            }
            self.console
                .say(format!("The {side} \"{text}\" already exists. Try again:"))?;
        }
    }

    fn remove(&mut self) -> Fallible<()> {
        let term = self.console.ask("Which card?")?;
        match self.deck.remove(&term) {
            Some(_) => self.console.say("The card has been removed.")?,
            None => self
                .console
                .say(format!("Can't remove \"{term}\": there is no such card."))?,
        }
        Ok(())
    }

    fn save_log(&mut self) -> Fallible<()> {
        let path = self.read_path()?;
        self.console.transcript().flush(&path)?;
        self.console.say("The log has been saved.")?;
        Ok(())
    }
}
