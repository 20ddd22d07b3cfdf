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
use std::io::BufRead;
use std::io::Write;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::Fallible;
use crate::types::side::Side;

/// The outcome of answering one card.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Verdict {
    Correct,
    /// The answer is wrong, and matches no card.
    Wrong { expected: String },
    /// The answer is wrong for this card, but is the definition of another.
    WrongCard { expected: String, other_term: String },
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct!"),
            Verdict::Wrong { expected } => {
                write!(f, "Wrong. The right answer is \"{expected}\".")
            }
            Verdict::WrongCard {
                expected,
                other_term,
            } => write!(
                f,
                "Wrong. The right answer is \"{expected}\", but your definition is correct for \"{other_term}\"."
            ),
        }
    }
}

/// Grades `answer` against the card at `index`. A wrong answer counts as a
/// mistake on that card. Returns `None` if there is no card at `index`.
fn check_answer(deck: &mut Deck, index: usize, answer: &str) -> Option<Verdict> {
    let card = deck.cards().get(index)?;
    if card.definition == answer {
        return Some(Verdict::Correct);
    }
    let expected = card.definition.clone();
    deck.record_mistake(index);
    let verdict = match deck.contains(answer, Side::Definition) {
        Some(other) => Verdict::WrongCard {
            expected,
            other_term: deck.cards()[other].term.clone(),
        },
        None => Verdict::Wrong { expected },
    };
    Some(verdict)
}

/// Runs a quiz: reads a repetition count, then asks that many cards, cycling
/// through the deck in order.
pub fn ask<R: BufRead, W: Write>(deck: &mut Deck, console: &mut Console<R, W>) -> Fallible<()> {
    if deck.is_empty() {
        console.say("There are no cards available in memory")?;
        return Ok(());
    }
    console.say("How many times to ask?")?;
    let rounds: usize = usize::try_from(console.read_number()?).unwrap_or(0);
    for round in 0..rounds {
        let index = round % deck.len();
        log::debug!("Quiz round {round}: card {index}.");
        let term = deck.cards()[index].term.clone();
        let answer = console.ask(&format!("Print the definition of \"{term}\":"))?;
        if let Some(verdict) = check_answer(deck, index, &answer) {
            console.say(verdict.to_string())?;
        }
    }
    Ok(())
}
