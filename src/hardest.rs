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

use crate::deck::Deck;

/// Describes the card(s) with the most mistakes.
pub fn hardest_card_message(deck: &Deck) -> String {
    let Some((maximum, cards)) = deck.hardest() else {
        return "There are no cards with errors.".to_string();
    };
    let plural = cards.len() > 1;
    let (verb, pronoun) = if plural {
        ("s are", "them")
    } else {
        (" is", "it")
    };
    let terms: String = cards
        .iter()
        .map(|card| format!("\"{}\"", card.term))
        .collect::<Vec<_>>()
        .join(", ");
    format!("The hardest card{verb} {terms}. You have {maximum} errors answering {pronoun}.")
}
