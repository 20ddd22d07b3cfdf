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

use crate::types::card::Flashcard;
use crate::types::side::Side;

/// The in-memory card store.
///
/// Cards are kept in insertion order until the first removal, which moves the
/// last card into the removed slot. Uniqueness of terms and definitions is
/// not checked here: callers check with [`Deck::contains`] before adding.
#[derive(Default, Debug)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    /// Creates a new, empty deck.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the index of the first card whose given side equals `text`.
    pub fn contains(&self, text: &str, side: Side) -> Option<usize> {
        self.cards.iter().position(|card| card.side(side) == text)
    }

    pub fn add(&mut self, card: Flashcard) {
        self.cards.push(card);
    }

    /// Removes the card with the given term, returning it. The last card
    /// takes its place.
    pub fn remove(&mut self, term: &str) -> Option<Flashcard> {
        let index = self.contains(term, Side::Term)?;
        Some(self.cards.swap_remove(index))
    }

    /// Merges imported cards into the deck. New terms are appended; existing
    /// terms get the imported definition and mistake count.
    pub fn update(&mut self, imported: Vec<Flashcard>) {
        for card in imported {
            match self.contains(&card.term, Side::Term) {
                Some(index) => {
                    let existing = &mut self.cards[index];
                    existing.definition = card.definition;
                    existing.mistakes = card.mistakes;
                }
                None => self.cards.push(card),
            }
        }
    }

    /// Increments the mistake count of the card at `index`.
    pub fn record_mistake(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.mistakes += 1;
        }
    }

    pub fn reset(&mut self) {
        for card in self.cards.iter_mut() {
            card.mistakes = 0;
        }
    }

    /// The highest mistake count in the deck, and every card that has it.
    /// Returns `None` when no card has any mistakes.
    pub fn hardest(&self) -> Option<(usize, Vec<&Flashcard>)> {
        let maximum = self.cards.iter().map(|card| card.mistakes).max()?;
        if maximum == 0 {
            return None;
        }
        let cards = self
            .cards
            .iter()
            .filter(|card| card.mistakes == maximum)
            .collect();
        Some((maximum, cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Deck {
        let mut deck = Deck::new();
        deck.add(Flashcard::new("cat", "a feline"));
        deck.add(Flashcard::new("dog", "a canine"));
        deck.add(Flashcard::new("cow", "a bovine"));
        deck
    }

    #[test]
    fn test_contains() {
        let deck = sample();
        assert_eq!(deck.contains("dog", Side::Term), Some(1));
        assert_eq!(deck.contains("a bovine", Side::Definition), Some(2));
        assert_eq!(deck.contains("a canine", Side::Term), None);
        assert_eq!(deck.contains("dog", Side::Definition), None);
    }

    #[test]
    fn test_remove_swaps_last_card_in() {
        let mut deck = sample();
        let removed = deck.remove("cat");
        assert_eq!(removed, Some(Flashcard::new("cat", "a feline")));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.contains("cat", Side::Term), None);
        let terms: Vec<&str> = deck.cards().iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["cow", "dog"]);
    }

    #[test]
    fn test_remove_missing() {
        let mut deck = sample();
        assert_eq!(deck.remove("horse"), None);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_update_overwrites_existing_terms() {
        let mut deck = sample();
        deck.update(vec![
            Flashcard::new("dog", "man's best friend").with_mistakes(4),
            Flashcard::new("owl", "a bird").with_mistakes(1),
        ]);
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.cards()[1], Flashcard::new("dog", "man's best friend").with_mistakes(4));
        assert_eq!(deck.cards()[3], Flashcard::new("owl", "a bird").with_mistakes(1));
    }

    #[test]
    fn test_update_same_term_twice_keeps_last() {
        let mut deck = Deck::new();
        deck.update(vec![
            Flashcard::new("cat", "first").with_mistakes(1),
            Flashcard::new("cat", "second").with_mistakes(2),
        ]);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards()[0], Flashcard::new("cat", "second").with_mistakes(2));
    }

    #[test]
    fn test_reset() {
        let mut deck = sample();
        deck.record_mistake(0);
        deck.record_mistake(2);
        deck.reset();
        assert!(deck.cards().iter().all(|card| card.mistakes == 0));
    }

    #[test]
    fn test_hardest() {
        let mut deck = Deck::new();
        for (term, mistakes) in [("a", 3), ("b", 1), ("c", 3), ("d", 0)] {
            deck.add(Flashcard::new(term, format!("def {term}")).with_mistakes(mistakes));
        }
        let (maximum, cards) = deck.hardest().unwrap();
        assert_eq!(maximum, 3);
        let terms: Vec<&str> = cards.iter().map(|c| c.term.as_str()).collect();
        assert_eq!(terms, vec!["a", "c"]);
    }

    #[test]
    fn test_hardest_without_mistakes() {
        assert!(Deck::new().hardest().is_none());
        assert!(sample().hardest().is_none());
    }
}
