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

use std::fs::read;
use std::fs::write;
use std::path::Path;

use crate::error::Fallible;
use crate::types::card::Flashcard;

/// Reads a card list. Returns `None` if the file can't be read at all, and an
/// error if it can be read but isn't a card list.
pub fn load_cards(path: &Path) -> Fallible<Option<Vec<Flashcard>>> {
    let bytes = match read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("Could not read {path:?}: {e}");
            return Ok(None);
        }
    };
    let cards: Vec<Flashcard> = serde_json::from_slice(&bytes)?;
    log::debug!("Loaded {} cards from {path:?}.", cards.len());
    Ok(Some(cards))
}

/// Writes the cards to `path` as a card list, replacing the file.
pub fn save_cards(path: &Path, cards: &[Flashcard]) -> Fallible<()> {
    let json: String = serde_json::to_string(cards)?;
    write(path, json)?;
    log::debug!("Saved {} cards to {path:?}.", cards.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file() -> Fallible<()> {
        let dir = tempdir()?;
        let result = load_cards(&dir.path().join("derpherp.json"))?;
        assert!(result.is_none());
        Ok(())
    }

    #[test]
    fn test_malformed_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        std::fs::write(&path, "this is not json")?;
        let err = load_cards(&path).err().unwrap();
        assert!(err.to_string().starts_with("error: malformed card list"));
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_malformed() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        std::fs::write(&path, [0xff, 0xfe, b'[', b']'])?;
        let err = load_cards(&path).err().unwrap();
        assert!(err.to_string().starts_with("error: malformed card list"));
        Ok(())
    }

    #[test]
    fn test_missing_mistakes_defaults_to_zero() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        std::fs::write(&path, r#"[{"Term":"cat","Definition":"a feline"}]"#)?;
        let cards = load_cards(&path)?.unwrap();
        assert_eq!(cards, vec![Flashcard::new("cat", "a feline")]);
        assert_eq!(cards[0].mistakes, 0);
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        let cards = vec![
            Flashcard::new("cat", "a feline").with_mistakes(3),
            Flashcard::new("dog", "a canine"),
        ];
        save_cards(&path, &cards)?;
        assert_eq!(
            read_to_string(&path)?,
            r#"[{"Term":"cat","Definition":"a feline","Mistakes":3},{"Term":"dog","Definition":"a canine","Mistakes":0}]"#
        );
        assert_eq!(load_cards(&path)?, Some(cards));
        Ok(())
    }

    #[test]
    fn test_load_accepts_pretty_json() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cards.json");
        let contents = r#"
        [
            {
                "Term": "owl",
                "Definition": "a bird",
                "Mistakes": 5
            }
        ]
        "#;
        std::fs::write(&path, contents)?;
        let cards = load_cards(&path)?.unwrap();
        assert_eq!(cards, vec![Flashcard::new("owl", "a bird").with_mistakes(5)]);
        Ok(())
    }

    #[test]
    fn test_save_to_missing_directory_fails() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nope").join("cards.json");
        assert!(save_cards(&path, &[]).is_err());
        Ok(())
    }
}
