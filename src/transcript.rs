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

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Fallible;

/// Every line shown to the user during the session, in order. Never cleared.
#[derive(Default, Debug)]
pub struct Transcript {
    buffer: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn record(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    #[cfg(test)]
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Writes the whole transcript to `path`, replacing the file.
    pub fn flush(&self, path: &Path) -> Fallible<()> {
        log::debug!("Writing transcript to {path:?}.");
        let mut file = File::create(path)?;
        file.write_all(self.buffer.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_record() {
        let mut transcript = Transcript::new();
        transcript.record("The card:");
        transcript.record("Correct!");
        assert_eq!(transcript.contents(), "The card:\nCorrect!\n");
    }

    #[test]
    fn test_flush_overwrites_and_keeps_buffer() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("log.txt");
        std::fs::write(&path, "stale contents that are longer than the log")?;
        let mut transcript = Transcript::new();
        transcript.record("first");
        transcript.flush(&path)?;
        assert_eq!(read_to_string(&path)?, "first\n");
        transcript.record("second");
        transcript.flush(&path)?;
        assert_eq!(read_to_string(&path)?, "first\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_flush_to_missing_directory_fails() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nope").join("log.txt");
        assert!(Transcript::new().flush(&path).is_err());
        Ok(())
    }
}
