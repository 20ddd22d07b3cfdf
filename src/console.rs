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

use crate::error::Fallible;
use crate::error::fail;
use crate::transcript::Transcript;

/// Line-oriented terminal I/O. Everything written goes into the transcript
/// too, so the two never diverge.
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Prints a line and records it.
    pub fn say(&mut self, line: impl AsRef<str>) -> Fallible<()> {
        let line = line.as_ref();
        self.transcript.record(line);
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line of input with surrounding whitespace removed.
    pub fn read_line(&mut self) -> Fallible<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return fail("unexpected end of input.");
        }
        Ok(line.trim().to_string())
    }

    pub fn ask(&mut self, prompt: &str) -> Fallible<String> {
        self.say(prompt)?;
        self.read_line()
    }

    pub fn read_number(&mut self) -> Fallible<i64> {
        let line = self.read_line()?;
        Ok(line.parse::<i64>()?)
    }
}
