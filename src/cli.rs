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

use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;

use crate::console::Console;
use crate::error::Fallible;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File name to import the initial card set from.
    #[arg(long = "import_from", value_name = "PATH")]
    import_from: Option<PathBuf>,
    /// File name to write all cards into on exit.
    #[arg(long = "export_to", value_name = "PATH")]
    export_to: Option<PathBuf>,
}

pub fn entrypoint() -> Fallible<()> {
    let args: Args = Args::parse();
    log::debug!("Arguments: {args:?}");
    let console = Console::new(stdin().lock(), stdout().lock());
    let mut session = Session::new(console, args.export_to);
    if let Some(path) = args.import_from {
        session.import_file(&path)?;
    }
    session.run()
}
