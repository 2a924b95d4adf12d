// Copyright 2026 Staffsearch Authors
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

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;

use crate::respond::ResponseStyle;

#[derive(Parser, Debug)]
#[command(
    name = "staffsearch",
    version,
    about = "Find employees by skills, experience, projects and availability"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the roster with a natural-language query
    Search(SearchArgs),

    /// Interactive chat on stdin
    Chat(ChatArgs),

    /// List every employee
    Roster {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Show sample queries and search tips
    Samples {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Query text
    pub query: String,

    /// Reply style (defaults to config)
    #[arg(long, value_enum)]
    pub style: Option<ResponseStyle>,

    /// Max result cards, 0 for all (defaults to config)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Include extracted facets
    #[arg(long)]
    pub explain: bool,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Reply style (defaults to config)
    #[arg(long, value_enum)]
    pub style: Option<ResponseStyle>,

    /// Max result cards, 0 for all (defaults to config)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a default config file if none exists
    #[arg(long)]
    pub init: bool,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}
