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

//! Line-oriented chat loop: read a message, answer with reply text and cards.

use std::io::BufRead;
use std::io::Write;

use anyhow::Context;
use anyhow::Result;
use tracing::debug;

use crate::engine::SearchEngine;
use crate::output::render_results;
use crate::respond::Responder;

pub const GREETING: &str = "Hello! I'm your HR assistant. I can help you find employees based on their skills, experience, projects, and availability. Try asking me something like:\n\n\u{2022} Find Python developers with 3+ years experience\n\u{2022} Who has worked on healthcare projects?\n\u{2022} Show me available React developers";

pub const SAMPLE_QUERIES: [&str; 6] = [
    "Find Python developers with 3+ years experience",
    "Who has worked on healthcare projects?",
    "Suggest people for a React Native project",
    "Find developers who know both AWS and Docker",
    "Show me available UX designers",
    "Who can work on mobile banking apps?",
];

pub const SEARCH_TIPS: [&str; 3] = [
    "Use natural language like \"Find React developers\" or \"Show available designers\"",
    "Specify experience: \"3+ years\", \"senior level\"",
    "Filter by availability: \"available now\", \"not busy\"",
];

const PROMPT: &str = "> ";

pub struct ChatSession<'a> {
    engine: &'a SearchEngine,
    responder: Box<dyn Responder>,
    max_cards: usize,
}

impl<'a> ChatSession<'a> {
    pub fn new(engine: &'a SearchEngine, responder: Box<dyn Responder>, max_cards: usize) -> Self {
        Self {
            engine,
            responder,
            max_cards,
        }
    }

    /// Reply text followed by result cards, if any.
    pub fn reply(&self, message: &str) -> String {
        let results = self.engine.search_employees(message);
        let text = self.responder.respond(&results, message);
        let cards = render_results(&results, self.max_cards);
        if cards.is_empty() {
            text
        } else {
            format!("{text}\n\n{cards}")
        }
    }

    /// Runs until end of input or an `exit`/`quit` line.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "{GREETING}\n").context("write greeting")?;
        write!(out, "{PROMPT}").context("write prompt")?;
        out.flush().context("flush output")?;

        for line in input.lines() {
            let line = line.context("read input")?;
            let message = line.trim();
            if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
                break;
            }
            if !message.is_empty() {
                debug!(query = message, "chat message");
                writeln!(out, "{}\n", self.reply(message)).context("write reply")?;
            }
            write!(out, "{PROMPT}").context("write prompt")?;
            out.flush().context("flush output")?;
        }
        writeln!(out).context("write newline")?;
        Ok(())
    }
}
