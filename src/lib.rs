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

//! Keyword-driven employee search.
//!
//! A query is broken into facets ([`facets::extract`]), every roster entry is
//! scored against them ([`scoring::score`]), the hits are ranked
//! ([`engine::rank`]) and a reply is written by one of the
//! [`respond::Responder`] strategies. [`engine::SearchEngine`] ties the steps
//! together.

pub mod chat;
pub mod cli;
pub mod config;
pub mod engine;
pub mod facets;
pub mod model;
pub mod output;
pub mod respond;
pub mod roster;
pub mod scoring;
pub mod vocab;

pub use engine::SearchEngine;
pub use model::Availability;
pub use model::Criterion;
pub use model::Employee;
pub use model::ScoredResult;
pub use model::SearchFacets;
pub use respond::ResponseStyle;
pub use roster::Roster;
