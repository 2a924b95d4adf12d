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

use std::cmp::Ordering;

use tracing::debug;

use crate::facets;
use crate::model::ScoredResult;
use crate::model::SearchFacets;
use crate::respond::ResponseStyle;
use crate::respond::build_responder;
use crate::roster::Roster;
use crate::scoring;

/// Search service over one roster. Holds no per-query state, so a single
/// instance can answer any number of queries.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    roster: Roster,
}

impl SearchEngine {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn explain(&self, query: &str) -> SearchFacets {
        facets::extract(query)
    }

    /// Ranked hits for `query`. An empty or whitespace-only query returns no
    /// hits without scoring, even though a blank string is a substring of
    /// every role.
    pub fn search_employees(&self, query: &str) -> Vec<ScoredResult<'_>> {
        let lowered = query.to_lowercase();
        if lowered.trim().is_empty() {
            debug!("blank query, skipping search");
            return Vec::new();
        }

        let facets = facets::extract_lowered(&lowered);
        debug!(?facets, "extracted facets");

        let scored = self
            .roster
            .employees()
            .iter()
            .map(|employee| scoring::score(employee, &facets, &lowered))
            .collect();
        let ranked = rank(scored);
        debug!(hits = ranked.len(), roster = self.roster.len(), "ranked results");
        ranked
    }

    pub fn generate_response(
        &self,
        results: &[ScoredResult<'_>],
        query: &str,
        style: ResponseStyle,
    ) -> String {
        build_responder(style).respond(results, query)
    }
}

/// Drops non-positive scores and orders the rest by descending score. Equal
/// scores fall back to ascending employee id.
pub fn rank(scored: Vec<ScoredResult<'_>>) -> Vec<ScoredResult<'_>> {
    let mut kept: Vec<ScoredResult<'_>> = scored
        .into_iter()
        .filter(|result| result.relevance_score > 0)
        .collect();
    kept.sort_by(|a, b| {
        let ord = score_cmp(a, b);
        if ord == Ordering::Equal {
            deterministic_tiebreak(a, b)
        } else {
            ord
        }
    });
    kept
}

fn score_cmp(a: &ScoredResult<'_>, b: &ScoredResult<'_>) -> Ordering {
    b.relevance_score.cmp(&a.relevance_score)
}

fn deterministic_tiebreak(a: &ScoredResult<'_>, b: &ScoredResult<'_>) -> Ordering {
    a.employee.id.cmp(&b.employee.id)
}
