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

//! Turns free-text queries into [`SearchFacets`].
//!
//! Matching is plain substring search over the lower-cased query. Nothing in
//! here can fail: text that matches no table simply leaves a facet empty.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Availability;
use crate::model::SearchFacets;
use crate::vocab::DEPARTMENT_KEYWORDS;
use crate::vocab::LOCATION_KEYWORDS;
use crate::vocab::PROJECT_KEYWORDS;
use crate::vocab::SKILL_KEYWORDS;

static EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\+?\s*(?:years?|yrs?)").expect("experience pattern compiles")
});

pub fn extract(query: &str) -> SearchFacets {
    extract_lowered(&query.to_lowercase())
}

/// Same as [`extract`] for a query that is already lower-cased.
pub fn extract_lowered(query: &str) -> SearchFacets {
    SearchFacets {
        skills: extract_skills(query),
        min_experience: extract_experience(query),
        projects: PROJECT_KEYWORDS
            .iter()
            .filter(|keyword| query.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect(),
        availability: extract_availability(query),
        department: extract_department(query),
        location: LOCATION_KEYWORDS
            .iter()
            .find(|loc| query.contains(*loc))
            .map(|loc| loc.to_string()),
    }
}

fn extract_skills(query: &str) -> Vec<String> {
    SKILL_KEYWORDS
        .iter()
        .filter(|keyword| {
            if query.contains(*keyword) {
                return true;
            }
            // "react native" is also accepted as "reactnative".
            let squashed: String = keyword.split_whitespace().collect();
            squashed.len() != keyword.len() && query.contains(&squashed)
        })
        .map(|keyword| keyword.to_string())
        .collect()
}

/// A digit run too long for `u32` saturates, so nobody meets the threshold.
fn extract_experience(query: &str) -> Option<u32> {
    let caps = EXPERIENCE_RE.captures(query)?;
    let digits = caps.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn extract_availability(query: &str) -> Option<Availability> {
    if query.contains("available") && !query.contains("partially") {
        Some(Availability::Available)
    } else if query.contains("partially available") {
        Some(Availability::PartiallyAvailable)
    } else if query.contains("busy") {
        Some(Availability::Busy)
    } else {
        None
    }
}

fn extract_department(query: &str) -> Option<String> {
    DEPARTMENT_KEYWORDS
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| query.contains(t)))
        .map(|(dept, _)| dept.to_string())
}
