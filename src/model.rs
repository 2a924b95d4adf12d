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

//! Shared domain types used by the roster, scorer, ranker and responders.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Busy,
    PartiallyAvailable,
}

impl Availability {
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::PartiallyAvailable => "partially_available",
        }
    }

    /// Badge text shown on employee cards.
    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::PartiallyAvailable => "Partially Available",
        }
    }

    /// Phrase used when narrating a candidate.
    pub fn describe(self) -> &'static str {
        match self {
            Availability::Available => "currently available",
            Availability::Busy => "currently busy",
            Availability::PartiallyAvailable => "partially available",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub projects: Vec<String>,
    pub availability: Availability,
    pub department: String,
    pub role: String,
    pub location: String,
    pub email: String,
}

impl Employee {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Structured view of a free-text query. Built fresh for every search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFacets {
    pub skills: Vec<String>,
    pub min_experience: Option<u32>,
    pub projects: Vec<String>,
    pub availability: Option<Availability>,
    pub department: Option<String>,
    pub location: Option<String>,
}

impl SearchFacets {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.min_experience.is_none()
            && self.projects.is_empty()
            && self.availability.is_none()
            && self.department.is_none()
            && self.location.is_none()
    }
}

/// One reason an employee matched. Renders as the human-readable line shown
/// to the user and serializes as that same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Skills(Vec<String>),
    Experience(u32),
    Projects(Vec<String>),
    Availability(Availability),
    Department(String),
    Location(String),
    Name,
    Role(String),
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Skills(skills) => write!(f, "Skills: {}", skills.join(", ")),
            Criterion::Experience(years) => write!(f, "{years} years experience"),
            Criterion::Projects(projects) => {
                write!(f, "Relevant projects: {}", projects.join(", "))
            }
            Criterion::Availability(value) => write!(f, "Availability: {value}"),
            Criterion::Department(dept) => write!(f, "Department: {dept}"),
            Criterion::Location(loc) => write!(f, "Location: {loc}"),
            Criterion::Name => f.write_str("Name match"),
            Criterion::Role(role) => write!(f, "Role: {role}"),
        }
    }
}

impl Serialize for Criterion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult<'a> {
    pub employee: &'a Employee,
    pub relevance_score: i32,
    pub matched_criteria: Vec<Criterion>,
}

impl ScoredResult<'_> {
    pub fn matched_skills(&self) -> Option<&[String]> {
        self.matched_criteria.iter().find_map(|c| match c {
            Criterion::Skills(skills) => Some(skills.as_slice()),
            _ => None,
        })
    }

    pub fn matched_projects(&self) -> Option<&[String]> {
        self.matched_criteria.iter().find_map(|c| match c {
            Criterion::Projects(projects) => Some(projects.as_slice()),
            _ => None,
        })
    }

    pub fn criteria_lines(&self) -> Vec<String> {
        self.matched_criteria.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_render_as_display_lines() {
        let lines: Vec<String> = [
            Criterion::Skills(vec!["python".into(), "aws".into()]),
            Criterion::Experience(5),
            Criterion::Projects(vec!["healthcare".into()]),
            Criterion::Availability(Availability::PartiallyAvailable),
            Criterion::Department("Engineering".into()),
            Criterion::Location("Austin, TX".into()),
            Criterion::Name,
            Criterion::Role("QA Engineer".into()),
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(
            lines,
            vec![
                "Skills: python, aws",
                "5 years experience",
                "Relevant projects: healthcare",
                "Availability: partially_available",
                "Department: Engineering",
                "Location: Austin, TX",
                "Name match",
                "Role: QA Engineer",
            ]
        );
    }

    #[test]
    fn criterion_serializes_as_string() {
        let value = serde_json::to_value(Criterion::Experience(3)).expect("serialize");
        assert_eq!(value, serde_json::json!("3 years experience"));
    }

    #[test]
    fn availability_uses_snake_case() {
        let value = serde_json::to_value(Availability::PartiallyAvailable).expect("serialize");
        assert_eq!(value, serde_json::json!("partially_available"));
    }
}
