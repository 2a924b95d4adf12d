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

use tracing::trace;

use crate::model::Criterion;
use crate::model::Employee;
use crate::model::ScoredResult;
use crate::model::SearchFacets;

pub const SKILL_POINTS: i32 = 30;
pub const EXPERIENCE_POINTS: i32 = 20;
pub const EXPERIENCE_PENALTY: i32 = -10;
pub const PROJECT_POINTS: i32 = 15;
pub const AVAILABILITY_POINTS: i32 = 25;
pub const DEPARTMENT_POINTS: i32 = 15;
pub const LOCATION_POINTS: i32 = 10;
pub const NAME_POINTS: i32 = 40;
pub const ROLE_POINTS: i32 = 20;

/// Scores one employee against the extracted facets and the lower-cased raw
/// query. Criteria are recorded in rule order; rules that do not fire add
/// nothing.
pub fn score<'a>(employee: &'a Employee, facets: &SearchFacets, query: &str) -> ScoredResult<'a> {
    let mut total = 0i32;
    let mut criteria = Vec::new();

    let skills: Vec<String> = employee.skills.iter().map(|s| s.to_lowercase()).collect();
    let skill_matches: Vec<String> = facets
        .skills
        .iter()
        .filter(|wanted| {
            skills
                .iter()
                .any(|have| have.contains(wanted.as_str()) || wanted.contains(have.as_str()))
        })
        .cloned()
        .collect();
    if !skill_matches.is_empty() {
        total += SKILL_POINTS * skill_matches.len() as i32;
        criteria.push(Criterion::Skills(skill_matches));
    }

    if let Some(min_years) = facets.min_experience {
        if employee.experience_years >= min_years {
            total += EXPERIENCE_POINTS;
            criteria.push(Criterion::Experience(employee.experience_years));
        } else {
            total += EXPERIENCE_PENALTY;
        }
    }

    let projects = employee
        .projects
        .iter()
        .map(|p| p.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let project_matches: Vec<String> = facets
        .projects
        .iter()
        .filter(|keyword| projects.contains(keyword.as_str()))
        .cloned()
        .collect();
    if !project_matches.is_empty() {
        total += PROJECT_POINTS * project_matches.len() as i32;
        criteria.push(Criterion::Projects(project_matches));
    }

    if facets.availability == Some(employee.availability) {
        total += AVAILABILITY_POINTS;
        criteria.push(Criterion::Availability(employee.availability));
    }

    if let Some(dept) = &facets.department
        && employee.department.to_lowercase().contains(dept.as_str())
    {
        total += DEPARTMENT_POINTS;
        criteria.push(Criterion::Department(employee.department.clone()));
    }

    if let Some(loc) = &facets.location
        && employee.location.to_lowercase().contains(loc.as_str())
    {
        total += LOCATION_POINTS;
        criteria.push(Criterion::Location(employee.location.clone()));
    }

    if query.contains(&employee.name.to_lowercase()) {
        total += NAME_POINTS;
        criteria.push(Criterion::Name);
    }

    let role = employee.role.to_lowercase();
    if role.contains(query) || query.contains(&role) {
        total += ROLE_POINTS;
        criteria.push(Criterion::Role(employee.role.clone()));
    }

    trace!(id = employee.id, score = total, "scored employee");
    ScoredResult {
        employee,
        relevance_score: total,
        matched_criteria: criteria,
    }
}
