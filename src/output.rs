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

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use crate::model::Employee;
use crate::model::ScoredResult;
use crate::model::SearchFacets;

#[derive(Debug, Clone, Serialize, Default)]
pub struct StatsOut {
    pub took_ms: i64,
    pub total_hits: i64,
    pub roster_size: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryOut {
    pub text: String,
    pub style: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorOut {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct JsonResponse {
    pub ok: bool,
    pub schema_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsOut>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorOut>,
}

impl JsonResponse {
    pub fn ok() -> Self {
        Self {
            ok: true,
            schema_version: "1".to_string(),
            ..Default::default()
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            ok: false,
            schema_version: "1".to_string(),
            error: Some(ErrorOut {
                code: code.to_string(),
                message: message.to_string(),
            }),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, text: &str, style: &str) -> Self {
        self.query = Some(QueryOut {
            text: text.to_string(),
            style: style.to_string(),
        });
        self
    }

    pub fn with_response(mut self, response: String) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_results(mut self, results: Vec<Value>) -> Self {
        self.results = Some(results);
        self
    }

    pub fn with_facets(mut self, facets: &SearchFacets) -> Self {
        self.facets = Some(json!(facets));
        self
    }

    pub fn with_employees(mut self, employees: Vec<Value>) -> Self {
        self.employees = Some(employees);
        self
    }

    pub fn with_samples(mut self, samples: Vec<String>) -> Self {
        self.samples = Some(samples);
        self
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_stats(mut self, stats: StatsOut) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

pub fn print_json(resp: &JsonResponse) -> Result<()> {
    let text = serde_json::to_string_pretty(resp)?;
    println!("{text}");
    Ok(())
}

pub fn employee_json(employee: &Employee) -> Value {
    json!(employee)
}

pub fn result_json(result: &ScoredResult<'_>) -> Value {
    json!({
        "score": result.relevance_score,
        "criteria": result.matched_criteria,
        "employee": result.employee,
    })
}

/// Plain-text rendering of one employee card. Search hits also carry their
/// matched criteria and score.
pub fn render_card(employee: &Employee, hit: Option<&ScoredResult<'_>>) -> String {
    let mut lines = vec![
        format!(
            "[{}] {}, {} ({})",
            employee.initials(),
            employee.name,
            employee.role,
            employee.availability.label()
        ),
        format!(
            "    {} | {} years exp.",
            employee.department, employee.experience_years
        ),
        format!("    Skills: {}", employee.skills.join(", ")),
    ];
    if !employee.projects.is_empty() {
        let recent: Vec<&str> = employee.projects.iter().take(3).map(String::as_str).collect();
        lines.push(format!("    Recent projects: {}", recent.join("; ")));
    }
    lines.push(format!("    {} | {}", employee.location, employee.email));
    if let Some(hit) = hit {
        if !hit.matched_criteria.is_empty() {
            lines.push(format!("    Why: {}", hit.criteria_lines().join("; ")));
        }
        lines.push(format!("    Relevance score: {}", hit.relevance_score));
    }
    lines.join("\n")
}

/// Cards for a result list, capped at `limit` (0 means no cap).
pub fn render_results(results: &[ScoredResult<'_>], limit: usize) -> String {
    if results.is_empty() {
        return String::new();
    }
    let shown = if limit == 0 {
        results.len()
    } else {
        limit.min(results.len())
    };
    let mut blocks = vec![format!("Found {} employee(s)", results.len())];
    for result in &results[..shown] {
        blocks.push(render_card(result.employee, Some(result)));
    }
    if results.len() > shown {
        blocks.push(format!("And {} more results...", results.len() - shown));
    }
    blocks.join("\n\n")
}

pub fn render_facets(facets: &SearchFacets) -> String {
    fn list(items: &[String]) -> String {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    }
    fn opt(value: Option<String>) -> String {
        value.unwrap_or_else(|| "-".to_string())
    }

    [
        format!("skills: {}", list(&facets.skills)),
        format!("min_experience: {}", opt(facets.min_experience.map(|y| y.to_string()))),
        format!("projects: {}", list(&facets.projects)),
        format!(
            "availability: {}",
            opt(facets.availability.map(|a| a.as_str().to_string()))
        ),
        format!("department: {}", opt(facets.department.clone())),
        format!("location: {}", opt(facets.location.clone())),
    ]
    .join("\n")
}
