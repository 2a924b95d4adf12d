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

//! Reply text for a ranked result set.
//!
//! Two interchangeable strategies exist: a narrative one that walks through
//! the top candidates, and a terse one that lists them one per line. Callers
//! pick one through [`ResponseStyle`].

use anyhow::Result;

use crate::config::Config;
use crate::model::ScoredResult;

pub const NO_RESULTS: &str = "I couldn't find any employees matching your criteria. Try adjusting your search terms or requirements.";
pub const REFINE_PROMPT: &str = "Would you like me to provide more details about any of these candidates or help you refine your search criteria?";

pub const STYLE_VERBOSE: &str = "verbose";
pub const STYLE_TERSE: &str = "terse";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResponseStyle {
    #[default]
    Verbose,
    Terse,
}

impl ResponseStyle {
    pub fn as_label(self) -> &'static str {
        match self {
            ResponseStyle::Verbose => STYLE_VERBOSE,
            ResponseStyle::Terse => STYLE_TERSE,
        }
    }
}

pub fn resolve_style(config: &Config) -> Result<ResponseStyle> {
    let name = config.response_style.trim().to_lowercase();
    match name.as_str() {
        STYLE_VERBOSE => Ok(ResponseStyle::Verbose),
        STYLE_TERSE => Ok(ResponseStyle::Terse),
        _ => anyhow::bail!(
            "unsupported response_style '{}'; supported: {} or {}",
            config.response_style,
            STYLE_VERBOSE,
            STYLE_TERSE
        ),
    }
}

pub fn build_responder(style: ResponseStyle) -> Box<dyn Responder> {
    match style {
        ResponseStyle::Verbose => Box::new(VerboseResponder::default()),
        ResponseStyle::Terse => Box::new(TerseResponder::default()),
    }
}

pub trait Responder {
    fn respond(&self, results: &[ScoredResult<'_>], query: &str) -> String;
}

/// Narrates the first `narrated` candidates.
#[derive(Debug, Clone)]
pub struct VerboseResponder {
    pub narrated: usize,
}

impl Default for VerboseResponder {
    fn default() -> Self {
        Self { narrated: 3 }
    }
}

impl Responder for VerboseResponder {
    fn respond(&self, results: &[ScoredResult<'_>], query: &str) -> String {
        if results.is_empty() {
            return NO_RESULTS.to_string();
        }

        let mut out = format!(
            "Based on your query \"{query}\", I found {} candidate(s):\n\n",
            results.len()
        );
        for (idx, result) in results.iter().take(self.narrated).enumerate() {
            let emp = result.employee;
            let strength = if idx == 0 { "an excellent" } else { "a strong" };
            out.push_str(&format!(
                "**{}** would be {strength} candidate for this role. ",
                emp.name
            ));
            out.push_str(&format!(
                "With {} years of experience as a {}, ",
                emp.experience_years, emp.role
            ));
            if let Some(skills) = result.matched_skills() {
                out.push_str(&format!("they bring expertise in {}. ", skills.join(", ")));
            }
            if let Some(projects) = result.matched_projects() {
                out.push_str(&format!(
                    "Their experience includes {} projects. ",
                    projects.join(", ")
                ));
            } else if let Some(first) = emp.projects.first() {
                let second = emp.projects.get(1).unwrap_or(first);
                out.push_str(&format!(
                    "Notable projects include \"{first}\" and \"{second}\". "
                ));
            }
            out.push_str(&format!(
                "They are {} and located in {}.\n\n",
                emp.availability.describe(),
                emp.location
            ));
        }

        if results.len() > self.narrated {
            out.push_str(&format!(
                "I also found {} additional candidate(s) that may be suitable. ",
                results.len() - self.narrated
            ));
        }
        out.push_str(REFINE_PROMPT);
        out
    }
}

/// Lists the first `listed` candidates, one line each.
#[derive(Debug, Clone)]
pub struct TerseResponder {
    pub listed: usize,
}

impl Default for TerseResponder {
    fn default() -> Self {
        Self { listed: 5 }
    }
}

impl Responder for TerseResponder {
    fn respond(&self, results: &[ScoredResult<'_>], query: &str) -> String {
        if results.is_empty() {
            return NO_RESULTS.to_string();
        }

        let mut out = format!(
            "I found {} employee(s) matching \"{query}\".\n\n",
            results.len()
        );
        for (idx, result) in results.iter().take(self.listed).enumerate() {
            let emp = result.employee;
            out.push_str(&format!(
                "{}. **{}**, {} ({} years, {}, {})\n",
                idx + 1,
                emp.name,
                emp.role,
                emp.experience_years,
                emp.availability.label(),
                emp.location
            ));
        }
        if results.len() > self.listed {
            out.push_str(&format!(
                "...and {} more candidate(s).\n",
                results.len() - self.listed
            ));
        }
        out.push('\n');
        out.push_str(REFINE_PROMPT);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchEngine;

    #[test]
    fn empty_results_share_apology() {
        for style in [ResponseStyle::Verbose, ResponseStyle::Terse] {
            assert_eq!(build_responder(style).respond(&[], "zzzzz"), NO_RESULTS);
        }
    }

    #[test]
    fn verbose_narrates_top_three() {
        let engine = SearchEngine::default();
        let results = engine.search_employees("Find developers who know both AWS and Docker");
        assert_eq!(results.len(), 8);
        let text = VerboseResponder::default().respond(&results, "AWS and Docker");

        assert!(text.starts_with("Based on your query \"AWS and Docker\", I found 8 candidate(s):\n\n"));
        assert!(text.contains(
            "**Alice Johnson** would be an excellent candidate for this role. \
             With 5 years of experience as a Full Stack Developer, \
             they bring expertise in aws, docker. "
        ));
        assert!(text.contains("**David Wilson** would be a strong candidate"));
        // No project criterion, so the first two projects are quoted.
        assert!(text.contains(
            "Notable projects include \"Banking System\" and \"Microservices Architecture\". "
        ));
        assert!(text.contains("They are partially available and located in Seattle, WA.\n\n"));
        assert!(!text.contains("Grace Lee"));
        assert!(text.ends_with(&format!(
            "I also found 5 additional candidate(s) that may be suitable. {REFINE_PROMPT}"
        )));
    }

    #[test]
    fn terse_lists_top_five() {
        let engine = SearchEngine::default();
        let results = engine.search_employees("Find developers who know both AWS and Docker");
        let text = TerseResponder::default().respond(&results, "aws docker");

        assert!(text.starts_with("I found 8 employee(s) matching \"aws docker\".\n\n"));
        assert!(text.contains(
            "1. **Alice Johnson**, Full Stack Developer (5 years, Available, San Francisco, CA)\n"
        ));
        assert!(text.contains("5. **Henry Garcia**"));
        assert!(!text.contains("6. "));
        assert!(text.ends_with(&format!("...and 3 more candidate(s).\n\n{REFINE_PROMPT}")));
    }

    #[test]
    fn cli_names_match_config_names() {
        use clap::ValueEnum;

        for style in ResponseStyle::value_variants() {
            let value = style.to_possible_value().expect("possible value");
            assert_eq!(value.get_name(), style.as_label());
            let config = Config {
                response_style: style.as_label().to_string(),
                ..Config::default()
            };
            assert_eq!(resolve_style(&config).expect("resolve"), *style);
        }
    }

    #[test]
    fn resolve_style_rejects_unknown() {
        let mut config = Config::default();
        assert_eq!(resolve_style(&config).expect("default"), ResponseStyle::Verbose);
        config.response_style = " Terse ".to_string();
        assert_eq!(resolve_style(&config).expect("terse"), ResponseStyle::Terse);
        config.response_style = "chatty".to_string();
        let err = resolve_style(&config).unwrap_err();
        assert!(err.to_string().contains("unsupported response_style 'chatty'"));
    }
}
