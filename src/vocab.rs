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

//! Ordered keyword tables consulted by the facet extractor.
//!
//! Order matters: skills and project domains are reported in table order,
//! while departments and locations resolve to the first entry that matches.

pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "spring",
    "django",
    "flask",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "tensorflow",
    "pytorch",
    "machine learning",
    "data science",
    "devops",
    "ci/cd",
    "terraform",
    "jenkins",
    "ios",
    "android",
    "swift",
    "kotlin",
    "react native",
    "flutter",
    "figma",
    "ui/ux",
    "design",
    "testing",
    "qa",
    "selenium",
    "cypress",
    "golang",
    "go",
    "php",
    "laravel",
    "c#",
    ".net",
    "core",
    "entity framework",
    "graphql",
    "typescript",
    "sass",
    "webpack",
    "microservices",
    "grpc",
    "cybersecurity",
    "penetration testing",
    "network security",
];

pub const PROJECT_KEYWORDS: &[&str] = &[
    "healthcare",
    "banking",
    "e-commerce",
    "ecommerce",
    "fintech",
    "mobile",
    "web",
    "api",
    "dashboard",
    "platform",
    "system",
    "application",
    "app",
];

/// Canonical department name and the query words that select it.
pub const DEPARTMENT_KEYWORDS: &[(&str, &[&str])] = &[
    ("engineering", &["engineering", "developer", "development"]),
    ("design", &["design", "designer", "ux", "ui"]),
    ("product", &["product", "pm", "product manager"]),
    (
        "data science",
        &["data science", "data scientist", "machine learning", "ml"],
    ),
    ("devops", &["devops", "infrastructure"]),
    ("qa", &["qa", "quality assurance", "testing", "tester"]),
    ("security", &["security", "cybersecurity"]),
    ("mobile development", &["mobile", "ios", "android"]),
    (
        "business analysis",
        &["business analyst", "ba", "business analysis"],
    ),
];

pub const LOCATION_KEYWORDS: &[&str] = &[
    "san francisco",
    "new york",
    "austin",
    "seattle",
    "los angeles",
    "boston",
    "denver",
    "miami",
    "washington",
    "portland",
    "chicago",
    "phoenix",
    "san jose",
    "atlanta",
    "dallas",
    "remote",
];
