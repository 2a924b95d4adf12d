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

//! The in-memory employee roster searched by the engine.

use std::collections::HashSet;

use anyhow::Result;

use crate::model::Availability;
use crate::model::Employee;

#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Builds a roster from records, rejecting duplicate ids.
    pub fn new(employees: Vec<Employee>) -> Result<Self> {
        let mut seen = HashSet::new();
        for employee in &employees {
            if !seen.insert(employee.id) {
                anyhow::bail!("duplicate employee id {} ({})", employee.id, employee.name);
            }
        }
        Ok(Self { employees })
    }

    /// The compiled-in reference roster.
    pub fn builtin() -> Self {
        Self {
            employees: BUILTIN.iter().map(Seed::to_employee).collect(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}

struct Seed {
    id: u32,
    name: &'static str,
    skills: &'static [&'static str],
    experience_years: u32,
    projects: &'static [&'static str],
    availability: Availability,
    department: &'static str,
    role: &'static str,
    location: &'static str,
    email: &'static str,
}

impl Seed {
    fn to_employee(&self) -> Employee {
        Employee {
            id: self.id,
            name: self.name.to_string(),
            skills: self.skills.iter().map(|s| s.to_string()).collect(),
            experience_years: self.experience_years,
            projects: self.projects.iter().map(|s| s.to_string()).collect(),
            availability: self.availability,
            department: self.department.to_string(),
            role: self.role.to_string(),
            location: self.location.to_string(),
            email: self.email.to_string(),
        }
    }
}

const BUILTIN: &[Seed] = &[
    Seed {
        id: 1,
        name: "Alice Johnson",
        skills: &["Python", "React", "AWS", "PostgreSQL", "Docker"],
        experience_years: 5,
        projects: &["E-commerce Platform", "Healthcare Dashboard", "Data Analytics Tool"],
        availability: Availability::Available,
        department: "Engineering",
        role: "Full Stack Developer",
        location: "San Francisco, CA",
        email: "alice.johnson@company.com",
    },
    Seed {
        id: 2,
        name: "Bob Smith",
        skills: &["Java", "Spring Boot", "Kubernetes", "MongoDB", "React"],
        experience_years: 7,
        projects: &["Banking System", "Microservices Architecture", "API Gateway"],
        availability: Availability::Busy,
        department: "Engineering",
        role: "Senior Backend Developer",
        location: "New York, NY",
        email: "bob.smith@company.com",
    },
    Seed {
        id: 3,
        name: "Carol Davis",
        skills: &["React Native", "iOS", "Android", "Flutter", "Firebase"],
        experience_years: 4,
        projects: &["Mobile Banking App", "Healthcare Mobile Platform", "Fitness Tracker"],
        availability: Availability::Available,
        department: "Mobile Development",
        role: "Mobile Developer",
        location: "Austin, TX",
        email: "carol.davis@company.com",
    },
    Seed {
        id: 4,
        name: "David Wilson",
        skills: &["DevOps", "AWS", "Azure", "Terraform", "Jenkins", "Docker", "Kubernetes"],
        experience_years: 6,
        projects: &["Cloud Migration", "CI/CD Pipeline", "Infrastructure Automation"],
        availability: Availability::PartiallyAvailable,
        department: "DevOps",
        role: "DevOps Engineer",
        location: "Seattle, WA",
        email: "david.wilson@company.com",
    },
    Seed {
        id: 5,
        name: "Emily Brown",
        skills: &["UI/UX Design", "Figma", "Adobe Creative Suite", "Prototyping", "User Research"],
        experience_years: 3,
        projects: &["Design System", "Mobile App Redesign", "Website Overhaul"],
        availability: Availability::Available,
        department: "Design",
        role: "Senior UX Designer",
        location: "Los Angeles, CA",
        email: "emily.brown@company.com",
    },
    Seed {
        id: 6,
        name: "Frank Miller",
        skills: &["Python", "Machine Learning", "TensorFlow", "PyTorch", "Data Science"],
        experience_years: 8,
        projects: &["Recommendation Engine", "Fraud Detection System", "Predictive Analytics"],
        availability: Availability::Busy,
        department: "Data Science",
        role: "Senior Data Scientist",
        location: "Boston, MA",
        email: "frank.miller@company.com",
    },
    Seed {
        id: 7,
        name: "Grace Lee",
        skills: &["Node.js", "Express", "MongoDB", "GraphQL", "TypeScript"],
        experience_years: 4,
        projects: &["Real-time Chat System", "Content Management Platform", "API Development"],
        availability: Availability::Available,
        department: "Engineering",
        role: "Backend Developer",
        location: "Denver, CO",
        email: "grace.lee@company.com",
    },
    Seed {
        id: 8,
        name: "Henry Garcia",
        skills: &["React", "Vue.js", "TypeScript", "Sass", "Webpack"],
        experience_years: 5,
        projects: &["Admin Dashboard", "Customer Portal", "Progressive Web App"],
        availability: Availability::PartiallyAvailable,
        department: "Engineering",
        role: "Frontend Developer",
        location: "Miami, FL",
        email: "henry.garcia@company.com",
    },
    Seed {
        id: 9,
        name: "Isabella Rodriguez",
        skills: &["Cybersecurity", "Penetration Testing", "Network Security", "Risk Assessment"],
        experience_years: 6,
        projects: &["Security Audit", "Vulnerability Assessment", "Compliance Framework"],
        availability: Availability::Available,
        department: "Security",
        role: "Security Engineer",
        location: "Washington, DC",
        email: "isabella.rodriguez@company.com",
    },
    Seed {
        id: 10,
        name: "Jack Thompson",
        skills: &["Product Management", "Agile", "Roadmapping", "User Stories", "Analytics"],
        experience_years: 7,
        projects: &["Product Roadmap 2024", "Feature Prioritization", "Market Research"],
        availability: Availability::Busy,
        department: "Product",
        role: "Senior Product Manager",
        location: "San Francisco, CA",
        email: "jack.thompson@company.com",
    },
    Seed {
        id: 11,
        name: "Kate Anderson",
        skills: &["QA Testing", "Automation", "Selenium", "Jest", "Cypress"],
        experience_years: 4,
        projects: &["Test Automation Framework", "Quality Assurance Process", "Bug Tracking"],
        availability: Availability::Available,
        department: "QA",
        role: "QA Engineer",
        location: "Portland, OR",
        email: "kate.anderson@company.com",
    },
    Seed {
        id: 12,
        name: "Leo Martinez",
        skills: &["Golang", "Microservices", "gRPC", "Redis", "Elasticsearch"],
        experience_years: 5,
        projects: &["Search Engine", "Distributed System", "Performance Optimization"],
        availability: Availability::Available,
        department: "Engineering",
        role: "Backend Developer",
        location: "Chicago, IL",
        email: "leo.martinez@company.com",
    },
    Seed {
        id: 13,
        name: "Maya Patel",
        skills: &["PHP", "Laravel", "MySQL", "Vue.js", "Redis"],
        experience_years: 6,
        projects: &["E-commerce Platform", "CRM System", "Inventory Management"],
        availability: Availability::PartiallyAvailable,
        department: "Engineering",
        role: "Full Stack Developer",
        location: "Phoenix, AZ",
        email: "maya.patel@company.com",
    },
    Seed {
        id: 14,
        name: "Nathan White",
        skills: &["Swift", "iOS Development", "Core Data", "UIKit", "SwiftUI"],
        experience_years: 5,
        projects: &["iOS Banking App", "Health & Fitness App", "Social Media Platform"],
        availability: Availability::Busy,
        department: "Mobile Development",
        role: "iOS Developer",
        location: "San Jose, CA",
        email: "nathan.white@company.com",
    },
    Seed {
        id: 15,
        name: "Olivia Clark",
        skills: &["Business Analysis", "Requirements Gathering", "Process Improvement", "Stakeholder Management"],
        experience_years: 8,
        projects: &["Digital Transformation", "Process Automation", "System Requirements"],
        availability: Availability::Available,
        department: "Business Analysis",
        role: "Senior Business Analyst",
        location: "Atlanta, GA",
        email: "olivia.clark@company.com",
    },
    Seed {
        id: 16,
        name: "Paul Young",
        skills: &["C#", ".NET Core", "Azure", "SQL Server", "Entity Framework"],
        experience_years: 9,
        projects: &["Enterprise Software", "Cloud Migration", "Legacy System Modernization"],
        availability: Availability::Available,
        department: "Engineering",
        role: "Senior .NET Developer",
        location: "Dallas, TX",
        email: "paul.young@company.com",
    },
];
