//! Shared test data for the profile, chat and router tests.

use std::path::Path;

use crate::profile::loader::{
    CERTIFICATIONS_FILE, EXPERIENCE_FILE, PROJECTS_FILE, RESUME_FILE, SKILLS_FILE,
};
use crate::profile::models::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_profile_data() -> ProfileData {
    ProfileData {
        profile: Profile {
            name: "Ada Wanjiru".to_string(),
            nickname: Some("Ada".to_string()),
            title: "Senior Software Engineer".to_string(),
            subtitle: Some("Payments & Platform".to_string()),
            tagline: None,
            location: Location {
                primary: "Nairobi, Kenya".to_string(),
                secondary: Some("Atlanta, GA".to_string()),
            },
            contact: Contact {
                phone: PhoneNumbers {
                    primary: "+254 700 000 000".to_string(),
                    secondary: None,
                },
                email: "ada@example.com".to_string(),
                linkedin: "https://linkedin.com/in/ada".to_string(),
                github: "https://github.com/ada".to_string(),
                portfolio: "https://ada.example.com".to_string(),
            },
            years_of_experience: 9,
            certifications_count: 40,
            summary: "Engineer focused on billing systems.".to_string(),
            highlights: strings(&["Shipped a billing platform", "Mentored 12 engineers"]),
            key_facts: strings(&["Currently Team Lead at Solaris Grid"]),
        },
        experience: Experience {
            positions: vec![
                Position {
                    company: "Solaris Grid".to_string(),
                    role: "Team Lead".to_string(),
                    location: "Nairobi, Kenya".to_string(),
                    start_date: "2022-04".to_string(),
                    end_date: None,
                    current: true,
                    level: "Lead".to_string(),
                    description: "Leads the billing team.".to_string(),
                    achievements: strings(&["Cut invoice latency by 60%"]),
                    technologies: strings(&["Rust", "PostgreSQL"]),
                },
                Position {
                    company: "Harbor Telecom".to_string(),
                    role: "Senior Engineer".to_string(),
                    location: "Atlanta, GA".to_string(),
                    start_date: "2018-01".to_string(),
                    end_date: Some("2022-03".to_string()),
                    current: false,
                    level: "Senior".to_string(),
                    description: "Built carrier integrations.".to_string(),
                    achievements: strings(&["Integrated 5 carriers"]),
                    technologies: strings(&["Node.js", "Kafka"]),
                },
                Position {
                    company: "Lowell Labs".to_string(),
                    role: "Software Intern".to_string(),
                    location: "Lowell, MA".to_string(),
                    start_date: "2015-06".to_string(),
                    end_date: Some("2015-08".to_string()),
                    current: false,
                    level: "Intern".to_string(),
                    description: "Summer internship.".to_string(),
                    achievements: vec![],
                    technologies: strings(&["Python"]),
                },
            ],
            education: vec![EducationRecord {
                institution: "UMass Lowell".to_string(),
                degree: "B.Sc. Computer Science".to_string(),
                minor: Some("Mathematics".to_string()),
                start_date: "2013-09".to_string(),
                end_date: Some("2016-05".to_string()),
                honors: strings(&["Dean's List"]),
            }],
        },
        skills: Skills {
            categories: vec![
                SkillCategory {
                    name: "Backend".to_string(),
                    skills: vec![
                        Skill {
                            name: "Rust".to_string(),
                            level: 92,
                            years: 5.0,
                            certifications: vec![],
                        },
                        Skill {
                            name: "PostgreSQL".to_string(),
                            level: 80,
                            years: 7.5,
                            certifications: strings(&["PostgreSQL Associate"]),
                        },
                    ],
                },
                SkillCategory {
                    name: "Cloud".to_string(),
                    skills: vec![Skill {
                        name: "AWS".to_string(),
                        level: 70,
                        years: 4.0,
                        certifications: strings(&["AWS Solutions Architect"]),
                    }],
                },
            ],
            radar_data: vec![RadarPoint {
                skill: "Backend".to_string(),
                value: 90,
            }],
        },
        certifications: Certifications {
            total_count: 40,
            featured: strings(&["AWS Solutions Architect"]),
            categories: vec![
                CertificationCategory {
                    name: "Cloud".to_string(),
                    certifications: vec![Certification {
                        name: "AWS Solutions Architect".to_string(),
                        issuer: "Amazon".to_string(),
                        year: 2021,
                    }],
                },
                CertificationCategory {
                    name: "Data".to_string(),
                    certifications: vec![Certification {
                        name: "PostgreSQL Associate".to_string(),
                        issuer: "EDB".to_string(),
                        year: 2019,
                    }],
                },
            ],
        },
        projects: Projects {
            categories: strings(&["Fintech", "Tooling"]),
            projects: vec![
                Project {
                    name: "Metered Billing Engine".to_string(),
                    category: "Fintech".to_string(),
                    year: 2023,
                    description: "Usage-based billing for solar customers.".to_string(),
                    long_description: Some("Processes 2M meter readings a day.".to_string()),
                    technologies: strings(&["Rust", "Kafka"]),
                    github: Some("https://github.com/ada/billing".to_string()),
                    demo: Some("https://billing.example.com".to_string()),
                    featured: true,
                },
                Project {
                    name: "Schema Linter".to_string(),
                    category: "Tooling".to_string(),
                    year: 2020,
                    description: "Lints SQL migrations.".to_string(),
                    long_description: None,
                    technologies: strings(&["Python"]),
                    github: None,
                    demo: None,
                    featured: false,
                },
            ],
        },
    }
}

/// Writes `data` as the five JSON records the loader expects.
pub fn write_profile_dir(dir: &Path, data: &ProfileData) {
    let write = |file: &str, json: String| std::fs::write(dir.join(file), json).unwrap();
    write(RESUME_FILE, serde_json::to_string(&data.profile).unwrap());
    write(EXPERIENCE_FILE, serde_json::to_string(&data.experience).unwrap());
    write(SKILLS_FILE, serde_json::to_string(&data.skills).unwrap());
    write(
        CERTIFICATIONS_FILE,
        serde_json::to_string(&data.certifications).unwrap(),
    );
    write(PROJECTS_FILE, serde_json::to_string(&data.projects).unwrap());
}
