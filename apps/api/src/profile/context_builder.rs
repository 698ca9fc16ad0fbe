//! Context Builder — flattens the whole profile graph into one text document
//! for the assistant's system directive.
//!
//! Output is a pure function of the loaded data: sections always appear in
//! the same order, records keep their source order, and absent optional
//! fields produce no line at all.

use crate::profile::models::{
    Certifications, EducationRecord, Position, Profile, ProfileData, Project, SkillCategory,
};

const SECTION_SEPARATOR: &str = "\n---\n";

/// Builds the full context document.
pub fn build_context(data: &ProfileData) -> String {
    [
        about_section(&data.profile),
        experience_section(&data.experience.positions),
        education_section(&data.experience.education),
        skills_section(&data.skills.categories),
        certifications_section(&data.certifications),
        projects_section(&data.projects.projects),
    ]
    .join(SECTION_SEPARATOR)
}

/// Context relevant to a visitor query. The profile is small enough that the
/// whole document is always returned; `_query` is not consulted.
pub fn relevant_context(data: &ProfileData, _query: &str) -> String {
    build_context(data)
}

fn about_section(p: &Profile) -> String {
    let mut lines = vec![format!("## About {}", p.name)];

    lines.push(match &p.nickname {
        Some(nickname) => format!("Name: {} ({nickname})", p.name),
        None => format!("Name: {}", p.name),
    });
    lines.push(match &p.subtitle {
        Some(subtitle) => format!("Title: {} - {subtitle}", p.title),
        None => format!("Title: {}", p.title),
    });
    lines.push(match &p.location.secondary {
        Some(secondary) => format!("Location: {} (also {secondary})", p.location.primary),
        None => format!("Location: {}", p.location.primary),
    });
    lines.push(match &p.contact.phone.secondary {
        Some(secondary) => format!("Phone: {} / {secondary}", p.contact.phone.primary),
        None => format!("Phone: {}", p.contact.phone.primary),
    });
    lines.push(format!("Email: {}", p.contact.email));
    lines.push(format!("LinkedIn: {}", p.contact.linkedin));
    lines.push(format!("GitHub: {}", p.contact.github));
    lines.push(format!("Portfolio: {}", p.contact.portfolio));
    lines.push(String::new());
    lines.push(format!("Years of Experience: {}+", p.years_of_experience));
    lines.push(format!("Total Certifications: {}+", p.certifications_count));
    lines.push(String::new());
    if let Some(tagline) = &p.tagline {
        lines.push(format!("Tagline: {tagline}"));
    }
    lines.push(format!("Summary: {}", p.summary));

    if !p.highlights.is_empty() {
        lines.push(String::new());
        lines.push("Key Highlights:".to_string());
        lines.extend(bullets(&p.highlights));
    }

    lines.join("\n")
}

fn experience_section(positions: &[Position]) -> String {
    let mut blocks = vec!["## Work Experience".to_string()];

    for pos in positions {
        let end = if pos.is_ongoing() {
            "Present"
        } else {
            pos.end_date.as_deref().unwrap_or("Present")
        };

        let mut lines = vec![
            format!("### {}", pos.company),
            format!("Role: {}", pos.role),
            format!("Location: {}", pos.location),
            format!("Period: {} to {end}", pos.start_date),
            format!("Type: {}", pos.level),
            String::new(),
            format!("Description: {}", pos.description),
        ];
        if !pos.achievements.is_empty() {
            lines.push(String::new());
            lines.push("Achievements:".to_string());
            lines.extend(bullets(&pos.achievements));
        }
        if !pos.technologies.is_empty() {
            lines.push(String::new());
            lines.push(format!("Technologies: {}", pos.technologies.join(", ")));
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

fn education_section(education: &[EducationRecord]) -> String {
    let mut blocks = vec!["## Education".to_string()];

    for edu in education {
        let mut lines = vec![
            format!("### {}", edu.institution),
            format!("Degree: {}", edu.degree),
        ];
        if let Some(minor) = &edu.minor {
            lines.push(format!("Minor: {minor}"));
        }
        lines.push(match &edu.end_date {
            Some(end) => format!("Period: {} to {end}", edu.start_date),
            None => format!("Period: {} to Present", edu.start_date),
        });
        if !edu.honors.is_empty() {
            lines.push(String::new());
            lines.push("Honors:".to_string());
            lines.extend(bullets(&edu.honors));
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

fn skills_section(categories: &[SkillCategory]) -> String {
    let mut blocks = vec!["## Technical Skills".to_string()];

    for category in categories {
        let mut lines = vec![format!("### {}", category.name)];
        for skill in &category.skills {
            let mut line = format!(
                "- {}: {}% proficiency ({}), {} years experience",
                skill.name,
                skill.level,
                skill.proficiency_label(),
                skill.years
            );
            if !skill.certifications.is_empty() {
                line.push_str(&format!(
                    " (Certifications: {})",
                    skill.certifications.join(", ")
                ));
            }
            lines.push(line);
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

fn certifications_section(certs: &Certifications) -> String {
    let mut blocks = vec![format!(
        "## Certifications ({}+ total)",
        certs.total_count
    )];

    if !certs.featured.is_empty() {
        blocks.push(format!("Featured: {}", certs.featured.join(", ")));
    }

    for category in &certs.categories {
        let mut lines = vec![format!("### {}", category.name)];
        lines.extend(
            category
                .certifications
                .iter()
                .map(|c| format!("- {} ({}, {})", c.name, c.issuer, c.year)),
        );
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

fn projects_section(projects: &[Project]) -> String {
    let mut blocks = vec!["## Notable Projects".to_string()];

    for p in projects {
        let mut lines = vec![
            format!("### {}", p.name),
            format!("Category: {}", p.category),
            format!("Year: {}", p.year),
            format!("Description: {}", p.description),
        ];
        if let Some(details) = &p.long_description {
            lines.push(format!("Details: {details}"));
        }
        if !p.technologies.is_empty() {
            lines.push(format!("Technologies: {}", p.technologies.join(", ")));
        }
        if let Some(github) = &p.github {
            lines.push(format!("GitHub: {github}"));
        }
        if let Some(demo) = &p.demo {
            lines.push(format!("Demo: {demo}"));
        }
        if p.featured {
            lines.push("(Featured Project)".to_string());
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

fn bullets(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items.iter().map(|item| format!("- {item}"))
}
