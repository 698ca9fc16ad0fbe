//! Reads the five static profile records from a data directory.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::profile::models::{Certifications, Experience, Profile, ProfileData, Projects, Skills};

pub const RESUME_FILE: &str = "resume.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const CERTIFICATIONS_FILE: &str = "certifications.json";
pub const PROJECTS_FILE: &str = "projects.json";

impl ProfileData {
    /// Loads and validates the whole profile graph. Called once at startup.
    pub fn load(dir: &Path) -> Result<Self> {
        let data = ProfileData {
            profile: read_record::<Profile>(dir, RESUME_FILE)?,
            experience: read_record::<Experience>(dir, EXPERIENCE_FILE)?,
            skills: read_record::<Skills>(dir, SKILLS_FILE)?,
            certifications: read_record::<Certifications>(dir, CERTIFICATIONS_FILE)?,
            projects: read_record::<Projects>(dir, PROJECTS_FILE)?,
        };

        data.validate()?;

        info!(
            positions = data.experience.positions.len(),
            education = data.experience.education.len(),
            skill_categories = data.skills.categories.len(),
            certification_categories = data.certifications.categories.len(),
            projects = data.projects.projects.len(),
            "Profile data loaded from {}",
            dir.display()
        );

        Ok(data)
    }

    fn validate(&self) -> Result<()> {
        for category in &self.skills.categories {
            for skill in &category.skills {
                if skill.level > 100 {
                    bail!(
                        "{SKILLS_FILE}: skill '{}' in '{}' has level {} (must be 0-100)",
                        skill.name,
                        category.name,
                        skill.level
                    );
                }
            }
        }
        Ok(())
    }
}

fn read_record<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read profile record {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Malformed profile record {}", path.display()))
}
