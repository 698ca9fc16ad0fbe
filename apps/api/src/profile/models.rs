use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// resume.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumbers {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub phone: PhoneNumbers,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

/// Identity and headline numbers for the person the site presents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub location: Location,
    pub contact: Contact,
    pub years_of_experience: u32,
    pub certifications_count: u32,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Short facts restated in the assistant preamble.
    #[serde(default)]
    pub key_facts: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// experience.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: String,
    /// `None` = ongoing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    /// Career level label: Intern, Engineer, Senior, Lead or Director.
    #[serde(rename = "type")]
    pub level: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Position {
    pub fn is_ongoing(&self) -> bool {
        self.current || self.end_date.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub institution: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub honors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub positions: Vec<Position>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// skills.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 0 – 100.
    pub level: u8,
    pub years: f32,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Skill {
    pub fn proficiency_label(&self) -> &'static str {
        proficiency_label(self.level)
    }
}

/// Buckets a 0 – 100 proficiency percentage into the label shown on the site.
pub fn proficiency_label(level: u8) -> &'static str {
    match level {
        90..=u8::MAX => "Expert",
        75..=89 => "Advanced",
        60..=74 => "Proficient",
        _ => "Intermediate",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// One axis of the skills radar. Curated separately from the categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub skill: String,
    pub value: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    #[serde(default)]
    pub radar_data: Vec<RadarPoint>,
}

// ────────────────────────────────────────────────────────────────────────────
// certifications.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationCategory {
    pub name: String,
    pub certifications: Vec<Certification>,
}

/// `total_count` and `featured` are curated by hand and are not derived
/// from `categories`. Do not reconcile them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certifications {
    pub total_count: u32,
    #[serde(default)]
    pub featured: Vec<String>,
    #[serde(default)]
    pub categories: Vec<CertificationCategory>,
}

// ────────────────────────────────────────────────────────────────────────────
// projects.json
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub category: String,
    pub year: u16,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projects {
    #[serde(default)]
    pub categories: Vec<String>,
    pub projects: Vec<Project>,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregate
// ────────────────────────────────────────────────────────────────────────────

/// The whole profile graph. Loaded once at startup and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub profile: Profile,
    pub experience: Experience,
    pub skills: Skills,
    pub certifications: Certifications,
    pub projects: Projects,
}
