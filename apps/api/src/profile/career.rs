//! Career trajectory — one point per calendar year with the highest career
//! level held that year. Feeds the career chart on the front end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::models::ProfileData;

pub const LEVEL_LABELS: [&str; 6] = ["Education", "Intern", "Engineer", "Senior", "Lead", "Director"];

/// Level assigned to positions whose label is not recognised.
const DEFAULT_LEVEL: u8 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPoint {
    pub year: i32,
    pub level: u8,
    pub label: String,
    pub organization: String,
    pub role: String,
}

pub fn level_rank(label: &str) -> u8 {
    LEVEL_LABELS
        .iter()
        .position(|l| l.eq_ignore_ascii_case(label.trim()))
        .map(|i| i as u8)
        .unwrap_or(DEFAULT_LEVEL)
}

/// Builds the trajectory. Ongoing positions run through `current_year`.
///
/// Education contributes first (level 0), then positions oldest-first; a
/// later contributor replaces a year only with a strictly higher level.
pub fn career_trajectory(data: &ProfileData, current_year: i32) -> Vec<CareerPoint> {
    let mut by_year: BTreeMap<i32, CareerPoint> = BTreeMap::new();

    let mut offer = |year: i32, level: u8, organization: &str, role: &str| {
        let replace = by_year.get(&year).map_or(true, |p| p.level < level);
        if replace {
            by_year.insert(
                year,
                CareerPoint {
                    year,
                    level,
                    label: LEVEL_LABELS[level as usize].to_string(),
                    organization: organization.to_string(),
                    role: role.to_string(),
                },
            );
        }
    };

    for edu in &data.experience.education {
        let Some(start) = leading_year(&edu.start_date) else {
            continue;
        };
        let end = edu
            .end_date
            .as_deref()
            .and_then(leading_year)
            .unwrap_or(current_year);
        for year in start..=end {
            offer(year, 0, &edu.institution, &edu.degree);
        }
    }

    // Source order is most-recent-first.
    for pos in data.experience.positions.iter().rev() {
        let Some(start) = leading_year(&pos.start_date) else {
            continue;
        };
        let end = if pos.is_ongoing() {
            current_year
        } else {
            pos.end_date
                .as_deref()
                .and_then(leading_year)
                .unwrap_or(current_year)
        };
        let level = level_rank(&pos.level);
        for year in start..=end {
            offer(year, level, &pos.company, &pos.role);
        }
    }

    by_year.into_values().collect()
}

/// Parses the `YYYY` prefix of dates such as `2021`, `2021-03` or `2021-03-01`.
fn leading_year(date: &str) -> Option<i32> {
    date.trim().split('-').next()?.parse().ok()
}
