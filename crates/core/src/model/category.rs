use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

/// One of the four skill dimensions that partition the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Communication,
    Leadership,
    #[serde(rename = "Stress Management")]
    StressManagement,
    Teamwork,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Communication,
        Category::Leadership,
        Category::StressManagement,
        Category::Teamwork,
    ];

    /// Human-readable label, also used as the persisted key.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Communication => "Communication",
            Category::Leadership => "Leadership",
            Category::StressManagement => "Stress Management",
            Category::Teamwork => "Teamwork",
        }
    }

    /// Composite-score coefficient expressed in tenths (1.2 -> 12).
    ///
    /// Kept integral so the composite is exact before rounding.
    #[must_use]
    pub fn coefficient_tenths(self) -> u32 {
        match self {
            Category::Communication => 12,
            Category::Leadership => 15,
            Category::StressManagement => 11,
            Category::Teamwork => 13,
        }
    }

    /// Composite-score coefficient.
    #[must_use]
    pub fn coefficient(self) -> f64 {
        f64::from(self.coefficient_tenths()) / 10.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Per-category integer totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(rename = "Communication")]
    communication: u32,
    #[serde(rename = "Leadership")]
    leadership: u32,
    #[serde(rename = "Stress Management")]
    stress_management: u32,
    #[serde(rename = "Teamwork")]
    teamwork: u32,
}

impl CategoryScores {
    #[must_use]
    pub fn new(communication: u32, leadership: u32, stress_management: u32, teamwork: u32) -> Self {
        Self {
            communication,
            leadership,
            stress_management,
            teamwork,
        }
    }

    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Communication => self.communication,
            Category::Leadership => self.leadership,
            Category::StressManagement => self.stress_management,
            Category::Teamwork => self.teamwork,
        }
    }

    pub fn add(&mut self, category: Category, amount: u32) {
        let slot = match category {
            Category::Communication => &mut self.communication,
            Category::Leadership => &mut self.leadership,
            Category::StressManagement => &mut self.stress_management,
            Category::Teamwork => &mut self.teamwork,
        };
        *slot = slot.saturating_add(amount);
    }

    /// Sum across all four categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        Category::ALL.into_iter().map(|c| self.get(c)).sum()
    }

    /// Iterate `(category, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_including_spaced_name() {
        assert_eq!("Stress Management".parse::<Category>(), Ok(Category::StressManagement));
        assert_eq!("Teamwork".parse::<Category>(), Ok(Category::Teamwork));
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "Creativity".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("Creativity".into()));
    }

    #[test]
    fn coefficients_match_composite_formula() {
        assert!((Category::Communication.coefficient() - 1.2).abs() < f64::EPSILON);
        assert!((Category::Leadership.coefficient() - 1.5).abs() < f64::EPSILON);
        assert!((Category::StressManagement.coefficient() - 1.1).abs() < f64::EPSILON);
        assert!((Category::Teamwork.coefficient() - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn scores_serialize_with_label_keys() {
        let scores = CategoryScores::new(39, 36, 39, 36);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["Stress Management"], 39);
        assert_eq!(json["Leadership"], 36);
        assert_eq!(scores.total(), 150);
    }
}
