//! Career path model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named professional track whose course tags bias ranking
///
/// The set of tracks is closed; catalog courses reference them by slug in
/// their `careers` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CareerPath {
    /// Software engineering track
    SoftwareEngineer,
    /// Data science track
    DataScientist,
    /// AI research track
    AiResearcher,
    /// Security engineering track
    SecurityEngineer,
    /// Systems engineering track
    SystemsEngineer,
    /// Full-stack development track
    FullStackDeveloper,
}

impl CareerPath {
    /// All supported career paths, in display order
    pub const ALL: [Self; 6] = [
        Self::SoftwareEngineer,
        Self::DataScientist,
        Self::AiResearcher,
        Self::SecurityEngineer,
        Self::SystemsEngineer,
        Self::FullStackDeveloper,
    ];

    /// Stable slug used in catalog data and CLI arguments
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::SoftwareEngineer => "software-engineer",
            Self::DataScientist => "data-scientist",
            Self::AiResearcher => "ai-researcher",
            Self::SecurityEngineer => "security-engineer",
            Self::SystemsEngineer => "systems-engineer",
            Self::FullStackDeveloper => "full-stack-developer",
        }
    }

    /// Human-readable track name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SoftwareEngineer => "Software Engineer",
            Self::DataScientist => "Data Scientist",
            Self::AiResearcher => "AI Researcher",
            Self::SecurityEngineer => "Security Engineer",
            Self::SystemsEngineer => "Systems Engineer",
            Self::FullStackDeveloper => "Full-Stack Developer",
        }
    }

    /// Look up a career path by slug (case-insensitive)
    ///
    /// # Returns
    /// The matching career path, or `None` if the slug is unknown
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for CareerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
