use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseIdError;

/// Identifier of a course in the closed catalog.
///
/// The string form (`web-dev`, `data-science`, `ai`, `ui-ux`) is what appears
/// in route paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseId {
    WebDev,
    DataScience,
    Ai,
    UiUx,
}

impl CourseId {
    pub const ALL: [CourseId; 4] = [
        CourseId::WebDev,
        CourseId::DataScience,
        CourseId::Ai,
        CourseId::UiUx,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CourseId::WebDev => "web-dev",
            CourseId::DataScience => "data-science",
            CourseId::Ai => "ai",
            CourseId::UiUx => "ui-ux",
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseIdError::UnknownCourse(s.to_string()))
    }
}

/// Difficulty path chosen for a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseIdError::UnknownLevel(s.to_string()))
    }
}

/// Identifier of a dashboard topic / lesson.
///
/// Free-form: any path segment parses, and lookup against the catalog happens
/// when the lesson is opened.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TopicId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for TopicId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_ids_parse_their_own_display() {
        for id in CourseId::ALL {
            assert_eq!(id.to_string().parse::<CourseId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_course_is_rejected() {
        assert_eq!(
            "cooking".parse::<CourseId>(),
            Err(ParseIdError::UnknownCourse("cooking".into()))
        );
    }

    #[test]
    fn levels_are_lowercase_in_paths() {
        assert_eq!(Level::Intermediate.to_string(), "intermediate");
        assert_eq!("advanced".parse::<Level>(), Ok(Level::Advanced));
        assert!("Advanced".parse::<Level>().is_err());
    }

    #[test]
    fn topic_id_accepts_any_segment() {
        let id: TopicId = "html-basics".parse().unwrap();
        assert_eq!(id.as_str(), "html-basics");
    }
}
