//! Site Content
//!
//! Everything the page displays, as one typed document.
//! The document is TOML embedded at build time and validated on load.

use serde::{Deserialize, Serialize};

use crate::carousel::{ProjectCarousel, WINDOW_SIZE};
use crate::error::{CarouselError, ContentError, RotationError};
use crate::rotator::TitleRotation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub tagline: String,
    pub summary: String,
    pub email: String,
    pub github: String,
    /// Path of the downloadable résumé, served as a static asset
    pub resume_path: String,
}

/// One showcase card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,
    pub achievement: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_accent")]
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub details: String,
    pub period: String,
    #[serde(default = "default_accent")]
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    #[serde(default = "default_accent")]
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
    #[serde(default = "default_accent")]
    pub accent: String,
}

/// Leadership / activity highlight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub icon: String,
    pub title: String,
    pub value: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

fn default_accent() -> String {
    "blue".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub titles: Vec<String>,
    pub projects: Vec<ProjectCard>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub leadership: Vec<Highlight>,
    #[serde(default)]
    pub contact_channels: Vec<ContactChannel>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl SiteContent {
    /// Parse and validate a content document
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::invalid("profile name is empty"));
        }
        if self.titles.is_empty() {
            return Err(ContentError::invalid("at least one title is required"));
        }
        if self.projects.len() < WINDOW_SIZE {
            return Err(ContentError::invalid(format!(
                "at least {} projects are required, found {}",
                WINDOW_SIZE,
                self.projects.len()
            )));
        }
        Ok(())
    }

    pub fn title_rotation(&self) -> Result<TitleRotation, RotationError> {
        TitleRotation::new(self.titles.clone())
    }

    pub fn project_carousel(&self) -> Result<ProjectCarousel<ProjectCard>, CarouselError> {
        ProjectCarousel::new(self.projects.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED: &str = include_str!("../../../content/site.toml");

    const MINIMAL: &str = r#"
titles = ["Builder"]

[profile]
name = "Sam"
initials = "S"
tagline = "t"
summary = "s"
email = "sam@example.com"
github = "https://github.com/sam"
resume_path = "/resume.pdf"

[[projects]]
title = "A"
subtitle = "a"
description = "d"
tags = ["x"]
achievement = "n"

[[projects]]
title = "B"
subtitle = "b"
description = "d"
tags = []
achievement = "n"
"#;

    #[test]
    fn test_shipped_content_loads() {
        let content = SiteContent::from_toml(SHIPPED).expect("shipped content should be valid");
        assert_eq!(content.titles.len(), 3);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.education.len(), 2);
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.profile.resume_path, "/resume.pdf");
    }

    #[test]
    fn test_shipped_content_builds_controllers() {
        let content = SiteContent::from_toml(SHIPPED).unwrap();
        let carousel = content.project_carousel().unwrap();
        assert_eq!(carousel.len(), 4);
        let rotation = content.title_rotation().unwrap();
        assert_eq!(rotation.current(), content.titles[0]);
    }

    #[test]
    fn test_too_few_projects_rejected() {
        let err = SiteContent::from_toml(MINIMAL).unwrap_err();
        assert!(matches!(err, ContentError::Invalid { .. }));
        assert!(err.to_string().contains("at least 3 projects"));
    }

    #[test]
    fn test_defaults_fill_optional_sections() {
        let source = format!(
            "{}\n[[projects]]\ntitle = \"C\"\nsubtitle = \"c\"\ndescription = \"d\"\ntags = []\nachievement = \"n\"\n",
            MINIMAL
        );
        let content = SiteContent::from_toml(&source).unwrap();
        assert!(content.education.is_empty());
        assert_eq!(content.projects[0].accent, "blue");
        assert_eq!(content.projects[0].icon, "");
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = SiteContent::from_toml("titles = [").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
