use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const BUNDLED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{entity} is missing a value for `{field}`")]
    EmptyField {
        entity: String,
        field: &'static str,
    },
    #[error("project title `{0}` is used more than once")]
    DuplicateProject(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Icon {
    Linkedin,
    Github,
    Shield,
    Mail,
    Coffee,
    Wallet,
    QrCode,
    Heart,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Linkedin => "in",
            Self::Github => "⌥",
            Self::Shield => "⛨",
            Self::Mail => "✉",
            Self::Coffee => "☕",
            Self::Wallet => "¤",
            Self::QrCode => "▦",
            Self::Heart => "♥",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub objective: String,
    pub image: String,
    pub resume: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Availability {
    pub status: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub time: String,
    pub location: String,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub tech: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Project {
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn gallery_label(&self) -> String {
        match self.images.len() {
            0 | 1 => "View Project".to_string(),
            count => format!("View {count} Images"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub period: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub year: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub year: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationKind {
    Qr,
    Link,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DonationOption {
    pub name: String,
    pub url: String,
    pub description: String,
    pub kind: DonationKind,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub availability: Availability,
    pub social_links: Vec<SocialLink>,
    pub highlights: Vec<Highlight>,
    pub skills: IndexMap<String, Vec<String>>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub donations: Vec<DonationOption>,
}

pub type SkillCategory<'a> = (&'a str, &'a [String]);

impl Content {
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let profile = &self.profile;
        for (field, value) in [
            ("name", &profile.name),
            ("role", &profile.role),
            ("email", &profile.email),
        ] {
            if value.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    entity: "profile".to_string(),
                    field,
                });
            }
        }

        let mut titles = HashSet::new();
        for project in &self.projects {
            if project.title.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    entity: "project".to_string(),
                    field: "title",
                });
            }
            if !titles.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateProject(project.title.clone()));
            }
        }

        for option in &self.donations {
            if option.url.trim().is_empty() {
                return Err(ContentError::EmptyField {
                    entity: format!("donation option `{}`", option.name),
                    field: "url",
                });
            }
        }

        Ok(())
    }

    pub fn gallery(&self) -> impl Iterator<Item = (usize, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .filter(|(_, project)| project.has_images())
    }

    pub fn image_counts(&self) -> Vec<usize> {
        self.projects.iter().map(|project| project.images.len()).collect()
    }

    pub fn skill_rows(&self) -> (Vec<SkillCategory<'_>>, Vec<SkillCategory<'_>>) {
        let categories: Vec<SkillCategory<'_>> = self
            .skills
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
            .collect();
        let (first, second) = split_rows(&categories);
        (first.to_vec(), second.to_vec())
    }
}

pub fn split_rows<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(icon: &str, name: &str) -> String {
        format!(
            r#"{{
                "profile": {{
                    "name": "{name}", "role": "Engineer", "location": "Earth",
                    "email": "a@b.c", "phone": "1", "objective": "Build",
                    "image": "/me.jpg", "resume": "/cv.pdf"
                }},
                "availability": {{ "status": "Open", "note": "" }},
                "social_links": [{{ "name": "X", "url": "https://x", "icon": "{icon}" }}],
                "highlights": [],
                "skills": {{}},
                "experience": [],
                "projects": []
            }}"#
        )
    }

    #[test]
    fn bundled_content_loads() {
        let content = Content::bundled().expect("bundled content should be valid");

        assert!(!content.profile.name.is_empty());
        assert_eq!(content.skills.len(), 12);
        assert_eq!(content.projects[2].images.len(), 3);
        assert!(content.donations.iter().any(|d| d.kind == DonationKind::Qr));
    }

    #[test]
    fn skills_keep_authored_order() {
        let content = Content::bundled().expect("bundled content should be valid");
        let names: Vec<&str> = content.skills.keys().map(String::as_str).collect();

        assert_eq!(names.first(), Some(&"Languages & Scripting"));
        assert_eq!(names.last(), Some(&"Networking & Protocols"));
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let result = Content::from_json(&minimal_json("Sparkles", "Ada"));
        assert!(matches!(result, Err(ContentError::Malformed(_))));
    }

    #[test]
    fn empty_profile_name_is_rejected() {
        let result = Content::from_json(&minimal_json("Github", "  "));
        assert!(matches!(
            result,
            Err(ContentError::EmptyField { field: "name", .. })
        ));
    }

    #[test]
    fn missing_optional_sections_default_to_empty() {
        let content =
            Content::from_json(&minimal_json("Mail", "Ada")).expect("minimal content is valid");

        assert!(content.donations.is_empty());
        assert!(content.education.is_empty());
        assert_eq!(content.social_links[0].icon, Icon::Mail);
    }

    #[test]
    fn duplicate_project_titles_are_rejected() {
        let mut content = Content::bundled().expect("bundled content should be valid");
        let copy = content.projects[0].clone();
        content.projects.push(copy);

        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateProject(title)) if title == "CallCraft"
        ));
    }

    #[test]
    fn gallery_skips_projects_without_images() {
        let content = Content::bundled().expect("bundled content should be valid");
        let indices: Vec<usize> = content.gallery().map(|(index, _)| index).collect();

        assert_eq!(indices, vec![0, 2, 3]);
        assert_eq!(content.projects.len(), 6);
    }

    #[test]
    fn gallery_label_counts_images() {
        let content = Content::bundled().expect("bundled content should be valid");

        assert_eq!(content.projects[3].gallery_label(), "View Project");
        assert_eq!(content.projects[2].gallery_label(), "View 3 Images");
    }

    #[test]
    fn split_rows_gives_extra_item_to_first_row() {
        let six = ["a", "b", "c", "d", "e", "f"];
        let (first, second) = split_rows(&six);
        assert_eq!((first.len(), second.len()), (3, 3));

        let five = ["a", "b", "c", "d", "e"];
        let (first, second) = split_rows(&five);
        assert_eq!((first.len(), second.len()), (3, 2));

        let empty: [&str; 0] = [];
        let (first, second) = split_rows(&empty);
        assert!(first.is_empty() && second.is_empty());
    }

    #[test]
    fn skill_rows_split_bundled_categories() {
        let content = Content::bundled().expect("bundled content should be valid");
        let (first, second) = content.skill_rows();

        assert_eq!(first.len(), 6);
        assert_eq!(second.len(), 6);
        assert_eq!(first[0].0, "Languages & Scripting");
        assert_eq!(first[5].0, "Web Servers & Proxies");
        assert_eq!(second[0].0, "Databases");
    }
}
