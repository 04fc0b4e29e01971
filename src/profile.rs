//! The developer profile behind `about`, `skills`, and `contact`.
//!
//! Ships with built-in content so the binary works out of the box. A
//! ~/.folio/profile.json file overrides it; fields left out of the file
//! keep their built-in values.

use serde::{Deserialize, Serialize};

use crate::utils::persistence::load_json_or_default;

pub const PROFILE_FILE: &str = "profile.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    /// Short paragraphs for `about`, one entry per line.
    pub summary: Vec<String>,
    pub skills: Vec<SkillGroup>,
    pub contact: Vec<ContactLink>,
    /// Account whose public repos fill the projects gallery.
    pub github_login: String,
}

impl Profile {
    pub fn load() -> Self {
        load_json_or_default(PROFILE_FILE)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Sam Rivera".to_string(),
            title: "Systems & Tools Engineer".to_string(),
            location: "Lisbon, Portugal".to_string(),
            summary: strings(&[
                "I build command-line tools, network services and the",
                "occasional terminal game. Most of my day is Rust and Go,",
                "with a soft spot for software that runs quietly and fast.",
                "",
                "This portfolio is itself a terminal program. Poke around.",
            ]),
            skills: vec![
                SkillGroup {
                    label: "Languages".to_string(),
                    items: strings(&["Rust", "Go", "Python", "SQL"]),
                },
                SkillGroup {
                    label: "Systems".to_string(),
                    items: strings(&["Linux", "PostgreSQL", "Redis", "Docker"]),
                },
                SkillGroup {
                    label: "Practices".to_string(),
                    items: strings(&[
                        "TUI design",
                        "API design",
                        "Profiling",
                        "CI automation",
                    ]),
                },
            ],
            contact: vec![
                ContactLink {
                    label: "email".to_string(),
                    value: "sam@samrivera.dev".to_string(),
                },
                ContactLink {
                    label: "github".to_string(),
                    value: "github.com/octocat".to_string(),
                },
                ContactLink {
                    label: "site".to_string(),
                    value: "samrivera.dev".to_string(),
                },
            ],
            github_login: "octocat".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_complete() {
        let profile = Profile::default();
        assert!(!profile.name.is_empty());
        assert!(!profile.summary.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.contact.is_empty());
        assert!(!profile.github_login.is_empty());
    }

    #[test]
    fn test_partial_override_keeps_builtin_fields() {
        let profile: Profile = serde_json::from_str(r#"{"name": "Ada Lovelace"}"#).unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        // Everything else falls back to the built-in profile
        assert!(!profile.skills.is_empty());
        assert_eq!(profile.github_login, "octocat");
    }

    #[test]
    fn test_roundtrip_through_json() {
        let profile = Profile::default();
        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, profile.name);
        assert_eq!(back.skills.len(), profile.skills.len());
    }
}
