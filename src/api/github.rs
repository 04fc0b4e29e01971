//! GitHub repository listing for the projects gallery.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

use crate::api::{cache, DataSource};
use crate::constants::{HTTP_TIMEOUT_SECS, PROJECTS_TTL_SECS, USER_AGENT};

const CACHE_NAME: &str = "projects";

/// A repository as shown in the gallery, already flattened for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
    pub forks: u32,
    pub url: String,
    /// Last push date, `YYYY-MM-DD`.
    pub updated: String,
}

#[derive(Debug, Deserialize)]
struct RepoDto {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    stargazers_count: u32,
    #[serde(default)]
    forks_count: u32,
    html_url: String,
    #[serde(default)]
    updated_at: String,
    #[serde(default)]
    fork: bool,
}

impl From<RepoDto> for Project {
    fn from(dto: RepoDto) -> Self {
        let updated = dto
            .updated_at
            .split('T')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            name: dto.name,
            description: dto
                .description
                .unwrap_or_else(|| "No description".to_string()),
            language: dto.language.unwrap_or_else(|| "n/a".to_string()),
            stars: dto.stargazers_count,
            forks: dto.forks_count,
            url: dto.html_url,
            updated,
        }
    }
}

/// Turn the raw repo list into the gallery list: forks dropped, starred
/// repos first.
fn shape(dtos: Vec<RepoDto>) -> Vec<Project> {
    let mut projects: Vec<Project> = dtos
        .into_iter()
        .filter(|dto| !dto.fork)
        .map(Project::from)
        .collect();
    projects.sort_by(|a, b| b.stars.cmp(&a.stars));
    projects
}

fn fetch(login: &str) -> Result<Vec<Project>, Box<dyn Error>> {
    let url = format!("https://api.github.com/users/{login}/repos?per_page=100&sort=updated");
    let dtos: Vec<RepoDto> = ureq::get(&url)
        .set("User-Agent", USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .call()?
        .into_json()?;
    Ok(shape(dtos))
}

/// Load the project list for the gallery.
pub fn load_projects(login: &str, offline: bool, force_refresh: bool) -> (Vec<Project>, DataSource) {
    if !force_refresh {
        if let Some(projects) = cache::load_fresh::<Vec<Project>>(CACHE_NAME, PROJECTS_TTL_SECS) {
            return (projects, DataSource::Cached);
        }
    }
    if !offline {
        if let Ok(projects) = fetch(login) {
            let _ = cache::store(CACHE_NAME, &projects);
            return (projects, DataSource::Live);
        }
    }
    if let Some(projects) = cache::load_any::<Vec<Project>>(CACHE_NAME) {
        return (projects, DataSource::Cached);
    }
    (sample_projects(), DataSource::Sample)
}

/// Built-in gallery shown offline or before the first successful fetch.
pub fn sample_projects() -> Vec<Project> {
    let samples = [
        (
            "folio",
            "A developer portfolio for the terminal",
            "Rust",
            214,
            18,
            "2025-11-02",
        ),
        (
            "tidewatch",
            "Tide tables and moon phases as a TUI widget",
            "Rust",
            97,
            9,
            "2025-08-19",
        ),
        (
            "linkhoard",
            "Self-hosted bookmark archive with full-text search",
            "Go",
            61,
            7,
            "2025-05-30",
        ),
        (
            "dotcensus",
            "Inventory and diff dotfiles across machines",
            "Shell",
            33,
            2,
            "2024-12-11",
        ),
        (
            "crumb",
            "Tiny breadcrumb tracer for shell pipelines",
            "Rust",
            21,
            1,
            "2024-09-27",
        ),
    ];

    samples
        .into_iter()
        .map(|(name, desc, lang, stars, forks, updated)| Project {
            name: name.to_string(),
            description: desc.to_string(),
            language: lang.to_string(),
            stars,
            forks,
            url: format!("https://github.com/example/{name}"),
            updated: updated.to_string(),
        })
        .collect()
}
