//! Page content: phases, nested accordions and checklist items.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::disclosure::{DisclosureRegistry, SectionKind};
use crate::model::ids::SectionId;
use crate::model::item::TrackableItem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoadmapError {
    #[error("roadmap content is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("roadmap title cannot be empty")]
    EmptyTitle,

    #[error("phase #{index} is missing an id")]
    MissingPhaseId { index: usize },

    #[error("section in phase {phase} is missing an id")]
    MissingSectionId { phase: String },
}

const DEFAULT_ACCENT: &str = "#00d4aa";

fn default_accent() -> String {
    DEFAULT_ACCENT.to_string()
}

/// Collapsible sub-section of a phase card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accordion {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One career phase; rendered as an outer collapsible card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub id: SectionId,
    pub number: u8,
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default)]
    pub sections: Vec<Accordion>,
}

/// Always-visible resource list below the phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub resources: Vec<ResourceGroup>,
}

impl Roadmap {
    /// Parse and presence-check a content document.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError` if the JSON is malformed or a title/id is blank.
    pub fn from_json(raw: &str) -> Result<Self, RoadmapError> {
        let roadmap: Self =
            serde_json::from_str(raw).map_err(|err| RoadmapError::InvalidJson(err.to_string()))?;
        roadmap.validate()?;
        Ok(roadmap)
    }

    fn validate(&self) -> Result<(), RoadmapError> {
        if self.title.trim().is_empty() {
            return Err(RoadmapError::EmptyTitle);
        }
        for (index, phase) in self.phases.iter().enumerate() {
            if phase.id.as_str().trim().is_empty() {
                return Err(RoadmapError::MissingPhaseId { index });
            }
            if phase
                .sections
                .iter()
                .any(|section| section.id.as_str().trim().is_empty())
            {
                return Err(RoadmapError::MissingSectionId {
                    phase: phase.id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Every checklist entry in document order: phase sections first, then
    /// resource groups.
    #[must_use]
    pub fn trackable_items(&self) -> Vec<TrackableItem> {
        let phase_items = self
            .phases
            .iter()
            .flat_map(|phase| phase.sections.iter())
            .flat_map(|section| section.items.iter());
        let resource_items = self.resources.iter().flat_map(|group| group.items.iter());
        phase_items
            .chain(resource_items)
            .map(|text| TrackableItem::new(text.as_str()))
            .collect()
    }

    /// Collapsed registry covering every phase and accordion.
    #[must_use]
    pub fn disclosure_registry(&self) -> DisclosureRegistry {
        let mut registry = DisclosureRegistry::new();
        for phase in &self.phases {
            registry.register(phase.id.clone(), SectionKind::Phase, None);
            for section in &phase.sections {
                registry.register(
                    section.id.clone(),
                    SectionKind::Accordion,
                    Some(phase.id.clone()),
                );
            }
        }
        registry
    }

    #[must_use]
    pub fn phase(&self, id: &SectionId) -> Option<&Phase> {
        self.phases.iter().find(|phase| &phase.id == id)
    }

    /// Built-in cybersecurity career roadmap.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            title: "Cybersecurity Career Roadmap".to_string(),
            tagline: "From fundamentals to your first security role, one phase at a time."
                .to_string(),
            phases: vec![
                phase(
                    1,
                    "Foundations",
                    "Months 1-4",
                    "Build the IT and networking base every security role sits on.",
                    "#00d4aa",
                    vec![
                        (
                            "Learning Path",
                            &[
                                "Computer hardware and operating system basics",
                                "Networking fundamentals: OSI and TCP/IP models",
                                "Linux command line essentials",
                                "Windows administration and Active Directory basics",
                                "Python scripting for automation",
                            ][..],
                        ),
                        (
                            "Certifications",
                            &["CompTIA A+", "CompTIA Network+"][..],
                        ),
                    ],
                ),
                phase(
                    2,
                    "Security Core",
                    "Months 5-8",
                    "Learn how attacks work and how defenders detect them.",
                    "#ff6b6b",
                    vec![
                        (
                            "Learning Path",
                            &[
                                "Security principles: CIA triad and risk",
                                "Cryptography basics and PKI",
                                "Packet analysis with Wireshark",
                                "Vulnerability scanning with Nmap and OpenVAS",
                                "Log analysis and SIEM fundamentals",
                            ][..],
                        ),
                        ("Certifications", &["CompTIA Security+"][..]),
                    ],
                ),
                phase(
                    3,
                    "Specialization",
                    "Months 9-14",
                    "Pick a track and go deep with hands-on labs.",
                    "#feca57",
                    vec![
                        (
                            "Offensive Track",
                            &[
                                "Web application testing with Burp Suite",
                                "SQL Injection and XSS labs",
                                "Privilege escalation on Linux and Windows",
                            ][..],
                        ),
                        (
                            "Defensive Track",
                            &[
                                "Incident response playbooks",
                                "Threat hunting with Sigma rules",
                                "Digital forensics fundamentals",
                            ][..],
                        ),
                    ],
                ),
                phase(
                    4,
                    "Career Launch",
                    "Months 15-18",
                    "Turn skills into a portfolio and land the first role.",
                    "#a29bfe",
                    vec![
                        (
                            "Portfolio",
                            &[
                                "Publish CTF write-ups on a personal blog",
                                "Build a home lab and document it on GitHub",
                            ][..],
                        ),
                        (
                            "Job Search",
                            &[
                                "Tailor a security-focused CV",
                                "Practice technical interview questions",
                                "Apply for SOC analyst internships",
                            ][..],
                        ),
                    ],
                ),
            ],
            resources: vec![
                ResourceGroup {
                    title: "Free Learning Platforms".to_string(),
                    items: to_strings(&["TryHackMe", "Hack The Box Academy", "OverTheWire Bandit"]),
                },
                ResourceGroup {
                    title: "Local Community".to_string(),
                    items: to_strings(&[
                        "Join a local security meetup",
                        "Attend a regional CTF competition",
                    ]),
                },
            ],
        }
    }
}

fn phase(
    number: u8,
    title: &str,
    duration: &str,
    summary: &str,
    accent: &str,
    sections: Vec<(&str, &[&str])>,
) -> Phase {
    let id = format!("phase-{number}");
    let sections = sections
        .into_iter()
        .map(|(section_title, items)| Accordion {
            id: SectionId::new(format!("{id}-{}", slug(section_title))),
            title: section_title.to_string(),
            items: to_strings(items),
        })
        .collect();
    Phase {
        id: SectionId::new(id),
        number,
        title: title.to_string(),
        duration: duration.to_string(),
        summary: summary.to_string(),
        accent: accent.to_string(),
        sections,
    }
}

fn slug(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
