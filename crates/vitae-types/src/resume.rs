//! The resume data model.
//!
//! Mirrors the JSON shape produced by the editor: camelCase field names,
//! every field optional on the wire (`#[serde(default)]`) so partial
//! documents deserialize to empty fields instead of failing. The render
//! pipeline only ever reads this structure.

use crate::section::{Column, SectionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete user resume: identity fields, free-text fields, ordered entry
/// collections, and layout metadata controlling section order and placement.
///
/// Collections are insertion-ordered; order within a collection is display
/// order. `section_order` ranks need not be contiguous, only their relative
/// order matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub version: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub location: String,
    pub summary: String,
    pub technical_skills: String,
    pub soft_skills: String,
    pub experiences: Vec<Experience>,
    pub internships: Vec<Experience>,
    pub education: Vec<Education>,
    pub volunteering: Vec<Volunteering>,
    pub skills: Vec<Skill>,
    pub social_links: Vec<SocialLink>,
    pub projects: Vec<Project>,
    pub languages: Vec<Language>,
    pub certificates: Vec<Certificate>,
    /// Section key -> rank. Defines the render sequence.
    pub section_order: HashMap<String, i64>,
    /// Section key -> column, for two-column templates.
    pub section_placement: HashMap<String, Column>,
    /// Legacy single-locale header overrides.
    pub section_headers: HashMap<String, String>,
    /// Locale -> section key -> header override.
    pub section_headers_i18n: HashMap<String, HashMap<String, String>>,
}

impl ResumeData {
    /// The rank of a section in `section_order`, if one was assigned.
    /// `Profile` consults the legacy `summary` key before `profile`.
    pub fn section_rank(&self, kind: SectionKind) -> Option<i64> {
        let rank = self.section_order.get(kind.order_key()).copied();
        if rank.is_none() && kind == SectionKind::Profile {
            return self.section_order.get(kind.key()).copied();
        }
        rank
    }

    /// Column assignment for a section, if the user placed it explicitly.
    pub fn section_column(&self, kind: SectionKind) -> Option<Column> {
        self.section_placement.get(kind.key()).copied()
    }
}

/// A work experience or internship entry. Dates are `YYYY-MM` strings;
/// `is_present` overrides `end_date`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub company_url: String,
    pub start_date: String,
    pub end_date: String,
    pub is_present: bool,
    pub achievements: Vec<Achievement>,
}

impl Experience {
    pub fn is_empty(&self) -> bool {
        self.company.trim().is_empty()
            && self.position.trim().is_empty()
            && self.achievements.iter().all(Achievement::is_empty)
    }
}

/// A single bullet under an experience-like entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub text: String,
}

impl Achievement {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_present: bool,
    pub description: String,
    pub graduation_score: String,
}

impl Education {
    pub fn is_empty(&self) -> bool {
        self.institution.trim().is_empty()
            && self.degree.trim().is_empty()
            && self.field_of_study.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volunteering {
    pub organization: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_present: bool,
    pub achievements: Vec<Achievement>,
}

impl Volunteering {
    pub fn is_empty(&self) -> bool {
        self.organization.trim().is_empty()
            && self.position.trim().is_empty()
            && self.achievements.iter().all(Achievement::is_empty)
    }
}

/// A skill entry is empty iff both title and description are empty after
/// trimming; entries with either field set are rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub title: String,
    pub description: String,
}

impl Skill {
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub custom_label: String,
}

impl SocialLink {
    pub fn is_empty(&self) -> bool {
        self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl Project {
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

impl Language {
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.proficiency.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
    pub description: String,
}

impl Certificate {
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.issuer.trim().is_empty()
    }
}
