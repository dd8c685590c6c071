//! Content generators: map resume entry collections into ordered sequences
//! of markup-safe [`ContentFragment`]s, one per non-empty entry.
//!
//! Generators escape every user-supplied field and resolve date ranges; how
//! fragments are joined, spaced, and wrapped is the layout formatters'
//! concern (see [`crate::layout`]).

use crate::context::Translate;
use crate::dates::{format_date_range, format_month};
use vitae_markup::{escape_content, escape_string};
use vitae_types::{Certificate, Education, Experience, Language, Project, ResumeData, Skill,
    SocialLink, Volunteering};

/// An intermediate value produced by a content generator and consumed by a
/// layout formatter within a single section render. `content` is the main
/// markup-safe line; the remaining fields are structured metadata some
/// formatters use (right-aligned date ranges, bulleted detail lines, an
/// auxiliary note such as a grade or issuer).
#[derive(Debug, Clone, Default)]
pub struct ContentFragment {
    pub content: String,
    pub dates: Option<String>,
    pub details: Vec<String>,
    pub note: Option<String>,
}

impl ContentFragment {
    pub fn text(content: impl Into<String>) -> Self {
        ContentFragment { content: content.into(), ..Default::default() }
    }
}

/// Joins two already-escaped parts with a separator, tolerating either part
/// being empty.
fn join_nonempty(left: &str, sep: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (false, false) => format!("{left}{sep}{right}"),
        (false, true) => left.to_owned(),
        (true, _) => right.to_owned(),
    }
}

/// Heading line for experience-like entries: bold position, joined to the
/// organization with the localized "at" particle, then the location.
fn experience_heading(position: &str, organization: &str, location: &str,
    translator: &dyn Translate) -> String {
    let position = escape_content(position);
    let organization = escape_content(organization);
    let location = escape_content(location);

    let head = if position.is_empty() {
        organization
    } else {
        let bold = format!("*{position}*");
        if organization.is_empty() {
            bold
        } else {
            format!("{bold}{}{organization}", translator.translate("template.at"))
        }
    };
    join_nonempty(&head, &translator.translate("template.separator"), &location)
}

fn achievement_details(achievements: &[vitae_types::Achievement]) -> Vec<String> {
    achievements
        .iter()
        .filter(|a| !a.is_empty())
        .map(|a| escape_content(&a.text))
        .collect()
}

/// Experience and internship entries share a shape, so both sections use
/// this generator.
pub fn generate_experience_content(
    entries: &[Experience],
    translator: &dyn Translate,
) -> Vec<ContentFragment> {
    entries
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| ContentFragment {
            content: experience_heading(&e.position, &e.company, &e.location, translator),
            dates: format_date_range(&e.start_date, &e.end_date, e.is_present, translator),
            details: achievement_details(&e.achievements),
            note: None,
        })
        .collect()
}

pub fn generate_volunteering_content(
    entries: &[Volunteering],
    translator: &dyn Translate,
) -> Vec<ContentFragment> {
    entries
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| ContentFragment {
            content: experience_heading(&e.position, &e.organization, &e.location, translator),
            dates: format_date_range(&e.start_date, &e.end_date, e.is_present, translator),
            details: achievement_details(&e.achievements),
            note: None,
        })
        .collect()
}

pub fn generate_education_content(
    entries: &[Education],
    translator: &dyn Translate,
) -> Vec<ContentFragment> {
    let sep = translator.translate("template.separator");
    entries
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| {
            let degree = join_nonempty(
                &escape_content(&e.degree),
                &sep,
                &escape_content(&e.field_of_study),
            );
            let heading = if degree.is_empty() {
                escape_content(&e.institution)
            } else {
                format!("*{degree}*")
            };

            let mut details = Vec::new();
            if !degree.is_empty() {
                let institution = join_nonempty(
                    &escape_content(&e.institution),
                    &sep,
                    &escape_content(&e.location),
                );
                if !institution.is_empty() {
                    details.push(institution);
                }
            }
            let description = escape_content(&e.description);
            if !description.is_empty() {
                details.push(description);
            }

            let score = escape_content(&e.graduation_score);
            let note = (!score.is_empty())
                .then(|| format!("{} {score}", translator.translate("template.grade")));

            ContentFragment {
                content: heading,
                dates: format_date_range(&e.start_date, &e.end_date, e.is_present, translator),
                details,
                note,
            }
        })
        .collect()
}

/// Titles with a URL become `#link` calls: the URL is a string-literal
/// argument, the visible label a content block.
fn linked_title(title: &str, url: &str) -> String {
    let label = escape_content(title);
    let url = url.trim();
    if url.is_empty() {
        label
    } else if label.is_empty() {
        format!("#link(\"{}\")", escape_string(url))
    } else {
        format!("#link(\"{}\")[{label}]", escape_string(url))
    }
}

pub fn generate_projects_content(entries: &[Project]) -> Vec<ContentFragment> {
    entries
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| {
            let description = escape_content(&e.description);
            ContentFragment {
                content: format!("*{}*", linked_title(&e.title, &e.url)),
                details: if description.is_empty() { vec![] } else { vec![description] },
                ..Default::default()
            }
        })
        .collect()
}

pub fn generate_skills_content(entries: &[Skill]) -> Vec<ContentFragment> {
    entries
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| {
            let title = escape_content(&e.title);
            let description = escape_content(&e.description);
            let content = match (title.is_empty(), description.is_empty()) {
                (false, false) => format!("*{title}:* {description}"),
                (false, true) => format!("*{title}*"),
                // Fully empty entries are filtered out above.
                (true, _) => description,
            };
            ContentFragment::text(content)
        })
        .collect()
}

pub fn generate_languages_content(
    entries: &[Language],
    translator: &dyn Translate,
) -> Vec<ContentFragment> {
    let sep = translator.translate("template.separator");
    entries
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| {
            let name = escape_content(&e.name);
            let proficiency = escape_content(&e.proficiency);
            let content = if name.is_empty() {
                proficiency
            } else {
                join_nonempty(&format!("*{name}*"), &sep, &proficiency)
            };
            ContentFragment::text(content)
        })
        .collect()
}

pub fn generate_certificates_content(entries: &[Certificate]) -> Vec<ContentFragment> {
    entries
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| {
            let description = escape_content(&e.description);
            let issuer = escape_content(&e.issuer);
            ContentFragment {
                content: format!("*{}*", linked_title(&e.title, &e.url)),
                dates: format_month(&e.date),
                details: if description.is_empty() { vec![] } else { vec![description] },
                note: (!issuer.is_empty()).then_some(issuer),
            }
        })
        .collect()
}

/// Flattens the scalar contact fields into one fragment each.
pub fn generate_contact_content(data: &ResumeData) -> Vec<ContentFragment> {
    [&data.email, &data.phone, &data.location]
        .into_iter()
        .map(|field| escape_content(field))
        .filter(|text| !text.is_empty())
        .map(ContentFragment::text)
        .collect()
}

fn link_label(link: &SocialLink) -> String {
    let custom = link.custom_label.trim();
    if !custom.is_empty() {
        return escape_content(custom);
    }
    let platform = link.platform.trim();
    let mut chars = platform.chars();
    match chars.next() {
        Some(first) => escape_content(&format!("{}{}", first.to_uppercase(), chars.as_str())),
        None => escape_content(platform),
    }
}

pub fn generate_social_links_content(data: &ResumeData) -> Vec<ContentFragment> {
    data.social_links
        .iter()
        .filter(|link| !link.is_empty())
        .map(|link| {
            let label = link_label(link);
            ContentFragment::text(linked_title_label(&label, link.url.trim()))
        })
        .collect()
}

/// Like [`linked_title`] but takes an already-escaped label.
fn linked_title_label(label: &str, url: &str) -> String {
    if url.is_empty() {
        label.to_owned()
    } else if label.is_empty() {
        format!("#link(\"{}\")", escape_string(url))
    } else {
        format!("#link(\"{}\")[{label}]", escape_string(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn translator() -> impl Translate {
        let table: HashMap<&'static str, &'static str> = HashMap::from([
            ("template.present", "Present"),
            ("template.at", " at "),
            ("template.separator", ", "),
            ("template.grade", "Grade:"),
        ]);
        move |key: &str| table.get(key).copied().unwrap_or(key).to_owned()
    }

    #[test]
    fn test_experience_fragment_escapes_fields() {
        let entries = vec![Experience {
            company: "Tech Corp".into(),
            position: "Senior C# Developer".into(),
            location: "San Francisco".into(),
            start_date: "2020-01".into(),
            is_present: true,
            achievements: vec![
                vitae_types::Achievement { text: "Reduced costs by $50,000/year".into() },
                vitae_types::Achievement { text: "  ".into() },
            ],
            ..Default::default()
        }];
        let frags = generate_experience_content(&entries, &translator());
        assert_eq!(frags.len(), 1);
        assert_eq!(
            frags[0].content,
            "*Senior C\\# Developer* at Tech Corp, San Francisco"
        );
        assert_eq!(frags[0].dates.as_deref(), Some("Jan 2020 - Present"));
        assert_eq!(frags[0].details, vec!["Reduced costs by \\$50,000/year"]);
    }

    #[test]
    fn test_empty_entries_yield_no_fragment() {
        let entries = vec![Experience::default()];
        assert!(generate_experience_content(&entries, &translator()).is_empty());
        assert!(generate_skills_content(&[Skill::default()]).is_empty());
        assert!(generate_projects_content(&[Project::default()]).is_empty());
    }

    #[test]
    fn test_partial_skills_are_included() {
        let frags = generate_skills_content(&[
            Skill { title: "Only title".into(), description: String::new() },
            Skill { title: String::new(), description: "Only description".into() },
            Skill { title: "Languages".into(), description: "C#, F#".into() },
        ]);
        assert_eq!(frags.len(), 3);
        assert_eq!(frags[0].content, "*Only title*");
        assert_eq!(frags[1].content, "Only description");
        assert_eq!(frags[2].content, "*Languages:* C\\#, F\\#");
    }

    #[test]
    fn test_project_url_uses_string_escaping() {
        let frags = generate_projects_content(&[Project {
            title: "C# Tool".into(),
            url: "https://example.com/a\"b".into(),
            description: String::new(),
        }]);
        // Label escaped for content mode, URL for string mode.
        assert_eq!(frags[0].content, "*#link(\"https://example.com/a\\\"b\")[C\\# Tool]*");
    }

    #[test]
    fn test_education_grade_note() {
        let entries = vec![Education {
            institution: "University of Texas".into(),
            degree: "Bachelor of Science".into(),
            field_of_study: "Computer Science".into(),
            graduation_score: "3.8 GPA".into(),
            ..Default::default()
        }];
        let frags = generate_education_content(&entries, &translator());
        assert_eq!(frags[0].content, "*Bachelor of Science, Computer Science*");
        assert_eq!(frags[0].note.as_deref(), Some("Grade: 3.8 GPA"));
        assert_eq!(frags[0].details, vec!["University of Texas"]);
    }

    #[test]
    fn test_contact_fragments_skip_empty_fields() {
        let data = ResumeData {
            email: "a@b.c".into(),
            phone: String::new(),
            location: "Austin, TX".into(),
            ..Default::default()
        };
        let frags = generate_contact_content(&data);
        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].content, "a@b.c");
        assert_eq!(frags[1].content, "Austin, TX");
    }

    #[test]
    fn test_social_link_label_fallback() {
        let data = ResumeData {
            social_links: vec![
                SocialLink {
                    platform: "github".into(),
                    url: "https://github.com/x".into(),
                    custom_label: String::new(),
                },
                SocialLink {
                    platform: "linkedin".into(),
                    url: "https://linkedin.com/in/x".into(),
                    custom_label: "My Profile".into(),
                },
                SocialLink::default(),
            ],
            ..Default::default()
        };
        let frags = generate_social_links_content(&data);
        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].content, "#link(\"https://github.com/x\")[Github]");
        assert_eq!(frags[1].content, "#link(\"https://linkedin.com/in/x\")[My Profile]");
    }

    #[test]
    fn test_languages_join_with_separator() {
        let frags = generate_languages_content(
            &[Language { name: "English".into(), proficiency: "Native".into() }],
            &translator(),
        );
        assert_eq!(frags[0].content, "*English*, Native");
    }
}
