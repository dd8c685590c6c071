pub mod fixtures;

use vitae::{ResumeData, Template, TemplateContext, TemplateError, get_template};

/// Translation table mirroring the keys the renderers consume.
pub fn mock_translate(key: &str) -> String {
    let value = match key {
        "template.present" => "Present",
        "template.at" => " at ",
        "template.separator" => ", ",
        "template.grade" => "Grade:",
        "forms.experience.title" => "Experience",
        "forms.internships.title" => "Internships",
        "forms.education.title" => "Education",
        "forms.volunteering.title" => "Volunteering",
        "forms.projects.title" => "Projects",
        "forms.skills.title" => "Skills",
        "forms.languages.title" => "Languages",
        "forms.certificates.title" => "Certificates",
        "forms.personalInfo.title" => "Contact",
        "forms.personalInfo.summary" => "Profile",
        "forms.personalInfo.socialLinks" => "Links",
        other => other,
    };
    value.to_owned()
}

pub fn parse_with(template: &dyn Template, data: &ResumeData) -> Result<String, TemplateError> {
    let ctx = TemplateContext {
        data,
        font: "Calibri",
        locale: "en",
        translator: &mock_translate,
    };
    template.parse(&ctx)
}

pub fn parse_default(data: &ResumeData) -> String {
    parse_with(get_template("default"), data).expect("default template parse")
}

pub fn parse_compact(data: &ResumeData) -> String {
    parse_with(get_template("compact"), data).expect("compact template parse")
}

/// Counts occurrences of `target` that are not escaped; an escaping
/// backslash consumes the following character, so escaped pairs are skipped
/// as units.
pub fn count_unescaped(text: &str, target: char) -> usize {
    let mut count = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == target {
            count += 1;
        }
    }
    count
}
