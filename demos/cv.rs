use clap::Parser;
use serde_json::json;
use std::env;
use std::fs;
use vitae::{ResumeData, TemplateContext, get_template, template_list};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Template id to render with (unknown ids fall back to "default")
    #[arg(long, default_value = "default")]
    template: String,

    /// Output path for the generated Typst document
    #[arg(long, default_value = "cv.typ")]
    output: String,
}

fn translate(key: &str) -> String {
    let value = match key {
        "template.present" => "Present",
        "template.at" => " at ",
        "template.separator" => ", ",
        "template.grade" => "Grade:",
        "forms.experience.title" => "Experience",
        "forms.education.title" => "Education",
        "forms.skills.title" => "Skills",
        "forms.projects.title" => "Projects",
        "forms.languages.title" => "Languages",
        "forms.certificates.title" => "Certificates",
        "forms.internships.title" => "Internships",
        "forms.volunteering.title" => "Volunteering",
        "forms.personalInfo.title" => "Contact",
        "forms.personalInfo.summary" => "Profile",
        "forms.personalInfo.socialLinks" => "Links",
        other => other,
    };
    value.to_owned()
}

fn sample_resume() -> ResumeData {
    serde_json::from_value(json!({
        "firstName": "Sarah",
        "lastName": "Johnson",
        "email": "sarah.johnson@email.com",
        "phone": "+1 555 987 6543",
        "position": "Full Stack Developer",
        "location": "Austin, TX",
        "summary": "Experienced developer. Specialized in C#, React, and cloud work worth $10M+.",
        "experiences": [{
            "company": "TechStart Inc.",
            "position": "Senior Developer",
            "location": "Austin, TX",
            "startDate": "2020-03",
            "isPresent": true,
            "achievements": [
                { "text": "Led development of microservices architecture" },
                { "text": "Cut infra spend by $120K/year" }
            ]
        }],
        "education": [{
            "institution": "University of Texas",
            "degree": "Bachelor of Science",
            "fieldOfStudy": "Computer Science",
            "startDate": "2013-08",
            "endDate": "2017-05",
            "graduationScore": "3.8 GPA"
        }],
        "skills": [
            { "title": "Languages", "description": "C#, F#, TypeScript, Rust" },
            { "title": "DevOps", "description": "Docker, Kubernetes, AWS" }
        ],
        "socialLinks": [
            { "platform": "github", "url": "https://github.com/sarahjohnson" }
        ],
        "languages": [
            { "name": "English", "proficiency": "Native" },
            { "name": "Spanish", "proficiency": "Intermediate" }
        ],
        "sectionOrder": {
            "summary": 0, "experience": 1, "education": 2,
            "skills": 3, "languages": 4, "socialLinks": 5
        },
        "sectionPlacement": { "skills": "right", "languages": "right" }
    }))
    .expect("sample resume deserializes")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let args = Args::parse();

    println!("Available templates:");
    for descriptor in template_list() {
        println!("  {} - {}", descriptor.id, descriptor.description);
    }

    let data = sample_resume();
    let template = get_template(&args.template);
    log::info!("rendering with template {:?}", template.id());

    let ctx = TemplateContext {
        data: &data,
        font: "Calibri",
        locale: "en",
        translator: &translate,
    };
    let document = template.parse(&ctx)?;
    log::info!("generated {} bytes of markup", document.len());
    fs::write(&args.output, &document)?;

    println!("Wrote {}", args.output);
    Ok(())
}
