pub mod resume;
pub mod section;

pub use resume::{
    Achievement, Certificate, Education, Experience, Language, Project, ResumeData, Skill,
    SocialLink, Volunteering,
};
pub use section::{Column, SectionKind};
