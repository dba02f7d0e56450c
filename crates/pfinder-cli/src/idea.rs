//! The saved product idea shown alongside search results.

pub const IDEA_HEADING: &str = "Saved Idea: Resume Builder";

pub const IDEA_TEXT: &str = "\
**Website Idea: AI Resume + Cover Letter Builder**

Goal: Create a simple AI-powered website generating job-ready resumes and cover letters.

Target Users:
- Job seekers without strong writing or formatting skills
- ESL applicants
- Entry-level workers or career switchers

Core Features:
1. Input job history, skills, education, and target job title
2. AI-generated resume and cover letter
3. Export PDF/DOCX
4. Premium features: ATS optimization, templates

Monetization:
- Free with watermark
- $5 one-time export
- $9/month unlimited downloads and editing
";

#[must_use]
pub fn render_idea() -> String {
    format!("{IDEA_HEADING}\n\n{IDEA_TEXT}")
}
