// src/types/portfolio.rs
//! Static portfolio records served by the content endpoints.

use serde::Serialize;

use crate::utils::is_pdf_url;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub background_video: &'static str,
    pub profile_image: &'static str,
    pub about_heading: &'static str,
    pub about_summary: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub instagram: &'static str,
    pub tagline: &'static str,
    pub specializations: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolSkill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skills {
    pub areas: &'static [&'static str],
    pub tools: &'static [ToolSkill],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub program: &'static str,
    pub institution: &'static str,
    pub year: u16,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub case_study_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectLink {
    CaseStudy,
    Demo,
}

impl ProjectLink {
    pub fn label(self) -> &'static str {
        match self {
            ProjectLink::CaseStudy => "Case Study",
            ProjectLink::Demo => "Demo",
        }
    }
}

/// What the project card does when one of its buttons is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkAction {
    /// PDFs open in the in-page document viewer.
    ViewDocument { url: String, title: String },
    OpenExternal { url: String },
}

impl Project {
    pub fn link(&self, link: ProjectLink) -> Option<&'static str> {
        match link {
            ProjectLink::CaseStudy => self.case_study_url,
            ProjectLink::Demo => self.demo_url,
        }
    }

    pub fn link_action(&self, link: ProjectLink) -> Option<LinkAction> {
        let url = self.link(link)?;
        if is_pdf_url(url) {
            Some(LinkAction::ViewDocument {
                url: url.to_string(),
                title: format!("{} - {}", self.title, link.label()),
            })
        } else {
            Some(LinkAction::OpenExternal {
                url: url.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Certification {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    /// Badge image; certifications without one render an issuer icon.
    pub image: Option<&'static str>,
    pub credential_url: Option<&'static str>,
    pub skills: &'static [&'static str],
}

impl Certification {
    pub fn is_microsoft(&self) -> bool {
        self.issuer.contains("Microsoft")
    }
}
