// src/web/handlers/content_handlers.rs
//! Read-only section content.

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::debug;

use crate::content::{self, certifications, CERTIFICATIONS};
use crate::page::{NavigationTarget, ScrollRequest};
use crate::types::{Education, Experience, LinkAction, Profile, Project, ProjectLink, Skills};
use crate::utils::parse_flag;
use crate::web::types::*;

pub async fn get_page_handler(config: &State<ServerConfig>) -> Json<DataResponse<PageView>> {
    Json(DataResponse::success(
        "Page layout".to_string(),
        PageView::from(&config.layout),
        None,
    ))
}

pub async fn get_profile_handler() -> Json<DataResponse<Profile>> {
    Json(DataResponse::success(
        "Profile".to_string(),
        content::PROFILE,
        None,
    ))
}

pub async fn get_skills_handler() -> Json<DataResponse<Skills>> {
    Json(DataResponse::success(
        "Skills".to_string(),
        content::SKILLS,
        None,
    ))
}

pub async fn get_experience_handler() -> Json<DataResponse<&'static [Experience]>> {
    Json(DataResponse::success(
        format!("{} positions", content::EXPERIENCE.len()),
        content::EXPERIENCE,
        None,
    ))
}

pub async fn get_education_handler() -> Json<DataResponse<&'static [Education]>> {
    Json(DataResponse::success(
        "Education".to_string(),
        content::EDUCATION,
        None,
    ))
}

pub async fn get_projects_handler() -> Json<DataResponse<&'static [Project]>> {
    Json(DataResponse::success(
        format!("{} projects", content::PROJECTS.len()),
        content::PROJECTS,
        None,
    ))
}

pub async fn get_project_link_handler(id: &str, kind: &str) -> ApiResult<DataResponse<LinkAction>> {
    let project = content::find_project(id).ok_or_else(|| {
        api_error(
            Status::NotFound,
            &format!("Project not found: {}", id),
            "PROJECT_NOT_FOUND",
            &["List projects with GET /api/projects"],
            None,
        )
    })?;

    let link = match kind {
        "case-study" | "case_study" => ProjectLink::CaseStudy,
        "demo" => ProjectLink::Demo,
        _ => {
            return Err(api_error(
                Status::BadRequest,
                &format!("Unknown link kind: {}", kind),
                "INVALID_LINK_KIND",
                &["Use 'case-study' or 'demo'"],
                None,
            ))
        }
    };

    let action = project.link_action(link).ok_or_else(|| {
        api_error(
            Status::NotFound,
            &format!("{} has no {} link", project.title, link.label()),
            "LINK_NOT_FOUND",
            &[],
            None,
        )
    })?;

    Ok(Json(DataResponse::success(
        format!("{} - {}", project.title, link.label()),
        action,
        None,
    )))
}

pub async fn get_certifications_handler(
    all: Option<String>,
) -> Json<DataResponse<CertificationsView>> {
    let show_all = parse_flag(all.as_deref());
    let shown = content::displayed_certifications(show_all);

    Json(DataResponse::success(
        format!("Showing {} of {} certifications", shown.len(), CERTIFICATIONS.len()),
        CertificationsView {
            show_all,
            total: CERTIFICATIONS.len(),
            issuers: certifications::issuers(),
            certifications: shown,
        },
        None,
    ))
}

pub async fn navigate_handler(
    section: &str,
    config: &State<ServerConfig>,
) -> ApiResult<DataResponse<Option<ScrollRequest>>> {
    let target: NavigationTarget = section.parse().map_err(|_| {
        api_error(
            Status::NotFound,
            &format!("Unknown section: {}", section),
            "UNKNOWN_SECTION",
            &["Valid sections: about, experience, projects, certifications, contact, education"],
            None,
        )
    })?;

    let request = config.layout.scroll_request(target);
    debug!("Navigation to #{} resolved to {:?}", target, request);

    let message = match request {
        Some(request) => format!("Scroll to {}", request.top),
        None => format!("Section #{} is not on the page", target),
    };
    Ok(Json(DataResponse::success(message, request, None)))
}

pub async fn scroll_to_top_handler(
    scroll_y: u32,
    viewport_height: u32,
    config: &State<ServerConfig>,
) -> Json<DataResponse<ScrollToTopView>> {
    let visible = config.layout.show_scroll_to_top(scroll_y, viewport_height);
    Json(DataResponse::success(
        "Scroll-to-top visibility".to_string(),
        ScrollToTopView { visible },
        None,
    ))
}
