// src/content/mod.rs
//! Static tables behind the page sections. Loaded once, never mutated.

pub mod certifications;
pub mod profile;
pub mod projects;

pub use certifications::{displayed_certifications, CERTIFICATIONS};
pub use profile::{EDUCATION, EXPERIENCE, PROFILE, SKILLS};
pub use projects::{find_project, PROJECTS};
