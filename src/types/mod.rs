pub mod email;
pub mod portfolio;

pub use email::{ContactMessage, EmailJsRequest, TemplateParams};
pub use portfolio::*;
