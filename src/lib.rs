//! Backend for Paras's portfolio site: section content, the keyword-driven
//! site assistant and the contact form.

pub mod chat;
pub mod cli;
pub mod contact;
pub mod content;
pub mod core;
pub mod page;
pub mod responder;
pub mod types;
pub mod utils;
pub mod web;

pub use chat::{ChatTiming, ChatWidget, Navigator};
pub use contact::ContactForm;
pub use page::{NavigationTarget, PageLayout};
pub use responder::{respond, Reply, Responder};
pub use web::{build_rocket, start_web_server};
