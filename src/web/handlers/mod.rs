pub mod chat_handlers;
pub mod contact_handlers;
pub mod content_handlers;
pub mod system_handlers;

pub use chat_handlers::*;
pub use contact_handlers::*;
pub use content_handlers::*;
pub use system_handlers::*;
