//! Console module - interactive prompts and the session loop

mod prompts;
mod session;

pub use session::Session;
