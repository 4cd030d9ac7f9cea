//! Interactive command-line front end
//!
//! This module contains the menu loop and the prompts that feed validated
//! input into the service layer.

pub mod entry;
pub mod menu;
pub mod prompt;
pub mod session;

pub use menu::MenuCommand;
pub use prompt::Prompter;
pub use session::Session;
