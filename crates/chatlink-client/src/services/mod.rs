//! Built-in method handlers.

pub mod new_message;

pub use new_message::NewMessageService;
