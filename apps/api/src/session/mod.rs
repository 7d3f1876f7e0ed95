// Per-visitor state: resume text, target role, detected skills, chat history
// and the currently locked mock test.

pub mod handlers;
pub mod models;
pub mod store;

pub use store::SessionStore;
