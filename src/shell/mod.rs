// Composition root for the time tracking backend.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the concrete state store.
// - Expose the HTTP router to the binary.

pub mod config;
pub mod http;
pub mod state;
