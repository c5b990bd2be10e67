//! DTOs exchanged with API consumers.

pub mod client;
