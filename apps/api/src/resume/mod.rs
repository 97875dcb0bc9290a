// Resume intake: PDF upload, text extraction, and per-session storage.

pub mod handlers;
pub mod store;
