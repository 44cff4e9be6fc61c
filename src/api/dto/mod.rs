//! Request and response DTOs.

pub mod url;

pub use url::{CreateUrlRequest, LinkSummary, UrlResponse, VisitsResponse};
