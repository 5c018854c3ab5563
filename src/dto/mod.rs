//! JSON bodies shared by the HTTP API and the dashboard.
mod request;
mod response;

pub use request::*;
pub use response::*;
