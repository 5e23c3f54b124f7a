//! Service layer for frame-usage
//!
//! Turns a signed frame action into the statistics record the image
//! endpoint renders, using an injected [`HubClient`](frame_usage_hub::HubClient).

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod stats_service;

pub use error::ServiceError;
pub use stats_service::{ResolvedFrame, StatsService, stats_record};
