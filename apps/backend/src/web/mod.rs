//! Web boundary helpers shared by middleware, extractors and error responses.

pub mod trace_ctx;
