//! HTTP plumbing shared by speech providers.

pub mod http;
