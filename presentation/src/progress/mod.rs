//! Submission progress reporters

pub mod reporter;
