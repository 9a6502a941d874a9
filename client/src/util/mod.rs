//! Browser-facing helpers shared across state and pages.

pub mod storage;
