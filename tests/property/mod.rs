//! Property-based tests for grouping and rendering guarantees

mod grouping;
