//! Property-based tests for group reordering.
