//! tests/common.rs
//! Common constants shared across test files

/// Standard test secret used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SECRET: &str = "keyboard cat";

/// A second, distinct secret for wrong-secret rejection tests
#[allow(dead_code)] // Used across multiple test files
pub const OTHER_SECRET: &str = "keyboard dog";

/// Standard test value used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_VALUE: &str = "some-session-id";

/// Value strings exercising the edges of the wire format
#[allow(dead_code)] // Used across multiple test files
pub const TEST_VALUES: &[&str] = &[
    "",
    "x",
    "hello",
    "some-session-id",
    "a.b.c",
    "trailing.",
    ".leading",
    "unicode-πß漢字",
    "spaces and\ttabs",
    "base64-lookalike+/=",
];
