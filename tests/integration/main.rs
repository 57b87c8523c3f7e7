//! End-to-end integration tests
//!
//! Drives the full pipeline the way the chat transport does: one raw
//! message in, a routed command and typed arguments out.
