//! Public library API for decoding dynamic JSON-like trees into typed values.

/// Dynamic values, type descriptors, schema resolution, and the recursive decoder.
pub mod shape;
