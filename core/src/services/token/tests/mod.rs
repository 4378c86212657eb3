//! Tests for the token codec and lifecycle service

mod codec_tests;
mod service_tests;
