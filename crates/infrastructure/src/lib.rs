//! AdFilter DNS Infrastructure Layer
pub mod dns;
