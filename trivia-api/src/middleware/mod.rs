pub mod cors;
pub mod envelope;
