pub mod signatures;
pub mod svg;

pub use signatures::{match_signature, Anchor, Signature, SIGNATURES};
