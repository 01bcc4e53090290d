//! Utility modules for vanlang-nlp.

pub mod hash;
pub mod numeric;
