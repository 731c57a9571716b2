//! Types shared between the feedback front-end and the emotion analysis service.

pub mod domain;
pub mod error;
pub mod protocol;
