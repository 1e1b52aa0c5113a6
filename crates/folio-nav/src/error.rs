//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Section list cannot be empty")]
    EmptySections,

    #[error("Initial index {index} out of range for {len} sections")]
    InitialIndexOutOfRange { index: usize, len: usize },
}
