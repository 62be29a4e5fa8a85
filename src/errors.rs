//! ## Custom Errors
//!
//! This module defines the errors that can be produced when constructing the
//! data structures in this crate.

use std::error::Error;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents errors specific to invalid operations or parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug)]
pub enum ConcavemanError {
    /// Occurs when an invalid node capacity is provided.
    InvalidCapacity {
        /// The capacity value that was provided.
        capacity: usize,
    },
}

impl fmt::Display for ConcavemanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcavemanError::InvalidCapacity { capacity } => {
                write!(
                    f,
                    "Invalid capacity: {capacity}. Capacity must be greater than zero."
                )
            }
        }
    }
}

impl Error for ConcavemanError {}
