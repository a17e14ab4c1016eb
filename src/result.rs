use std::result::Result as StdResult;

use crate::error::Error;

/// Result of every descriptor operation.
pub type Result<T> = StdResult<T, Error>;
