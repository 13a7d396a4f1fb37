use tracing::debug;

use crate::error::Result;
use crate::geometry::{CompositePath, Segment};

/// Chains segments into a composite path over global time.
pub struct AssemblePath {
    segments: Vec<Segment>,
}

impl AssemblePath {
    /// Creates a new `AssemblePath` operation.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::PathError::Empty`] if there are no segments.
    pub fn execute(self) -> Result<CompositePath> {
        let path = CompositePath::new(self.segments)?;
        let gaps = path.discontinuities();
        if !gaps.is_empty() {
            debug!(?gaps, "assembled path has discontinuous joints");
        }
        debug!(
            segments = path.segments().len(),
            period = path.period(),
            "assembled path"
        );
        Ok(path)
    }
}
