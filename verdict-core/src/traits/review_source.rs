use crate::errors::SourceError;
use crate::models::RawReview;

/// Supplies the batch of unvalidated reviews for one scoring run.
///
/// File formats and loaders live outside the engine; they implement this.
pub trait ReviewSource {
    fn reviews(&self) -> Result<Vec<RawReview>, SourceError>;
}

impl ReviewSource for [RawReview] {
    fn reviews(&self) -> Result<Vec<RawReview>, SourceError> {
        Ok(self.to_vec())
    }
}

impl ReviewSource for Vec<RawReview> {
    fn reviews(&self) -> Result<Vec<RawReview>, SourceError> {
        self.as_slice().reviews()
    }
}
