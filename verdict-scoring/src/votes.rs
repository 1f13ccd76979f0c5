//! Vote decomposition: split a review's total votes into helpful and not helpful.

use verdict_core::errors::InputError;
use verdict_core::models::ReviewRecord;

/// Helpful and not-helpful vote counts of one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteSplit {
    pub yes: u64,
    pub no: u64,
}

impl VoteSplit {
    /// Split of a record that already passed `ReviewRecord::validate`.
    pub(crate) fn of_validated(record: &ReviewRecord) -> Self {
        Self {
            yes: record.helpful_yes,
            no: record.total_vote - record.helpful_yes,
        }
    }

    pub fn total(&self) -> u64 {
        self.yes + self.no
    }
}

/// Derive `helpful_no = total_vote - helpful_yes`.
///
/// A count of helpful votes above the total is malformed data and is
/// rejected, never clamped.
pub fn decompose(helpful_yes: u64, total_vote: u64) -> Result<VoteSplit, InputError> {
    let no = total_vote
        .checked_sub(helpful_yes)
        .ok_or(InputError::HelpfulExceedsTotal {
            helpful_yes,
            total_vote,
        })?;
    Ok(VoteSplit {
        yes: helpful_yes,
        no,
    })
}
