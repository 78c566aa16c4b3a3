//! Caller-side selection of ranked windows for display.

use crate::error::WindowError;
use crate::rank::RankedWindow;

/// Filter, ordering, and truncation applied after ranking.
///
/// Windows whose length falls outside `min_days..=max_days` are dropped,
/// the rest are ordered by efficiency (highest first), and at most `top`
/// are kept.
///
/// # Example
///
/// ```
/// use leavemax_windows::Selection;
///
/// let selection = Selection::new(5, 20).with_top(Some(100));
/// assert!(selection.validate().is_ok());
/// assert!(Selection::new(9, 4).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    min_days: usize,
    max_days: usize,
    top: Option<usize>,
}

impl Selection {
    /// Creates a selection for window lengths `min_days..=max_days` with no
    /// row limit.
    pub fn new(min_days: usize, max_days: usize) -> Self {
        Self {
            min_days,
            max_days,
            top: None,
        }
    }

    /// Sets the maximum number of windows to keep. `None` keeps all.
    pub fn with_top(mut self, top: Option<usize>) -> Self {
        self.top = top;
        self
    }

    /// Shortest window length kept.
    pub fn min_days(&self) -> usize {
        self.min_days
    }

    /// Longest window length kept.
    pub fn max_days(&self) -> usize {
        self.max_days
    }

    /// Row limit.
    pub fn top(&self) -> Option<usize> {
        self.top
    }

    /// Validates this selection.
    ///
    /// Returns an error if `min_days` is zero, `min_days > max_days`, or
    /// `top` is `Some(0)`.
    pub fn validate(&self) -> Result<(), WindowError> {
        if self.min_days == 0 {
            return Err(WindowError::InvalidSelection {
                reason: "min_days must be at least 1".to_string(),
            });
        }
        if self.min_days > self.max_days {
            return Err(WindowError::InvalidSelection {
                reason: format!(
                    "min_days ({}) > max_days ({})",
                    self.min_days, self.max_days
                ),
            });
        }
        if self.top == Some(0) {
            return Err(WindowError::InvalidSelection {
                reason: "top must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns `true` if a window of `days` days is within the length range.
    pub fn accepts_length(&self, days: usize) -> bool {
        (self.min_days..=self.max_days).contains(&days)
    }

    /// Applies the selection to ranked windows.
    ///
    /// Ordering is stable, so windows of equal efficiency keep their
    /// incoming order.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidSelection`] if [`Self::validate`] fails.
    pub fn apply<'a>(
        &self,
        ranked: Vec<RankedWindow<'a>>,
    ) -> Result<Vec<RankedWindow<'a>>, WindowError> {
        self.validate()?;
        let mut kept: Vec<RankedWindow<'a>> = ranked
            .into_iter()
            .filter(|r| self.accepts_length(r.total_days_off()))
            .collect();
        kept.sort_by(|a, b| b.efficiency().total_cmp(&a.efficiency()));
        if let Some(top) = self.top {
            kept.truncate(top);
        }
        Ok(kept)
    }
}

impl Default for Selection {
    /// Window lengths 5..=20, top 100.
    fn default() -> Self {
        Self::new(5, 20).with_top(Some(100))
    }
}
