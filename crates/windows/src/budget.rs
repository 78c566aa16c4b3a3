//! Validated leave budget.

use crate::error::WindowError;

/// Maximum number of leave days that may be spent on a single window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LeaveBudget(usize);

impl LeaveBudget {
    /// Creates a budget of `days` leave days.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvalidBudget`] if `days` is negative.
    pub fn new(days: i64) -> Result<Self, WindowError> {
        if days < 0 {
            return Err(WindowError::InvalidBudget { budget: days });
        }
        Ok(Self(usize::try_from(days).unwrap_or(usize::MAX)))
    }

    /// Returns the number of leave days available.
    pub fn get(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_valid() {
        assert_eq!(LeaveBudget::new(0).unwrap().get(), 0);
    }

    #[test]
    fn positive() {
        assert_eq!(LeaveBudget::new(21).unwrap().get(), 21);
    }

    #[test]
    fn negative_rejected() {
        assert_eq!(
            LeaveBudget::new(-1).unwrap_err(),
            WindowError::InvalidBudget { budget: -1 }
        );
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(LeaveBudget::default().get(), 0);
    }
}
