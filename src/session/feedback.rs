//! Player-facing text for orders, servings and verdicts.

use std::fmt;

use super::evaluate::{EvaluationResult, ItemOutcome, ItemStatus};
use super::portion::{Order, Portion, Serving};

impl fmt::Display for Portion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of a {}", self.amount, self.item)
    }
}

impl fmt::Display for Order {
    /// `Customer wants: 1/2 of a pizza. 1/3 of a cake.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer wants:")?;
        for portion in self.iter() {
            write!(f, " {portion}.")?;
        }
        Ok(())
    }
}

impl fmt::Display for Serving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Nothing served yet.");
        }
        write!(f, "Currently serving:")?;
        for (i, portion) in self.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{portion}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            ItemStatus::Matched { .. } => {
                write!(f, "Correctly served {} of a {}!", self.expected, self.item)
            }
            ItemStatus::Missing => write!(f, "Missing {} of a {}.", self.expected, self.item),
            ItemStatus::Mismatched { served } => write!(
                f,
                "Incorrect portion for {}. Expected {}, got {}.",
                self.item, self.expected, served
            ),
        }
    }
}

impl fmt::Display for EvaluationResult {
    /// The overall verdict, itemized on failure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return write!(f, "Order served correctly! Great job!");
        }
        write!(f, "Order incorrect:")?;
        for outcome in &self.outcomes {
            write!(f, " {outcome}")?;
        }
        for extra in &self.extras {
            write!(f, " Unexpected {extra}.")?;
        }
        write!(f, " Try again!")
    }
}
