//! Guard conditions over integer variables.
//!
//! A condition compares the *current* value of one variable against a
//! literal. Conditions are pure: checking one never changes the store.

use super::variables::Variables;
use std::fmt;

/// Integer comparison that gates whether a transition is eligible.
///
/// # Example
///
/// ```rust
/// use eventgraph::core::{Condition, Variables};
///
/// let mut vars = Variables::new();
/// vars.declare("track");
///
/// let at_start = Condition::Equals {
///     variable: "track".to_string(),
///     value: 0,
/// };
///
/// assert!(at_start.check(&vars));
/// vars.set("track", 3);
/// assert!(!at_start.check(&vars));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    Equals { variable: String, value: i64 },
    GreaterThan { variable: String, value: i64 },
    LessThan { variable: String, value: i64 },
}

impl Condition {
    /// Name of the variable this condition inspects.
    pub fn variable(&self) -> &str {
        match self {
            Self::Equals { variable, .. }
            | Self::GreaterThan { variable, .. }
            | Self::LessThan { variable, .. } => variable,
        }
    }

    /// Literal the variable is compared against.
    pub fn value(&self) -> i64 {
        match self {
            Self::Equals { value, .. }
            | Self::GreaterThan { value, .. }
            | Self::LessThan { value, .. } => *value,
        }
    }

    /// Evaluate against the store. Undeclared variables read as `0`.
    pub fn check(&self, variables: &Variables) -> bool {
        let current = variables.get(self.variable());
        match self {
            Self::Equals { value, .. } => current == *value,
            Self::GreaterThan { value, .. } => current > *value,
            Self::LessThan { value, .. } => current < *value,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Self::Equals { .. } => "==",
            Self::GreaterThan { .. } => ">",
            Self::LessThan { .. } => "<",
        };
        write!(f, "{} {} {}", self.variable(), op, self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(value: i64) -> Variables {
        let mut vars = Variables::new();
        vars.set("x", value);
        vars
    }

    #[test]
    fn equals_matches_exact_value() {
        let cond = Condition::Equals {
            variable: "x".to_string(),
            value: 42,
        };

        assert!(cond.check(&vars(42)));
        assert!(!cond.check(&vars(41)));
    }

    #[test]
    fn greater_than_is_strict() {
        let cond = Condition::GreaterThan {
            variable: "x".to_string(),
            value: 1,
        };

        assert!(cond.check(&vars(2)));
        assert!(!cond.check(&vars(1)));
        assert!(!cond.check(&vars(0)));
    }

    #[test]
    fn less_than_is_strict() {
        let cond = Condition::LessThan {
            variable: "x".to_string(),
            value: 11,
        };

        assert!(cond.check(&vars(10)));
        assert!(!cond.check(&vars(11)));
    }

    #[test]
    fn undeclared_variable_compares_as_zero() {
        let cond = Condition::GreaterThan {
            variable: "missing".to_string(),
            value: -1,
        };

        assert!(cond.check(&Variables::new()));
    }

    #[test]
    fn check_is_deterministic() {
        let cond = Condition::LessThan {
            variable: "x".to_string(),
            value: 5,
        };
        let store = vars(3);

        assert_eq!(cond.check(&store), cond.check(&store));
    }

    #[test]
    fn display_shows_comparison() {
        let cond = Condition::GreaterThan {
            variable: "track".to_string(),
            value: 1,
        };
        assert_eq!(cond.to_string(), "track > 1");
    }
}
