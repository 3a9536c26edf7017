//! Landing classification for ship contacts.
//!
//! A contact is a landing when the ship is both slow enough and close
//! enough to the surface; anything else is a crash. Approach angle is
//! recorded on the event but not part of the rule.

use std::fmt;

use crate::collision::CollisionEvent;
use crate::config::LandingCriteria;

/// Result of a ship contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingOutcome {
    Success,
    Failure,
}

impl LandingOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, LandingOutcome::Success)
    }
}

impl fmt::Display for LandingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandingOutcome::Success => write!(f, "landed"),
            LandingOutcome::Failure => write!(f, "crashed"),
        }
    }
}

/// Terminal result of a session: how it ended and the contact that ended it.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionOutcome {
    pub outcome: LandingOutcome,
    pub event: CollisionEvent,
}

impl SessionOutcome {
    /// Headline for the game-over overlay.
    pub fn headline(&self) -> &'static str {
        match self.outcome {
            LandingOutcome::Success => "Landing successful!",
            LandingOutcome::Failure => "Crashed...",
        }
    }

    /// One-line description naming the body.
    pub fn message(&self) -> String {
        match self.outcome {
            LandingOutcome::Success => {
                format!("You touched down on {}.", self.event.body_name)
            }
            LandingOutcome::Failure => format!(
                "You hit {} at {:.1} m/s. Too fast.",
                self.event.body_name, self.event.impact_speed
            ),
        }
    }
}

/// Classify a contact: success iff speed and altitude are both under their
/// thresholds.
pub fn classify(event: &CollisionEvent, criteria: &LandingCriteria) -> LandingOutcome {
    if event.impact_speed < criteria.max_velocity && event.altitude < criteria.max_altitude {
        LandingOutcome::Success
    } else {
        LandingOutcome::Failure
    }
}
