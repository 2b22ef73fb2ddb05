//! Registration service: validate, construct, register
//!
//! Every operation follows the same shape: validate all inputs up front,
//! build the owned entity, then register it in the model. Nothing is
//! registered when any validation fails.

use std::sync::Arc;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::model::ResistanceModel;
use crate::domain::{parse_event_time, Movement, Protest, Protester};
use crate::infrastructure::traits::Geocoder;

/// Service that validates input and mutates the model.
pub struct ResistanceManager {
    geocoder: Arc<dyn Geocoder>,
}

impl ResistanceManager {
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    /// Register a new member. Returns the registered display name.
    pub fn add_member(
        &self,
        model: &mut ResistanceModel,
        name: &str,
        email: &str,
        zip: &str,
    ) -> ApplicationResult<String> {
        let name = required_name(name, "member name")?;
        if !email_plausible(email) {
            return Err(ApplicationError::validation(
                "email",
                format!("'{}' does not look like an email address", email.trim()),
            ));
        }
        if model.has_member(&name) {
            return Err(ApplicationError::DuplicateName {
                kind: "member",
                name,
            });
        }
        let location = self.geocoder.locate(zip)?;

        debug!(member = %name, zip = location.zip(), "registering member");
        model.register_member(Protester::new(name.clone(), email.trim().to_string(), location));
        Ok(name)
    }

    /// Register a new protest. Returns the registered display name.
    pub fn add_protest(
        &self,
        model: &mut ResistanceModel,
        name: &str,
        zip: &str,
        datetime_text: &str,
    ) -> ApplicationResult<String> {
        let name = required_name(name, "protest title")?;
        if model.has_protest(&name) {
            return Err(ApplicationError::DuplicateName {
                kind: "protest",
                name,
            });
        }
        let location = self.geocoder.locate(zip)?;
        let time = parse_event_time(datetime_text)?;

        debug!(protest = %name, zip = location.zip(), %time, "registering protest");
        model.register_protest(Protest::new(name.clone(), location, time, None, None));
        Ok(name)
    }

    /// Register a new movement. Returns the registered display name.
    pub fn add_movement(
        &self,
        model: &mut ResistanceModel,
        name: &str,
    ) -> ApplicationResult<String> {
        let name = required_name(name, "movement title")?;
        if model.has_movement(&name) {
            return Err(ApplicationError::DuplicateName {
                kind: "movement",
                name,
            });
        }

        debug!(movement = %name, "registering movement");
        model.register_movement(Movement::new(name.clone()));
        Ok(name)
    }
}

fn required_name(raw: &str, field: &'static str) -> ApplicationResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ApplicationError::validation(field, "must not be empty"));
    }
    Ok(name.to_string())
}

/// Syntactic plausibility only: something@something.something.
fn email_plausible(email: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| {
        Regex::new(r"^\S+@\S+\.\S+$").expect("static email pattern compiles")
    });
    re.is_match(email.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_plausible() {
        assert!(email_plausible("alice@x.com"));
        assert!(email_plausible("  a.b+c@sub.example.org "));
        assert!(!email_plausible("alice"));
        assert!(!email_plausible("alice@nodot"));
        assert!(!email_plausible("a b@x.com"));
        assert!(!email_plausible(""));
    }
}
