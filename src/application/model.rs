//! Aggregate root: the resistance model
//!
//! Owns the three name-keyed registries and provides search, linking,
//! proximity queries, and the serializable snapshot of the whole aggregate.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{name_key, Location, Movement, Protest, Protester};

/// The full in-memory aggregate.
///
/// Registries are keyed by the lowercased entity name, which makes the
/// iteration (and therefore search-result) order deterministic: ascending
/// by canonical name.
#[derive(Debug, Default)]
pub struct ResistanceModel {
    protesters: BTreeMap<String, Protester>,
    protests: BTreeMap<String, Protest>,
    movements: BTreeMap<String, Movement>,
}

/// Serializable form of the whole aggregate. Round-trips losslessly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResistanceSnapshot {
    #[serde(default)]
    pub protesters: Vec<Protester>,
    #[serde(default)]
    pub protests: Vec<Protest>,
    #[serde(default)]
    pub movements: Vec<Movement>,
}

impl ResistanceModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- registration (used by the manager and by merge) ----

    /// Insert a member, replacing any entry under the same canonical name.
    pub fn register_member(&mut self, protester: Protester) {
        self.protesters.insert(name_key(protester.name()), protester);
    }

    pub fn register_protest(&mut self, protest: Protest) {
        self.protests.insert(name_key(protest.name()), protest);
    }

    pub fn register_movement(&mut self, movement: Movement) {
        self.movements.insert(name_key(movement.name()), movement);
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.protesters.contains_key(&name_key(name))
    }

    pub fn has_protest(&self, name: &str) -> bool {
        self.protests.contains_key(&name_key(name))
    }

    pub fn has_movement(&self, name: &str) -> bool {
        self.movements.contains_key(&name_key(name))
    }

    // ---- search ----

    /// Member names containing `query` (case-insensitive). An empty query
    /// matches everything. Order: ascending by canonical name.
    pub fn find_member_names(&self, query: &str) -> Vec<String> {
        Self::find_names(self.protesters.values().map(Protester::name), query)
    }

    pub fn find_protest_names(&self, query: &str) -> Vec<String> {
        Self::find_names(self.protests.values().map(Protest::name), query)
    }

    pub fn find_movement_names(&self, query: &str) -> Vec<String> {
        Self::find_names(self.movements.values().map(Movement::name), query)
    }

    fn find_names<'a>(names: impl Iterator<Item = &'a str>, query: &str) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        names
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(str::to_string)
            .collect()
    }

    // ---- linking ----

    /// Link a member into a protest's roster.
    ///
    /// A miss on either name is an error; `Ok(false)` means the member was
    /// already on the roster (the duplicate is absorbed silently).
    pub fn add_member_to_protest(
        &mut self,
        member_name: &str,
        protest_name: &str,
    ) -> ApplicationResult<bool> {
        let member = self
            .protesters
            .get(&name_key(member_name))
            .ok_or_else(|| ApplicationError::UnknownMember(member_name.to_string()))?;
        let protest = self
            .protests
            .get_mut(&name_key(protest_name))
            .ok_or_else(|| ApplicationError::UnknownProtest(protest_name.to_string()))?;
        let inserted = protest.add_protester(member);
        debug!(member = member_name, protest = protest_name, inserted);
        Ok(inserted)
    }

    /// Record a protest's affiliation with a movement. Same contract as
    /// [`Self::add_member_to_protest`].
    pub fn add_protest_to_movement(
        &mut self,
        protest_name: &str,
        movement_name: &str,
    ) -> ApplicationResult<bool> {
        let movement = self
            .movements
            .get(&name_key(movement_name))
            .ok_or_else(|| ApplicationError::UnknownMovement(movement_name.to_string()))?;
        let protest = self
            .protests
            .get_mut(&name_key(protest_name))
            .ok_or_else(|| ApplicationError::UnknownProtest(protest_name.to_string()))?;
        let inserted = protest.add_movement(movement);
        debug!(protest = protest_name, movement = movement_name, inserted);
        Ok(inserted)
    }

    // ---- mutation ----

    /// Apply a partial update to a protest. Renaming re-keys the registry;
    /// renaming onto a different existing protest is rejected.
    pub fn modify_protest(
        &mut self,
        protest_name: &str,
        new_name: Option<&str>,
        new_time: Option<DateTime<Utc>>,
    ) -> ApplicationResult<()> {
        let key = name_key(protest_name);
        if !self.protests.contains_key(&key) {
            return Err(ApplicationError::UnknownProtest(protest_name.to_string()));
        }

        let rename_target = new_name
            .map(|n| n.trim())
            .filter(|n| !n.is_empty() && name_key(n) != key);
        if let Some(name) = rename_target {
            if self.protests.contains_key(&name_key(name)) {
                return Err(ApplicationError::DuplicateName {
                    kind: "protest",
                    name: name.to_string(),
                });
            }
        }

        // Checked above, the key is present.
        let mut protest = match self.protests.remove(&key) {
            Some(p) => p,
            None => return Err(ApplicationError::UnknownProtest(protest_name.to_string())),
        };
        protest.modify(new_name, new_time);
        self.protests.insert(name_key(protest.name()), protest);
        Ok(())
    }

    // ---- queries ----

    /// Roster of a protest rendered for display, in roster order.
    /// Errors when the protest does not exist; an empty roster is `Ok`.
    pub fn get_protesters(&self, protest_name: &str) -> ApplicationResult<Vec<String>> {
        let protest = self
            .protests
            .get(&name_key(protest_name))
            .ok_or_else(|| ApplicationError::UnknownProtest(protest_name.to_string()))?;
        Ok(protest
            .protesters()
            .iter()
            .map(|name| match self.protesters.get(&name_key(name)) {
                Some(member) => member.display(),
                None => name.to_string(),
            })
            .collect())
    }

    /// All registered members within `radius_miles` of the protest's
    /// location (inclusive), rendered for display.
    pub fn users_near_protest(
        &self,
        protest_name: &str,
        radius_miles: f64,
    ) -> ApplicationResult<Vec<String>> {
        let protest = self
            .protests
            .get(&name_key(protest_name))
            .ok_or_else(|| ApplicationError::UnknownProtest(protest_name.to_string()))?;
        Ok(self
            .protesters
            .values()
            .filter(|member| member.location().distance_to(protest.location()) <= radius_miles)
            .map(Protester::display)
            .collect())
    }

    /// Protests within `radius_miles` of `origin` (inclusive), each
    /// rendered with its scheduled time and movement memberships.
    pub fn nearby_protests(&self, origin: &Location, radius_miles: f64) -> Vec<String> {
        self.protests
            .values()
            .filter(|protest| protest.location().distance_to(origin) <= radius_miles)
            .map(render_protest)
            .collect()
    }

    // ---- snapshot ----

    /// Clone the aggregate into its serializable form, in registry order.
    pub fn snapshot(&self) -> ResistanceSnapshot {
        ResistanceSnapshot {
            protesters: self.protesters.values().cloned().collect(),
            protests: self.protests.values().cloned().collect(),
            movements: self.movements.values().cloned().collect(),
        }
    }

    /// Merge a loaded snapshot into the model: union by canonical name,
    /// last-loaded wins on conflict.
    pub fn merge(&mut self, snapshot: ResistanceSnapshot) {
        debug!(
            protesters = snapshot.protesters.len(),
            protests = snapshot.protests.len(),
            movements = snapshot.movements.len(),
            "merging snapshot"
        );
        for protester in snapshot.protesters {
            self.register_member(protester);
        }
        for protest in snapshot.protests {
            self.register_protest(protest);
        }
        for movement in snapshot.movements {
            self.register_movement(movement);
        }
    }

    pub fn member_count(&self) -> usize {
        self.protesters.len()
    }

    pub fn protest_count(&self) -> usize {
        self.protests.len()
    }

    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }
}

fn render_protest(protest: &Protest) -> String {
    let movements = if protest.movements().is_empty() {
        "none".to_string()
    } else {
        protest.movements().iter().join(", ")
    };
    format!(
        "{} on {} (movements: {})",
        protest.name(),
        protest.time().format("%b %d %Y %H:%M UTC"),
        movements
    )
}
