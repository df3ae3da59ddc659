//! Effective values of an edition's inheritable fields.
//!
//! An edition may leave `distance`, `elevation`, `max_participants` and `city`
//! empty. An empty field means "inherit": the first three come from the
//! competition's base values, the city from the event. An empty value at every
//! level stays absent; it never turns into zero or an empty string.

use serde::Serialize;

use crate::error::{Result, TrailError};
use crate::model::{Competition, Edition, EditionWithInheritance, Event};

/// A field value together with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "camelCase")]
pub enum Resolved<T> {
    /// Set on the edition itself.
    Own(T),
    /// Taken from the parent competition or event.
    Inherited(T),
    /// Empty at every level.
    Absent,
}

impl<T> Resolved<T> {
    /// Own value if present, otherwise the parent's, otherwise absent.
    pub fn from_chain(own: Option<T>, parent: Option<T>) -> Self {
        match (own, parent) {
            (Some(value), _) => Resolved::Own(value),
            (None, Some(value)) => Resolved::Inherited(value),
            (None, None) => Resolved::Absent,
        }
    }

    /// The effective value, wherever it came from.
    pub fn value(&self) -> Option<&T> {
        match self {
            Resolved::Own(value) | Resolved::Inherited(value) => Some(value),
            Resolved::Absent => None,
        }
    }

    /// Like [`Resolved::value`], consuming `self`.
    pub fn into_value(self) -> Option<T> {
        match self {
            Resolved::Own(value) | Resolved::Inherited(value) => Some(value),
            Resolved::Absent => None,
        }
    }

    /// Whether the value came from a parent.
    pub fn is_inherited(&self) -> bool {
        matches!(self, Resolved::Inherited(_))
    }

    /// Whether the edition sets the value itself.
    pub fn is_own(&self) -> bool {
        matches!(self, Resolved::Own(_))
    }

    /// Borrow the value, keeping its provenance.
    pub fn as_ref(&self) -> Resolved<&T> {
        match self {
            Resolved::Own(value) => Resolved::Own(value),
            Resolved::Inherited(value) => Resolved::Inherited(value),
            Resolved::Absent => Resolved::Absent,
        }
    }

    /// Transform the value, keeping its provenance.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resolved<U> {
        match self {
            Resolved::Own(value) => Resolved::Own(f(value)),
            Resolved::Inherited(value) => Resolved::Inherited(f(value)),
            Resolved::Absent => Resolved::Absent,
        }
    }
}

/// The effective values of one edition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEdition {
    pub edition_id: u32,
    /// Kilometres.
    pub distance: Resolved<f64>,
    /// Metres of positive elevation gain.
    pub elevation: Resolved<u32>,
    pub max_participants: Resolved<u32>,
    pub city: Resolved<String>,
}

impl ResolvedEdition {
    /// The wire shape served by `/editions/:id/with-inheritance`.
    pub fn into_with_inheritance(self, edition: Edition) -> EditionWithInheritance {
        EditionWithInheritance {
            edition,
            resolved_distance: self.distance.into_value(),
            resolved_elevation: self.elevation.into_value(),
            resolved_max_participants: self.max_participants.into_value(),
            resolved_city: self.city.into_value(),
        }
    }
}

/// Resolve an edition against its parents.
///
/// Fails with [`TrailError::MissingParent`] when the competition or event is
/// missing, or when the one given is not the parent the child points to.
pub fn resolve_edition(
    edition: &Edition,
    competition: Option<&Competition>,
    event: Option<&Event>,
) -> Result<ResolvedEdition> {
    let competition = competition
        .filter(|c| c.id == edition.competition_id)
        .ok_or(TrailError::MissingParent {
            entity: "edition",
            id: edition.id,
            parent: "competition",
        })?;
    let event = event
        .filter(|e| e.id == competition.event_id)
        .ok_or(TrailError::MissingParent {
            entity: "competition",
            id: competition.id,
            parent: "event",
        })?;

    Ok(ResolvedEdition {
        edition_id: edition.id,
        distance: Resolved::from_chain(edition.distance, competition.base_distance),
        elevation: Resolved::from_chain(edition.elevation, competition.base_elevation),
        max_participants: Resolved::from_chain(
            edition.max_participants,
            competition.base_max_participants,
        ),
        city: Resolved::from_chain(edition.city.clone(), event.city.clone()),
    })
}

/// Resolve an edition, finding its parents among already loaded records.
pub fn resolve_in(
    edition: &Edition,
    competitions: &[Competition],
    events: &[Event],
) -> Result<ResolvedEdition> {
    let competition = competitions
        .iter()
        .find(|c| c.id == edition.competition_id);
    let event =
        competition.and_then(|c| events.iter().find(|e| e.id == c.event_id));
    resolve_edition(edition, competition, event)
}
