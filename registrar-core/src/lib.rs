//! Registrar core library — validation, entities, registry facade, roster input.
//!
//! Public API surface:
//! - [`validation`] — field format rules shared by every constructor
//! - [`error`] — [`ValidationError`], [`RosterError`]
//! - [`types`] — identifier newtypes and [`Role`]
//! - [`person`] — [`Person`] capability with [`Student`] and [`Instructor`]
//! - [`course`] — [`Course`] and its capacity-bounded enrollment list
//! - [`registry`] — [`Registry`], the keyed facade over all three collections
//! - [`roster`] — YAML roster files that seed a registry

pub mod course;
pub mod error;
pub mod person;
pub mod registry;
pub mod roster;
pub mod types;
pub mod validation;

pub use course::Course;
pub use error::{Field, RosterError, ValidationError};
pub use person::{Instructor, Person, PersonInfo, Profile, Student};
pub use registry::{Registry, Summary};
pub use roster::{load_roster_at, Action, ApplyReport, Outcome, Roster};
pub use types::{CourseCode, InstructorId, Role, StudentId};
