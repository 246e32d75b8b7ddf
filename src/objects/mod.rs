//! Per-type object schemas.
//!
//! Each module builds its schema once, lazily, from the shared bases in
//! [`common`]. Every schema states its full required set explicitly rather
//! than inheriting requiredness from the base.

pub mod campaign;
pub mod collection;
pub mod common;
pub mod data_component;
pub mod data_source;
pub mod group;
pub mod identity;
pub mod marking_definition;
pub mod mitigation;
pub mod relationship;
pub mod software;
pub mod tactic;
pub mod technique;
