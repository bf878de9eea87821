//! # Partyboard
//!
//! Read-only party roster API and polling viewer for a tabletop RPG bot.
//!
//! The bot owns a relational store of adventures, characters, and their
//! skills, equipment, and spells. Partyboard projects that store through a
//! small REST API and drives a polling terminal viewer over it. Nothing here
//! ever writes to the store.
//!
//! ## Modules
//!
//! - [`domain`]: Entities and strongly-typed identifiers
//! - [`application`]: Ports, DTOs, and the character aggregation services
//! - [`infrastructure`]: Configuration, MySQL adapters, and HTTP routes
//! - [`client`]: Typed API client, view-state machine, and refresh scheduler

pub mod application;
pub mod client;
pub mod domain;
pub mod infrastructure;
