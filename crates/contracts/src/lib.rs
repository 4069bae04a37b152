//! Wire contracts shared between the crisis frontend and the ajax server.
//!
//! All payloads use the PascalCase keys the server emits (`Amount`, `TypeNum`, ...).

pub mod domain;
