//! Drover - a yum/rpm package-state adapter for configuration agents
//!
//! The `drover` library turns the textual interface of a yum-style package
//! tool and the rpm database into a small set of structured operations:
//! query installed versions, query available versions, install, upgrade,
//! remove, and compare versions. Mutating operations report their effect by
//! snapshotting the installed set before and after the tool runs and diffing
//! the two snapshots.
//!
//! # Architecture
//!
//! The library follows a ports-and-adapters layout. The orchestration logic
//! never touches a subprocess or the filesystem directly; it talks to a
//! [`commands::runner::CommandRunner`], a [`pkg::port::PackageDatabase`], and
//! a [`pkg::port::HostFacts`] provider, all injected at construction. This
//! keeps every operation testable against scripted doubles.
//!
//! # Main Components
//!
//! - [`pkg`] - command composition, output parsing, snapshots, diffing,
//!   version comparison, and the operation service
//! - [`commands`] - command execution abstractions
//! - [`config`] - application configuration management
//! - [`facts`] - host applicability predicate

pub mod commands;
pub mod config;
pub mod facts;
pub mod pkg;
