//! Core repository components
//!
//! This module contains the storage building blocks:
//!
//! - `compression`: Zlib compression of stored payloads
//! - `database`: Content-addressed object database
//! - `repository`: High-level handle coordinating the other components
//! - `workspace`: Working directory file system operations

pub(crate) mod compression;
pub mod database;
pub mod repository;
pub mod workspace;
