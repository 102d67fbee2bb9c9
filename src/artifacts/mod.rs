//! Data structures stored in the object database
//!
//! - `objects`: the object kinds (blob, tree, commit) and their codec

pub mod objects;
