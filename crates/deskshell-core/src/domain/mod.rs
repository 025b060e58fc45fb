//! Domain entities for deskshell.
//!
//! This module contains pure preference logic with no infrastructure
//! dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain**.  Domain code has **no** imports from OS
//! APIs, windowing toolkits, or file systems, and can be tested on any
//! platform without setup.
//!
//! For deskshell the domain is small: one flat record of optional fields, a
//! table with exactly one default per field, and the rule that merges the two.

/// The persisted preferences record and its value types.
pub mod document;

/// The compiled-in default table.
pub mod defaults;

/// The additive default-merge algorithm.
pub mod merge;

/// Name-keyed access to individual fields.
pub mod field;
