//! Core library for fizzbuzz
//!
//! This crate implements the **Functional Core** of the fizzbuzz application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The fizzbuzz project uses a two-crate architecture to enforce separation of
//! concerns:
//!
//! - **`fizzbuzz_core`** (this crate): Pure transformation functions with zero I/O
//! - **`fizzbuzz`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`convert`]: Number to FizzBuzz string transformations
//! - [`validate`]: Input classification (the validator and its error type)
//! - [`process`]: Validation + conversion pipelines producing result models
//!
//! Each module contains the domain functions plus comprehensive unit tests
//! using fixture data (no mocking).
//!
//! # Example Usage
//!
//! ```
//! use fizzbuzz_core::process::process_input;
//!
//! let conversions = process_input("3,15,7,20,5").expect("valid batch");
//!
//! assert_eq!(conversions[0].result, "Fizz");
//! assert_eq!(conversions[1].result, "FizzBuzz");
//! assert_eq!(conversions[2].number, 7);
//! ```
//!
//! # Pattern Reference
//!
//! This architecture is based on Gary Bernhardt's Functional Core, Imperative
//! Shell pattern. The key insight: **data transformation logic should be pure
//! and ignorant of where data comes from or where it goes**.

pub mod convert;
pub mod process;
pub mod validate;
