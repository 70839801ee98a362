//! # Breaking Object Algebras
//!
//! An exploration of the Expression Problem: how to define a small language
//! and several interpretations of it so that both new constructors and new
//! interpretations can be added without touching existing code, and so that
//! independent languages can be composed.
//!
//! The encoding explored here is *object algebras*: a language is a trait
//! with one method per constructor, an interpretation is a type implementing
//! that trait, and a program is a function generic over the trait.
//!
//! ## Variants
//!
//! | Module | Idea | Where it bends |
//! |--------|------|----------------|
//! | [`classic`] | Contract with an associated carrier; extensions forward to the base | Nowhere: language mismatches are compile errors |
//! | [`generic`] | Carrier as a type parameter; interpretations become opt-in templates | Nowhere, and languages compose (two and five carriers) |
//! | [`model`] | Syntax reified as a tree; algebras dispatch on node tags | An extended tree type-checks against a base algebra and fails at runtime |
//! | [`fsm`] | The model pattern on a graph with cross-links | Base algebras silently treat guarded transitions as plain |
//!
//! ## Data Flow
//!
//! ```text
//! builder(alg) ──constructor calls──> carrier ──observation──> String / i32 / bool / output
//! ```
//!
//! Carriers are either capability objects ([`carrier`]) whose observation is
//! deferred until asked for, or plain values computed on the spot. Nothing is
//! shared or mutated; every algebra is a stateless unit (or wrapper) struct.
//!
//! ## Module Structure
//!
//! - [`carrier`] - Capability carriers shared by all variants
//! - [`classic`] - Classic object algebras (V1)
//! - [`generic`] - Generic denotations and language composition (V2)
//! - [`model`] - Reified syntax trees with dispatching algebras (V3)
//! - [`fsm`] - Finite-state machines as a graph-shaped model (V4)
//! - [`error`] - Dispatch and machine construction errors
//! - [`demo`] - Drivers printing every sample observation
//!
//! ## Example
//!
//! ```
//! use breaking_oa::classic::{AltEval, PrintExp, make_exp};
//!
//! assert_eq!(make_exp(&PrintExp).print(), "2 + 3 * 4");
//! assert_eq!(make_exp(&AltEval), 14);
//! ```

pub mod carrier;
pub mod classic;
pub mod demo;
pub mod error;
pub mod fsm;
pub mod generic;
pub mod model;
