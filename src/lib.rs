// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # astdot
//!
//! Builds a small abstract syntax tree and renders it as a Graphviz DOT document.
//!
//! The crate produces text only. Rendering the document into an image is left to
//! Graphviz, e.g. `astdot > tree.dot && dot -T jpg tree.dot > tree.jpg`.
//!
//! ## Architecture
//!
//! - [`graph`] - [`GraphBuilder`] allocates node identifiers and renders node and edge fragments
//! - [`dot`] - wraps fragments into a complete `strict digraph` document
//! - [`example`] - the hardcoded `(1 - 2) + 3` tree and the function that writes it out
//!
//! No input is validated. Labels and edge options are copied into the document
//! verbatim, and edges may name identifiers that were never declared. Callers who
//! need safe labels can use [`dot::escape_dot`].
//!
//! ## Quick Start
//!
//! ```rust
//! use astdot::{dot, example, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! let document = dot::create_wrapper(&example::build_example_tree(&mut builder));
//!
//! assert_eq!(
//!     document,
//!     "strict digraph X {\n\
//!      x0 [label=\"-\",shape=circle]\n\
//!      x1 [label=\"+\",shape=circle]\n\
//!      x2 [label=\"1\",shape=circle]\n\
//!      x3 [label=\"2\",shape=circle]\n\
//!      x4 [label=\"3\",shape=circle]\n\
//!      x0 -> x2\n\
//!      x0 -> x3\n\
//!      x1 -> x0\n\
//!      x1 -> x4\n\
//!      }"
//! );
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade. Node and edge creation is logged at
//! `trace`, building and emitting the example at `debug`. Nothing is logged to stdout.

pub(crate) mod error;

pub mod dot;
pub mod example;
pub mod graph;

/// `astdot` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `astdot` Error type
///
/// Returned when a finished document cannot be written to its destination.
pub use error::Error;

/// The identifier allocator and node renderer.
pub use graph::GraphBuilder;
