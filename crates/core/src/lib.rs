// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! arbor-core: issue relationship inference and forest assembly.
//!
//! This crate turns a flat batch of issues into a forest: the [`infer`]
//! module reads relationships out of issue text and labels, and the
//! [`forest`] module nests issues under their parents. It also carries the
//! [`countdown`] arithmetic used by the `arbor countdown` command. Nothing
//! here performs I/O.

pub mod countdown;
pub mod error;
pub mod forest;
pub mod infer;
pub mod issue;
pub mod relation;
pub mod topics;

pub use countdown::{describe, Remaining, Unit};
pub use error::{Error, Result};
pub use forest::{build, validate, ForestStats};
pub use infer::{infer, Inference, InferenceEngine};
pub use issue::{Comment, Issue, IssueId, IssueState, EPIC_LABEL, GHOST_AUTHOR, SUB_TASK_LABEL};
pub use relation::{Assignment, Relationship, RelationshipMap, Rule};
pub use topics::{KeywordTopics, Relatedness};
