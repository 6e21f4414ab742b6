//! AnimBlueprint scene-export support.
//!
//! This module converts FModel JSON exports of an animation blueprint's
//! node graph into the textual object blocks Unreal's AnimGraph editor
//! accepts on paste.
//!
//! ## Supported Node Categories
//!
//! - `AnimGraphNode_KawaiiPhysics`: bone-chain physics with limit shapes
//! - `AnimGraphNode_ModifyBone`: per-bone transform overrides
//! - `AnimGraphNode_CopyBone`: bone-to-bone transform copy
//! - `AnimGraphNode_Constraint`: constraint setups and weights
//! - `AnimGraphNode_RotationMultiplier`: twist-bone rotation scaling
//! - `AnimGraphNode_LayeredBoneBlend`: branch-filtered pose layering
//! - `AnimGraphNode_RigidBody`: simulated-body settings
//! - Any other `AnimGraphNode_` key: emitted with base fields only
//!
//! Property keys outside the `AnimGraphNode_` namespace (pin defaults,
//! graph metadata) are skipped.
//!
//! # Example
//!
//! ```ignore
//! use abx_core::abp::{SceneDocument, export_document};
//!
//! let document = SceneDocument::load("ABP_Ch020.json")?;
//! let text = export_document(&document, "ABP_Ch020_C")?;
//! ```

use thiserror::Error;

mod document;
mod export;
mod fmt;
mod nodes;

pub use document::*;
pub use export::*;
pub use fmt::*;
pub use nodes::*;

/// Errors that can occur while converting a scene export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no record with Type \"{0}\" in document")]
    NotFound(String),

    #[error("node \"{key}\": missing required field `{field}`")]
    MissingField { key: String, field: String },
}

/// Result type for conversion operations.
pub type ExportResult<T> = Result<T, ExportError>;
