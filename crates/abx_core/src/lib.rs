//! ABX Core - AnimBlueprint scene-export conversion.
//!
//! This crate provides:
//!
//! - **Document loading**: FModel JSON exports as `SceneDocument`
//! - **Node conversion**: per-category field mapping into Unreal
//!   AnimGraph paste-import blocks
//!
//! # Example
//!
//! ```ignore
//! use abx_core::abp::convert;
//!
//! // Convert an export and write the paste text next to it
//! let result = convert("ABP_Ch020.json", "Muscular.txt", "ABP_Ch020_C")?;
//! println!("Wrote {} nodes to {}",
//!     result.node_count,
//!     result.output_path.display());
//! ```

pub mod abp;

// Re-export commonly used types
pub use abp::{convert, Conversion, ExportError, ExportResult, SceneDocument};
