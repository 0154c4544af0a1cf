//! Supported resource document formats for resxcat.
//!
//! Currently the only source format is the .NET `.resx` resource document.

pub mod resx;

// Reexporting the formats for easier access
pub use resx::Format as ResxFormat;
