//! exgen scaffolds object-oriented design exercises from templates.
//! Metadata comes from a small indentation-sensitive question registry;
//! rendering is literal token substitution plus a package-path remap so a
//! single template serves arbitrarily many exercises.

/// Command-line interface module for the exgen application
pub mod cli;

/// Repository layout resolution (registry, templates, exercises)
pub mod config;

/// Common constants: sentinel strings, text extensions, default paths
pub mod constants;

/// Error types and handling for the exgen application
pub mod error;

/// Registry listing output (record lines, footer, JSON)
pub mod listing;

/// Logger configuration
pub mod logger;

/// Orchestration of one exercise generation
pub mod processor;

/// Registry parser: records, the parsing state machine, lookup by slug
pub mod registry;

/// Package directory relocation after rendering
pub mod remap;

/// Template tree rendering with token and sentinel substitution
pub mod renderer;

/// Slug normalization and collision-free slug suggestions
pub mod slug;

/// Repository structure checks and external build invocation
pub mod validate;
