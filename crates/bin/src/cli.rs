//! CLI argument definitions for the plistpath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Value kind selecting which typed accessor a path's leaf uses
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// UTF-8 text
    Text,
    /// 64-bit signed integer
    Int,
    /// 64-bit float
    Double,
    /// Boolean
    Bool,
    /// RFC 3339 timestamp
    Date,
    /// Byte blob, written as a JSON byte array
    Blob,
    /// Sequence, written as a JSON array
    Array,
    /// Nested mapping, written as a JSON object
    Dict,
}

/// Typed, path-based access to a JSON-persisted property-list document
#[derive(Parser, Debug)]
#[command(name = "plistpath")]
#[command(about = "Typed, path-based access to a property-list document")]
#[command(version)]
pub struct Cli {
    /// Document file (JSON-encoded mapping)
    #[arg(short, long, env = "PLISTPATH_FILE")]
    pub file: PathBuf,

    /// Do not create missing intermediate mappings on writes
    #[arg(long, env = "PLISTPATH_NO_CREATE")]
    pub no_create: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the value at a dotted path
    Get(GetArgs),
    /// Write a value at a dotted path
    Set(SetArgs),
    /// Delete the key at a dotted path
    Del(DelArgs),
    /// Pretty-print the whole document
    Show,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Kind of the value at the leaf
    #[arg(short, long, default_value = "text")]
    pub kind: KindArg,

    /// Dotted path, e.g. `user.profile.name`
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Kind of the value at the leaf
    #[arg(short, long, default_value = "text")]
    pub kind: KindArg,

    /// Dotted path, e.g. `user.profile.name`
    pub path: String,

    /// The value, formatted per --kind
    pub value: String,
}

/// Arguments for the del command
#[derive(clap::Args, Debug)]
pub struct DelArgs {
    /// Dotted path, e.g. `user.profile.name`
    pub path: String,
}
