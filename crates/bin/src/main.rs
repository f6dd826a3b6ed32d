//! The plistpath CLI: typed, path-based reads and writes against a
//! JSON-persisted document.

mod cli;

use std::path::Path;

use chrono::{DateTime, Utc};
use clap::Parser;
use plistpath::{Dict, DocumentStore, MappingNode, MemoryStore, Value};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, KindArg};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("plistpath=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let document = load_document(&cli.file)?;
    let store = MemoryStore::from_document(document).auto_create(!cli.no_create);

    match &cli.command {
        Commands::Get(args) => {
            let (parents, leaf) = split_path(&args.path)?;
            let value = with_parent(&store, &parents, |node| node.read(leaf, args.kind));
            match value {
                Some(value) => print_value(&value)?,
                None => {
                    eprintln!("absent: {}", args.path);
                    std::process::exit(1);
                }
            }
        }
        Commands::Set(args) => {
            let (parents, leaf) = split_path(&args.path)?;
            let value = parse_value(args.kind, &args.value)?;
            with_parent(&store, &parents, |node| node.write(leaf, args.kind, value));
            save_document(&cli.file, &store.document())?;
        }
        Commands::Del(args) => {
            let (parents, leaf) = split_path(&args.path)?;
            with_parent(&store, &parents, |node| node.remove(leaf));
            save_document(&cli.file, &store.document())?;
        }
        Commands::Show => {
            println!("{}", serde_json::to_string_pretty(&store.document())?);
        }
    }

    Ok(())
}

/// Splits a dotted path into parent keys and a leaf key, rejecting empty
/// segments.
fn split_path(path: &str) -> Result<(Vec<&str>, &str), Box<dyn std::error::Error>> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(format!("invalid path '{path}': empty segment").into());
    }
    let (leaf, parents) = segments
        .split_last()
        .ok_or_else(|| format!("invalid path '{path}'"))?;
    Ok((parents.to_vec(), leaf))
}

/// Builds the accessor chain down to the leaf's parent mapping and runs `f`
/// on it. The parent is the root for single-segment paths.
fn with_parent<R>(
    store: &MemoryStore,
    parents: &[&str],
    f: impl FnOnce(&dyn ErasedMapping<'_>) -> R,
) -> R {
    match parents.split_first() {
        None => f(&store.root()),
        Some((first, rest)) => {
            let mut node = store.root().dict(*first);
            for key in rest {
                node = node.dict(*key);
            }
            f(&node)
        }
    }
}

/// Object-safe view over the two mapping-kind node types, so command
/// handlers take one parameter instead of being generic per call site.
trait ErasedMapping<'s> {
    fn read(&self, key: &str, kind: KindArg) -> Option<Value>;
    fn write(&self, key: &str, kind: KindArg, value: Value);
    fn remove(&self, key: &str);
}

impl<'s, N: MappingNode<'s, MemoryStore>> ErasedMapping<'s> for N {
    fn read(&self, key: &str, kind: KindArg) -> Option<Value> {
        match kind {
            KindArg::Text => self.string(key).get().map(Value::Text),
            KindArg::Int => self.integer(key).get().map(Value::Int),
            KindArg::Double => self.double(key).get().map(Value::Double),
            KindArg::Bool => self.boolean(key).get().map(Value::Bool),
            KindArg::Date => self.date(key).get().map(Value::Date),
            KindArg::Blob => self.blob(key).get().map(Value::Blob),
            KindArg::Array => self.array(key).get().map(Value::List),
            KindArg::Dict => self.dict(key).get().map(Value::Dict),
        }
    }

    fn write(&self, key: &str, kind: KindArg, value: Value) {
        match (kind, value) {
            (KindArg::Text, Value::Text(v)) => self.string(key).set(v),
            (KindArg::Int, Value::Int(v)) => self.integer(key).set(v),
            (KindArg::Double, Value::Double(v)) => self.double(key).set(v),
            (KindArg::Bool, Value::Bool(v)) => self.boolean(key).set(v),
            (KindArg::Date, Value::Date(v)) => self.date(key).set(v),
            (KindArg::Blob, Value::Blob(v)) => self.blob(key).set(v),
            (KindArg::Array, Value::List(v)) => self.array(key).set(v),
            (KindArg::Dict, Value::Dict(v)) => self.dict(key).set(v),
            // parse_value always produces the matching variant
            (_, _) => unreachable!("value kind does not match accessor kind"),
        }
    }

    // Deletes ignore the leaf kind; any typed accessor removes the key
    fn remove(&self, key: &str) {
        self.string(key).set(None);
    }
}

/// Parses a raw command-line value into the variant matching `kind`.
fn parse_value(kind: KindArg, raw: &str) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(match kind {
        KindArg::Text => Value::Text(raw.to_string()),
        KindArg::Int => Value::Int(raw.parse::<i64>()?),
        KindArg::Double => Value::Double(raw.parse::<f64>()?),
        KindArg::Bool => Value::Bool(raw.parse::<bool>()?),
        KindArg::Date => Value::Date(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc)),
        KindArg::Blob => Value::Blob(serde_json::from_str::<Vec<u8>>(raw)?),
        KindArg::Array => Value::List(serde_json::from_str::<Vec<Value>>(raw)?),
        KindArg::Dict => Value::Dict(serde_json::from_str::<Dict>(raw)?),
    })
}

/// Prints a value in its natural form: bare text, RFC 3339 dates, JSON for
/// containers and blobs.
fn print_value(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    match value {
        Value::Text(s) => println!("{s}"),
        Value::Date(d) => println!("{}", d.to_rfc3339()),
        Value::Blob(_) | Value::List(_) | Value::Dict(_) => {
            println!("{}", serde_json::to_string(value)?)
        }
        other => println!("{other}"),
    }
    Ok(())
}

fn load_document(path: &Path) -> Result<Dict, Box<dyn std::error::Error>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("document file {} not found, starting empty", path.display());
            Ok(Dict::new())
        }
        Err(e) => Err(e.into()),
    }
}

fn save_document(path: &Path, document: &Dict) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, serde_json::to_string_pretty(document)?)?;
    Ok(())
}
