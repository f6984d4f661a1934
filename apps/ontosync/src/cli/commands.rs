//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use ontosync_core::{
    Axiom, AxiomKind, AxiomStore, Graph, InternalModel, Profile, SyncConfig, SyncError, Triple,
    SyncModel, graph_from_bytes, graph_to_bytes, open,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE LIMITS
// =============================================================================

/// Maximum size of an input graph file (500 MB).
const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Maximum size of a configuration file (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), SyncError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| SyncError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(SyncError::DeserializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Canonicalize an input path and require a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, SyncError> {
    let canonical = path.canonicalize().map_err(|e| {
        SyncError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(SyncError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Canonicalize the parent of an output path and require a directory.
fn validate_output_path(path: &Path) -> Result<PathBuf, SyncError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        SyncError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(SyncError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| SyncError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

// =============================================================================
// LOADING
// =============================================================================

/// Build the engine configuration from an optional TOML file plus flags.
///
/// `--strict` overrides the file's profile; `--raw` disables the pipeline.
pub fn load_config(path: Option<&Path>, strict: bool, raw: bool) -> Result<SyncConfig, SyncError> {
    let mut config = match path {
        Some(path) => {
            let path = validate_file_path(path)?;
            validate_file_size(&path, MAX_CONFIG_FILE_SIZE)?;
            let text = std::fs::read_to_string(&path)
                .map_err(|e| SyncError::IoError(format!("Cannot read config: {}", e)))?;
            SyncConfig::from_toml_str(&text)?
        }
        None => SyncConfig::default(),
    };

    if strict {
        config.profile = Profile::Strict;
    }
    if raw {
        config.transform = false;
    }
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// Read a graph: `.json` files hold a triple array, anything else a snapshot.
pub fn read_graph(path: &Path) -> Result<Graph, SyncError> {
    let path = validate_file_path(path)?;
    validate_file_size(&path, MAX_INPUT_FILE_SIZE)?;

    let bytes =
        std::fs::read(&path).map_err(|e| SyncError::IoError(format!("Cannot read file: {}", e)))?;

    let graph = if is_json(&path) {
        let triples: Vec<Triple> = serde_json::from_slice(&bytes)
            .map_err(|e| SyncError::DeserializationError(e.to_string()))?;
        Graph::from_triples(triples)
    } else {
        graph_from_bytes(&bytes)?
    };

    tracing::info!(path = %path.display(), triples = graph.len(), "graph read");
    Ok(graph)
}

/// Write a graph in the format its extension selects.
pub fn write_graph(graph: &Graph, path: &Path) -> Result<(), SyncError> {
    let path = validate_output_path(path)?;

    let bytes = if is_json(&path) {
        let triples: Vec<Triple> = graph.triples().collect();
        serde_json::to_vec_pretty(&triples)
            .map_err(|e| SyncError::SerializationError(e.to_string()))?
    } else {
        graph_to_bytes(graph)?
    };

    std::fs::write(&path, bytes)
        .map_err(|e| SyncError::IoError(format!("Cannot write file: {}", e)))?;

    tracing::info!(path = %path.display(), triples = graph.len(), "graph written");
    Ok(())
}

/// Resolve an axiom kind name such as `SubClassOf`.
pub fn parse_kind(name: &str) -> Result<AxiomKind, SyncError> {
    AxiomKind::from_name(name)
        .ok_or_else(|| SyncError::Config(format!("Unknown axiom kind '{}'", name)))
}

/// Axioms of one kind, or all of them.
pub fn collect_axioms(
    model: &mut SyncModel,
    kind: Option<AxiomKind>,
) -> Result<BTreeSet<Axiom>, SyncError> {
    match kind {
        Some(kind) => model.axioms(kind),
        None => model.all_axioms(),
    }
}

// =============================================================================
// NORMALIZE COMMAND
// =============================================================================

/// Normalize the input graph and write it to `output`.
pub fn cmd_normalize(
    config: SyncConfig,
    input: &Path,
    output: &Path,
    json_mode: bool,
) -> Result<(), SyncError> {
    let graph = read_graph(input)?;
    let before = graph.len();

    let model = InternalModel::load(graph, config)?;
    let report = model.pipeline_report().cloned().unwrap_or_default();
    let graph = model.into_graph();

    write_graph(&graph, output)?;

    if json_mode {
        let output = serde_json::json!({
            "success": true,
            "input_triples": before,
            "output_triples": graph.len(),
            "rounds": report.rounds,
            "changes": report.changes,
        });
        println!("{}", render_json(&output)?);
    } else {
        println!("Normalized {} -> {}", input.display(), output.display());
        println!("  Input triples:      {}", before);
        println!("  Output triples:     {}", graph.len());
        println!("  Rounds:             {}", report.rounds);
        for (pass, changed) in &report.changes {
            println!("  {:<19} {}", format!("{}:", pass), changed);
        }
    }

    Ok(())
}

// =============================================================================
// AXIOMS COMMAND
// =============================================================================

/// List the axioms of the input graph.
pub fn cmd_axioms(
    config: SyncConfig,
    input: &Path,
    kind: Option<&str>,
    json_mode: bool,
) -> Result<(), SyncError> {
    let kind = kind.map(parse_kind).transpose()?;
    let graph = read_graph(input)?;
    let mut model = open(graph, config)?;
    let axioms = collect_axioms(&mut model, kind)?;

    if json_mode {
        let output = serde_json::json!({
            "success": true,
            "kind": kind.map(AxiomKind::name),
            "count": axioms.len(),
            "axioms": axioms,
        });
        println!("{}", render_json(&output)?);
    } else {
        for axiom in &axioms {
            let line = serde_json::to_string(&axiom.body)
                .map_err(|e| SyncError::SerializationError(e.to_string()))?;
            println!("{}  {}", axiom.kind(), line);
        }
        println!("{} axiom(s)", axioms.len());
    }

    Ok(())
}

// =============================================================================
// STATS COMMAND
// =============================================================================

/// Summary of a loaded graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub triples: usize,
    pub axioms: BTreeMap<String, usize>,
    pub ontology_iri: Option<String>,
    pub version_iri: Option<String>,
    pub imports: Vec<String>,
    pub annotations: usize,
}

/// Count triples, axioms per kind and the header contents.
pub fn graph_stats(graph: Graph, config: SyncConfig) -> Result<Stats, SyncError> {
    let mut model = InternalModel::load(graph, config)?;

    let mut axioms = BTreeMap::new();
    for kind in AxiomKind::ALL {
        let count = model.axioms(kind)?.len();
        if count > 0 {
            axioms.insert(kind.name().to_string(), count);
        }
    }

    Ok(Stats {
        triples: model.graph().len(),
        axioms,
        ontology_iri: model.ontology_iri().map(String::from),
        version_iri: model.version_iri().map(String::from),
        imports: model.imports()?.into_iter().map(String::from).collect(),
        annotations: model.annotations()?.len(),
    })
}

/// Show statistics for the input graph.
pub fn cmd_stats(config: SyncConfig, input: &Path, json_mode: bool) -> Result<(), SyncError> {
    let graph = read_graph(input)?;
    let stats = graph_stats(graph, config)?;

    if json_mode {
        let output = serde_json::json!({
            "success": true,
            "stats": stats,
        });
        println!("{}", render_json(&output)?);
    } else {
        println!("Graph Statistics");
        println!("  Triples:     {}", stats.triples);
        println!(
            "  Ontology:    {}",
            stats.ontology_iri.as_deref().unwrap_or("(anonymous)")
        );
        if let Some(version) = &stats.version_iri {
            println!("  Version:     {}", version);
        }
        println!("  Imports:     {}", stats.imports.len());
        println!("  Annotations: {}", stats.annotations);
        println!();
        println!("Axioms:");
        for (kind, count) in &stats.axioms {
            println!("  {:<40} {}", kind, count);
        }
    }

    Ok(())
}

fn render_json(value: &serde_json::Value) -> Result<String, SyncError> {
    serde_json::to_string_pretty(value).map_err(|e| SyncError::SerializationError(e.to_string()))
}
