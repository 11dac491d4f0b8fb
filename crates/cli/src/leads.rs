//! Lead pipeline commands: import, list, export, add, update, delete.

use std::io::{Read, Write};
use std::path::PathBuf;

use tradelink_hub_client::{resolve_api_base, HubClient, HubError, WireRecord};
use tradelink_ingest::{import_file, ImportError};
use tradelink_model::{
    filter_records, Column, LeadFilter, LeadId, LeadRecord, Scope, TradeRole,
};
use tradelink_store::{LeadStore, LoadOutcome, StoreError};

use crate::exit_codes;
use crate::CliError;

// ── Error mapping ───────────────────────────────────────────────────

fn import_error(err: ImportError) -> CliError {
    let code = match err {
        ImportError::Parse(_) | ImportError::NoRows => exit_codes::EXIT_IMPORT_PARSE,
        ImportError::NothingToImport { .. } => exit_codes::EXIT_IMPORT_EMPTY,
    };
    CliError {
        code,
        message: err.to_string(),
        hint: None,
    }
}

fn store_error(err: StoreError) -> CliError {
    let code = match &err {
        StoreError::Hub {
            source: HubError::Validation(_),
            ..
        } => exit_codes::EXIT_HUB_VALIDATION,
        StoreError::Hub { .. } => exit_codes::EXIT_HUB_REMOTE,
        StoreError::UnknownId(_) => exit_codes::EXIT_HUB_UNKNOWN_ID,
        StoreError::EmptyBatch => exit_codes::EXIT_IMPORT_EMPTY,
    };
    CliError {
        code,
        message: err.to_string(),
        hint: None,
    }
}

// ── Shared helpers ──────────────────────────────────────────────────

fn open_store(api_base: Option<String>) -> LeadStore {
    LeadStore::new(HubClient::new(resolve_api_base(api_base)))
}

/// Load the working set, surfacing fallback as a warning, never an error.
fn load_with_warning(store: &mut LeadStore, quiet: bool) {
    if let LoadOutcome::Fallback { reason } = store.load() {
        if !quiet {
            eprintln!("warning: {}; showing built-in sample data", reason);
        }
    }
}

/// Parse a CLI id argument: `local:<key>` names a never-persisted record,
/// anything else is a hub-assigned id.
fn parse_id(arg: &str) -> Result<LeadId, CliError> {
    let trimmed = arg.trim();
    match trimmed.strip_prefix("local:") {
        Some("") => Err(CliError::args("local id is missing its key")),
        Some(key) => Ok(LeadId::Local(key.to_string())),
        None if trimmed.is_empty() => Err(CliError::args("record id must not be empty")),
        None => Ok(LeadId::Remote(trimmed.to_string())),
    }
}

fn read_record_json(from: &Option<PathBuf>) -> Result<WireRecord, CliError> {
    let contents = match from {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::io(format!("cannot read {}: {}", path.display(), e)))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CliError::io(format!("cannot read stdin: {}", e)))?;
            buf
        }
    };
    serde_json::from_str(&contents).map_err(|e| {
        CliError::args(format!("invalid record JSON: {}", e))
            .with_hint(r#"use canonical column names, e.g. {"Product": "Coffee"}"#)
    })
}

fn lead_filter(
    scope: Option<Scope>,
    role: Option<TradeRole>,
    search: Option<String>,
) -> LeadFilter {
    LeadFilter {
        scope,
        role,
        search,
    }
}

// ── import ──────────────────────────────────────────────────────────

pub fn cmd_import(
    file: PathBuf,
    keep_existing: bool,
    json: bool,
    api_base: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let batch = import_file(&file).map_err(import_error)?;

    if !quiet {
        eprintln!(
            "Read {} row(s) from {} ({} discarded as blank)",
            batch.rows_read,
            file.display(),
            batch.rows_discarded,
        );
    }

    let mut store = open_store(api_base);
    let count = store
        .import_batch(batch.records, !keep_existing)
        .map_err(store_error)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "imported": count,
                "rowsRead": batch.rows_read,
                "rowsDiscarded": batch.rows_discarded,
                "scopeHint": batch.scope_hint.to_string(),
            })
        );
    } else {
        println!(
            "imported {} record(s); view: {} leads",
            count, batch.scope_hint,
        );
    }

    Ok(())
}

// ── list ────────────────────────────────────────────────────────────

pub fn cmd_list(
    scope: Option<Scope>,
    role: Option<TradeRole>,
    search: Option<String>,
    json: bool,
    api_base: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let mut store = open_store(api_base);
    load_with_warning(&mut store, quiet);

    let filter = lead_filter(scope, role, search);
    let hits = filter_records(store.records(), &filter);

    if json {
        let rendered = serde_json::to_string_pretty(&hits)
            .map_err(|e| CliError::io(format!("JSON encode error: {}", e)))?;
        println!("{}", rendered);
    } else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(
            out,
            "{:<14} {:<13} {:<7} {:<22} {:<22} {:<20} {}",
            "ID", "SCOPE", "ROLE", "TRADER", "BUYER", "PRODUCT", "DESTINATION",
        )
        .map_err(|e| CliError::io(e.to_string()))?;
        for record in &hits {
            writeln!(out, "{}", table_row(record)).map_err(|e| CliError::io(e.to_string()))?;
        }
        if !quiet {
            eprintln!("{} record(s)", hits.len());
        }
    }

    Ok(())
}

fn table_row(record: &LeadRecord) -> String {
    format!(
        "{:<14} {:<13} {:<7} {:<22} {:<22} {:<20} {}",
        truncate(&record.id.to_string(), 14),
        Scope::of_record(record).to_string(),
        truncate(&record.role, 7),
        truncate(&record.exp_trader, 22),
        truncate(&record.buyer, 22),
        truncate(&record.product, 20),
        record.destination,
    )
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", prefix)
    }
}

// ── export ──────────────────────────────────────────────────────────

/// One CSV row in canonical column order.
fn csv_row(record: &LeadRecord) -> Vec<&str> {
    Column::ALL.iter().map(|c| record.get(*c)).collect()
}

pub fn cmd_export(
    out: Option<PathBuf>,
    scope: Option<Scope>,
    role: Option<TradeRole>,
    search: Option<String>,
    api_base: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let mut store = open_store(api_base);
    load_with_warning(&mut store, quiet);

    let filter = lead_filter(scope, role, search);
    let hits = filter_records(store.records(), &filter);

    let out_label = out
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());

    let writer: Box<dyn Write> = match &out {
        Some(path) => {
            let f = std::fs::File::create(path)
                .map_err(|e| CliError::io(format!("cannot create {}: {}", path.display(), e)))?;
            Box::new(std::io::BufWriter::new(f))
        }
        None => Box::new(std::io::BufWriter::new(std::io::stdout().lock())),
    };

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    // Always write the header, even with zero records.
    csv_writer
        .write_record(Column::ALL.iter().map(|c| c.name()))
        .map_err(|e| CliError::io(format!("CSV write error: {}", e)))?;

    for record in &hits {
        csv_writer
            .write_record(csv_row(record))
            .map_err(|e| CliError::io(format!("CSV write error: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CliError::io(format!("CSV flush error: {}", e)))?;

    if !quiet {
        eprintln!("Done: {} record(s) written to {}", hits.len(), out_label);
    }

    Ok(())
}

// ── add / update / delete ───────────────────────────────────────────

pub fn cmd_add(
    from: Option<PathBuf>,
    api_base: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let mut wire = read_record_json(&from)?;
    // New records never carry an id; the hub assigns one.
    wire.id = None;
    let record = wire.into_lead();

    let mut store = open_store(api_base);
    let created = store.add_one(record).map_err(store_error)?;

    if !quiet {
        eprintln!("Added 1 record");
    }
    println!("{}", created.id);
    Ok(())
}

pub fn cmd_update(
    id: String,
    from: Option<PathBuf>,
    api_base: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let id = parse_id(&id)?;
    let mut wire = read_record_json(&from)?;
    wire.id = None;
    let record = wire.into_lead();

    let mut store = open_store(api_base);
    load_with_warning(&mut store, quiet);
    store.update_one(&id, record).map_err(store_error)?;

    println!("updated {}", id);
    Ok(())
}

pub fn cmd_delete(id: String, api_base: Option<String>, quiet: bool) -> Result<(), CliError> {
    let id = parse_id(&id)?;

    let mut store = open_store(api_base);
    load_with_warning(&mut store, quiet);
    store.delete_one(&id).map_err(store_error)?;

    println!("deleted {}", id);
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────
