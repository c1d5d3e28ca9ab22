/// Output formatting: NDJSON, JSON, table. Debug timers.
use std::io::Write;
use std::time::Instant;

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};

use super::args::OutputFormat;
use crate::emit::EmitError;
use crate::store::StoreError;
use crate::types::{EmittedRecord, ErrorOutput};

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print phase timings to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(format: OutputFormat, no_header: bool, debug: bool) -> Self {
        Self {
            format,
            no_header,
            debug,
        }
    }

    /// Start a named phase timer. Reports on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer {
            label,
            started: self.debug.then(Instant::now),
        }
    }
}

// --- Records ---

/// Write records to `out` in the context's format.
///
/// NDJSON is streamed: each record is written as soon as it is produced, so
/// an `Err` item leaves every earlier line on `out`. The array and table
/// formats need the full set and write nothing if any item fails.
///
/// # Errors
///
/// Returns the first `Err` item as `EmitError::Store`, `EmitError::Write` if
/// `out` fails, or `EmitError::Serialize` if a record cannot be encoded.
pub fn write_records<W, I>(out: &mut W, records: I, ctx: &OutputCtx) -> Result<(), EmitError>
where
    W: Write,
    I: IntoIterator<Item = Result<EmittedRecord, StoreError>>,
{
    match ctx.format {
        OutputFormat::Ndjson => {
            let streamed = write_ndjson(out, records);
            // Lines already produced stay visible even when a later entry fails.
            out.flush()?;
            return streamed;
        }
        OutputFormat::Json => {
            let records = collect_records(records)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        }
        OutputFormat::Compact => {
            let records = collect_records(records)?;
            writeln!(out, "{}", serde_json::to_string(&records)?)?;
        }
        OutputFormat::Table => write_records_table(out, &collect_records(records)?, ctx)?,
    }
    out.flush()?;
    Ok(())
}

fn collect_records<I>(records: I) -> Result<Vec<EmittedRecord>, StoreError>
where
    I: IntoIterator<Item = Result<EmittedRecord, StoreError>>,
{
    records.into_iter().collect()
}

fn write_ndjson<W, I>(out: &mut W, records: I) -> Result<(), EmitError>
where
    W: Write,
    I: IntoIterator<Item = Result<EmittedRecord, StoreError>>,
{
    for record in records {
        let line = serde_json::to_string(&record?)?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_records_table<W: Write>(
    out: &mut W,
    records: &[EmittedRecord],
    ctx: &OutputCtx,
) -> Result<(), EmitError> {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["NAME", "VARIANT", "DATA"]);
    }
    for r in records {
        table.add_row([r.name.as_str(), r.variant.label(), r.payload.data.as_str()]);
    }
    writeln!(out, "{table}")?;
    Ok(())
}

// --- Error output ---

/// Render an error for stderr.
///
/// NDJSON and compact output get a single-line envelope so a consumer reading
/// stderr line by line sees one JSON value; `--output json` gets it pretty.
#[must_use]
pub fn render_error(err: &ErrorOutput, format: OutputFormat) -> String {
    let encoded = match format {
        OutputFormat::Ndjson | OutputFormat::Compact => serde_json::to_string(err),
        OutputFormat::Json => serde_json::to_string_pretty(err),
        OutputFormat::Table => return format!("error[{}]: {}", err.error.code, err.error.message),
    };
    encoded.unwrap_or_else(|_| err.error.message.clone())
}

/// Write a rendered error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let _ = writeln!(std::io::stderr().lock(), "{}", render_error(err, format));
}

// --- Debug timer ---

/// Reports how long a phase took, to stderr, when dropped.
///
/// Created via [`OutputCtx::timer`]; inert unless `--debug` is set.
pub struct DebugTimer {
    label: &'static str,
    started: Option<Instant>,
}

impl DebugTimer {
    /// Elapsed milliseconds, or `None` when the timer is inert.
    #[must_use]
    pub fn elapsed_ms(&self) -> Option<f64> {
        self.started.map(|t| t.elapsed().as_secs_f64() * 1000.0)
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if let Some(ms) = self.elapsed_ms() {
            eprintln!("[debug] {} took {ms:.2}ms", self.label);
        }
    }
}
