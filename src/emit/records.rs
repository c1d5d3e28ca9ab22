/// Turn store entries into the records to emit.
///
/// For each entry, in store order:
/// 1. entries without data (falsy, no `data` key, `data: null`) produce nothing;
/// 2. every other entry produces a base record with the normalized value;
/// 3. entries flagged `ottl: true` whose data is a scalar also produce an
///    OTTL record right after the base one. Sequences never do.
///
/// Entries are interpreted lazily, so a malformed entry surfaces as an `Err`
/// item after the records of every entry before it.
use crate::store::{StoreEntry, StoreError, VariableStore};
use crate::transform::{ottl_escape, to_payload_string};
use crate::types::{EmittedRecord, RecordVariant};

/// Knobs for record generation.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Appended to the name of OTTL records. `None` keeps the base name.
    pub ottl_suffix: Option<String>,
    /// Restrict output to these names. `None` emits every entry.
    pub only: Option<Vec<String>>,
}

impl EmitOptions {
    fn selects(&self, name: &str) -> bool {
        self.only
            .as_ref()
            .is_none_or(|names| names.iter().any(|n| n == name))
    }
}

/// Records for a single entry: zero, one, or two.
///
/// # Errors
///
/// Returns `StoreError::InvalidRecord` if the entry cannot be interpreted.
pub fn entry_records(entry: &StoreEntry, opts: &EmitOptions) -> Result<Vec<EmittedRecord>, StoreError> {
    let Some(record) = entry.record()? else {
        return Ok(Vec::new());
    };
    let Some(data) = &record.data else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(2);
    out.push(EmittedRecord::new(
        entry.name.as_str(),
        to_payload_string(data),
        RecordVariant::Base,
    ));

    if let Some(scalar) = data.as_scalar().filter(|_| record.ottl) {
        let name = match &opts.ottl_suffix {
            Some(suffix) => format!("{}{suffix}", entry.name),
            None => entry.name.clone(),
        };
        out.push(EmittedRecord::new(name, ottl_escape(scalar), RecordVariant::Ottl));
    }

    Ok(out)
}

/// Records for `store` in emission order, produced entry by entry.
///
/// A malformed entry yields a single `Err` in its position; consumers stop there.
pub fn store_records<'a>(
    store: &'a VariableStore,
    opts: &'a EmitOptions,
) -> impl Iterator<Item = Result<EmittedRecord, StoreError>> + 'a {
    store
        .iter()
        .filter(|entry| opts.selects(&entry.name))
        .flat_map(|entry| match entry_records(entry, opts) {
            Ok(records) => records.into_iter().map(Ok).collect::<Vec<_>>(),
            Err(err) => vec![Err(err)],
        })
}
