/// `emitvars <VARS_FILE>`: load the store and write its records to stdout.
use std::io::Write;

use crate::cli::Cli;
use crate::cli::OutputCtx;
use crate::cli::args::parse_name_list;
use crate::cli::output::write_records;
use crate::emit::{EmitError, EmitOptions, store_records};
use crate::store::{load_store, resolve_path};

/// Run the emit command against stdout.
///
/// # Errors
///
/// See [`run_to`].
pub fn run(args: &Cli, ctx: &OutputCtx) -> Result<(), EmitError> {
    let stdout = std::io::stdout();
    run_to(&mut stdout.lock(), args, ctx)
}

/// Run the emit command, writing records to `out`.
///
/// # Errors
///
/// Returns `EmitError` if the variables file cannot be resolved or read, if an
/// entry cannot be interpreted (after all earlier NDJSON lines are written),
/// or if writing fails.
pub fn run_to<W: Write>(out: &mut W, args: &Cli, ctx: &OutputCtx) -> Result<(), EmitError> {
    let _t_resolve = ctx.timer("resolve_path");
    let path = resolve_path(&args.vars_file)?;
    drop(_t_resolve);

    let _t_load = ctx.timer("load_store");
    let store = load_store(&path)?;
    drop(_t_load);

    if ctx.debug {
        if store.is_empty() {
            eprintln!("[debug] {}: no entries", path.display());
        } else {
            eprintln!("[debug] {}: {} entries", path.display(), store.len());
        }
    }

    let opts = EmitOptions {
        ottl_suffix: args.ottl_suffix.clone(),
        only: args.only.as_deref().map(parse_name_list),
    };

    let _t_emit = ctx.timer("emit");
    write_records(out, store_records(&store, &opts), ctx)?;
    drop(_t_emit);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use clap::Parser;

    use super::*;
    use crate::store::StoreError;

    fn emit(argv: &[&str]) -> (Result<(), EmitError>, String) {
        let cli = Cli::try_parse_from(argv).unwrap();
        let ctx = OutputCtx::new(cli.output, cli.no_header, cli.debug);
        let mut buf = Vec::new();
        let result = run_to(&mut buf, &cli, &ctx);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_relative_fixture_path() {
        let (result, out) = emit(&["emitvars", "testdata/variables.json"]);
        result.unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(
            lines[7],
            r#"{"name":"ssn_template","payload":{"data":"***-**-$1"}}"#
        );
        assert_eq!(
            lines[8],
            r#"{"name":"fields_to_hash","payload":{"data":"email|phone|ssn|address"}}"#
        );
    }

    #[test]
    fn test_ottl_suffix_and_only() {
        let (result, out) = emit(&[
            "emitvars",
            "--ottl-suffix",
            "_OTTL",
            "--only",
            "ssn_regex",
            "testdata/variables_ottl.json",
        ]);
        result.unwrap();
        assert_eq!(
            out,
            concat!(
                r#"{"name":"ssn_regex","payload":{"data":"\\b\\d{3}-\\d{2}-(\\d{4})\\b"}}"#,
                "\n",
                r#"{"name":"ssn_regex_OTTL","payload":{"data":"\\\\b\\\\d{3}-\\\\d{2}-(\\\\d{4})\\\\b"}}"#,
                "\n",
            )
        );
    }

    #[test]
    fn test_bad_entry_after_valid_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"a":{{"data":"x"}},"e":5}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let (result, out) = emit(&["emitvars", &path]);
        assert_eq!(out, "{\"name\":\"a\",\"payload\":{\"data\":\"x\"}}\n");
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            EmitError::Store(StoreError::InvalidRecord { ref name, .. }) if name == "e"
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_file_writes_nothing() {
        let (result, out) = emit(&["emitvars", "testdata/does-not-exist.json"]);
        assert!(out.is_empty());
        assert_eq!(result.unwrap_err().exit_code(), 4);
    }
}
