use anyhow::Context;
use charforge_domain::catalog::validate_catalog;
use charforge_domain::Catalog;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("validate-data") => validate_data(&args[1..]),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!(
            "Usage: cargo xtask <command>\n\nCommands:\n  validate-data [races.json careers.json]"
        ),
    }
}

/// Check race tables and career data. Exits non-zero when errors are found;
/// warnings are printed but do not fail.
fn validate_data(paths: &[String]) -> anyhow::Result<()> {
    let catalog = match paths {
        [] => Catalog::builtin().context("parsing built-in catalog")?,
        [races, careers] => {
            let races =
                std::fs::read_to_string(races).with_context(|| format!("reading {races}"))?;
            let careers = std::fs::read_to_string(careers)
                .with_context(|| format!("reading {careers}"))?;
            Catalog::from_json(&races, &careers).context("parsing catalog files")?
        }
        _ => anyhow::bail!("validate-data takes no arguments or <races.json> <careers.json>"),
    };

    println!(
        "Checking {} races and {} careers",
        catalog.races().len(),
        catalog.careers().len()
    );
    let report = validate_catalog(&catalog);

    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    for error in &report.errors {
        println!("error: {error}");
    }
    println!(
        "{} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );

    if report.has_errors() {
        anyhow::bail!("catalog validation failed")
    }
    Ok(())
}
