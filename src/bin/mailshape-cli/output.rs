#[cfg(any(feature = "with-serde", feature = "with-csv"))]
use anyhow::Context;
use anyhow::{Result, bail};

use crate::args::Cli;
use mailshape_lib::{Classification, ValidationReport};

pub fn write_reports(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows, cli),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn any_invalid(rows: &[ValidationReport]) -> bool {
    rows.iter().any(|row| !row.ok)
}

fn write_human(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    for row in rows {
        println!("{}", human_line(row));
        if cli.explain {
            println!("        checks: {}", format_checks(&row.checks));
        }
    }
    Ok(())
}

pub(crate) fn human_line(row: &ValidationReport) -> String {
    if row.ok {
        format!("[OK]    {}", row.address)
    } else {
        format!("[INVALID] {} :: {}", row.address, row.reasons.join("; "))
    }
}

pub(crate) fn format_checks(checks: &Classification) -> String {
    let shape = checks.shape.map_or("-", |s| s.as_str());
    let blacklist = checks.blacklist.map_or("-", |r| r.as_str());
    let length = checks
        .length
        .map_or_else(|| "ok".to_string(), |v| v.to_string());
    format!(
        "shape={shape}, blacklist={blacklist}, length={length}, comment={}",
        checks.comment_form
    )
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[ValidationReport], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[ValidationReport], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[ValidationReport], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        for row in rows {
            wtr.write_record(csv_record(row))?;
        }
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[ValidationReport], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

// colonnes stables: address, local, domain, mode, valid, shape, blacklist,
// length, comment, reasons
#[cfg(feature = "with-csv")]
fn csv_record(row: &ValidationReport) -> Vec<String> {
    let (local, domain) = row
        .parts
        .as_ref()
        .map(|p| (p.local.clone(), p.domain.clone()))
        .unwrap_or_default();
    vec![
        row.address.clone(),
        local,
        domain,
        row.mode.as_str().to_string(),
        row.ok.to_string(),
        row.checks.shape.map_or("", |s| s.as_str()).to_string(),
        row.checks.blacklist.map_or("", |r| r.as_str()).to_string(),
        row.checks.length.map(|v| v.to_string()).unwrap_or_default(),
        row.checks.comment_form.to_string(),
        row.reasons.join("|"),
    ]
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
