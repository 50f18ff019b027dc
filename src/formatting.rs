use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use edsmap_lib::output::EDSMAP_OUTPUT_VERSION;
use edsmap_lib::{EdsmapError, EdsmapOutput, ErrorOutput};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &EdsmapOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the fatal exit code.
pub fn render_error(err: EdsmapError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let payload = EdsmapOutput::Error(ErrorOutput {
        version: EDSMAP_OUTPUT_VERSION.to_string(),
        stage: err.stage().map(str::to_string),
        error: err.to_payload(),
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &EdsmapOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &EdsmapOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &EdsmapOutput, colorize: bool) -> String {
    match body {
        EdsmapOutput::Map(out) => {
            let mut buf = String::new();
            let header = color("[MAP]", "32", colorize);
            writeln!(buf, "{} {}", header, out.document).ok();
            writeln!(
                buf,
                "Components: {} recognized ({} top-level)",
                out.result
                    .components
                    .iter()
                    .map(|c| c.count())
                    .sum::<usize>(),
                out.result.components.len()
            )
            .ok();
            writeln!(
                buf,
                "Tokens: {} colors, {} typography, {} spacing, {} shadows, {} breakpoints",
                out.result.tokens.colors.len(),
                out.result.tokens.typography.len(),
                out.result.tokens.spacing.len(),
                out.result.tokens.shadows.len(),
                out.result.tokens.breakpoints.len()
            )
            .ok();
            writeln!(
                buf,
                "Structure: {} pages, {} layouts, {} form patterns",
                out.result.layout.pages.len(),
                out.result.layout.layouts.len(),
                out.result.layout.patterns.len()
            )
            .ok();
            append_warnings(&mut buf, &out.result.warnings, colorize);
            buf
        }
        EdsmapOutput::Classify(out) => {
            let mut buf = String::new();
            let header = color("[CLASSIFY]", "36", colorize);
            writeln!(buf, "{} {}", header, out.document).ok();
            writeln!(
                buf,
                "Components: {} recognized ({} top-level)",
                out.components.iter().map(|c| c.count()).sum::<usize>(),
                out.components.len()
            )
            .ok();
            append_warnings(&mut buf, &out.warnings, colorize);
            buf
        }
        EdsmapOutput::Tokens(out) => {
            let mut buf = String::new();
            let header = color("[TOKENS]", "34", colorize);
            writeln!(buf, "{} {}", header, out.document).ok();
            for (label, tokens) in [
                ("colors", &out.tokens.colors),
                ("typography", &out.tokens.typography),
                ("spacing", &out.tokens.spacing),
                ("shadows", &out.tokens.shadows),
                ("breakpoints", &out.tokens.breakpoints),
            ] {
                writeln!(buf, "{} ({}):", label, tokens.len()).ok();
                for token in tokens.iter() {
                    writeln!(buf, "- {:24} {:24} {}", token.name, token.value, token.eds_variable)
                        .ok();
                }
            }
            buf
        }
        EdsmapOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            if let Some(stage) = &out.stage {
                writeln!(buf, "{} {} ({})", header, out.error.message, stage).ok();
            } else {
                writeln!(buf, "{} {}", header, out.error.message).ok();
            }
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

fn append_warnings(buf: &mut String, warnings: &[String], colorize: bool) {
    if warnings.is_empty() {
        return;
    }
    let label = color("Warnings:", "33", colorize);
    writeln!(buf, "{label}").ok();
    for warning in warnings {
        writeln!(buf, "- {warning}").ok();
    }
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
