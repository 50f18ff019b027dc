use std::path::PathBuf;
use std::process::ExitCode;

use edsmap_lib::output::{ClassifyOutput, MapOutput, TokensOutput, EDSMAP_OUTPUT_VERSION};
use edsmap_lib::{
    classify_document, extract_styles, run_pipeline, Config, DesignSource, EdsmapError,
    EdsmapOutput, FileSource,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};

/// Full pipeline: components, tokens, pages, layouts, patterns.
pub fn run_map(
    config: Option<PathBuf>,
    input: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let body = match map_body(config, input) {
        Ok(body) => body,
        Err(err) => return render_error(err, format, output),
    };
    finish(&body, format, output)
}

/// Component recognition only.
pub fn run_classify(
    config: Option<PathBuf>,
    input: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let body = match classify_body(config, input) {
        Ok(body) => body,
        Err(err) => return render_error(err, format, output),
    };
    finish(&body, format, output)
}

/// Style token aggregation only.
pub fn run_tokens(
    config: Option<PathBuf>,
    input: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let body = match tokens_body(config, input) {
        Ok(body) => body,
        Err(err) => return render_error(err, format, output),
    };
    finish(&body, format, output)
}

fn map_body(config: Option<PathBuf>, input: PathBuf) -> Result<EdsmapOutput, EdsmapError> {
    let config = Config::load(config.as_deref())?;
    let source = FileSource::new(input);
    log::info!("mapping {}", source.describe());
    let doc = source.fetch_document()?;
    let result = run_pipeline(&doc, &config)?;

    Ok(EdsmapOutput::Map(MapOutput {
        version: EDSMAP_OUTPUT_VERSION.to_string(),
        document: doc.name,
        result,
    }))
}

fn classify_body(config: Option<PathBuf>, input: PathBuf) -> Result<EdsmapOutput, EdsmapError> {
    let config = Config::load(config.as_deref())?;
    let source = FileSource::new(input);
    log::info!("classifying {}", source.describe());
    let doc = source.fetch_document()?;
    let tree = classify_document(&doc, &config)?;

    Ok(EdsmapOutput::Classify(ClassifyOutput {
        version: EDSMAP_OUTPUT_VERSION.to_string(),
        document: doc.name,
        components: tree.components,
        warnings: tree.warnings,
    }))
}

fn tokens_body(config: Option<PathBuf>, input: PathBuf) -> Result<EdsmapOutput, EdsmapError> {
    let config = Config::load(config.as_deref())?;
    let source = FileSource::new(input);
    log::info!("aggregating tokens for {}", source.describe());
    let doc = source.fetch_document()?;
    let tree = classify_document(&doc, &config)?;
    let tokens = extract_styles(&tree.components, &doc, &config)?;

    Ok(EdsmapOutput::Tokens(TokensOutput {
        version: EDSMAP_OUTPUT_VERSION.to_string(),
        document: doc.name,
        tokens,
    }))
}

fn finish(body: &EdsmapOutput, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    if let Err(err) = write_output(body, format, output) {
        eprintln!("Failed to write output: {}", err);
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
