use tracing::{debug, info};

use crate::config::Config;
use crate::render::render;
use crate::rules;
use crate::writer;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] rules::Error),

    #[error(transparent)]
    Destination(#[from] writer::Error),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub rules: usize,
    pub bytes: usize,
}

/// Reads the export, renders it and writes the result. The destination is
/// only touched once the whole source has been read.
pub fn run(config: &Config) -> Result<Summary, Error> {
    let source = &config.source.location;
    let destination = &config.destination.location;

    debug!(source = %source.display(), "collecting rule groups");
    let rules = rules::collect(source)?;

    let rendered = render(&rules);

    debug!(destination = %destination.display(), "writing rule groups");
    writer::write(destination, &rendered)?;

    let summary = Summary {
        rules: rules.len(),
        bytes: rendered.len(),
    };
    info!(
        rules = summary.rules,
        bytes = summary.bytes,
        destination = %destination.display(),
        "flattened rule groups"
    );

    return Ok(summary);
}
