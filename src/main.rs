use std::path::PathBuf;

pub mod config;
pub mod flatten;
pub mod render;
pub mod rules;
pub mod writer;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to load the configuration: {0}")]
    Config(#[from] config::Error),

    #[error(transparent)]
    Flatten(#[from] flatten::Error),
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    if let Err(error) = flatten_from(&PathBuf::from("./config.yaml")) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn flatten_from(config_path: &PathBuf) -> Result<(), Error> {
    let config = config::parse(config_path)?;

    flatten::run(&config)?;

    return Ok(());
}
