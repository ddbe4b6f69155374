use std::io;
use thiserror;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unable to serialize trail as JSON")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unable to serialize trail as YAML")]
    InvalidYaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
