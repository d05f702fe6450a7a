use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Unknown zone: {0}")]
    UnknownZone(String),

    #[error("Corrupt weather table for zone '{zone}': no bucket covers seed {seed}")]
    CorruptTable { zone: String, seed: u8 },

    #[error("Invalid table data: {0}")]
    TableData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WeatherError>;
