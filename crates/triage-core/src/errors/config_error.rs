/// Configuration errors, raised when a config struct is validated or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} = {value} is out of range {range}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        range: String,
    },

    #[error("{name} must be at least {min}, got {value}")]
    TooSmall {
        name: &'static str,
        value: usize,
        min: usize,
    },

    #[error("{name} must not be blank")]
    Blank { name: &'static str },

    #[error("invalid n-gram range ({min}, {max}): need 1 <= min <= max")]
    InvalidNgramRange { min: usize, max: usize },

    #[error("{lower_name} ({lower}) must be below {upper_name} ({upper})")]
    InvertedBounds {
        lower_name: &'static str,
        lower: f64,
        upper_name: &'static str,
        upper: f64,
    },

    #[error("weights {names} sum to {sum}, expected 1.0")]
    WeightSum { names: &'static str, sum: f64 },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },
}
