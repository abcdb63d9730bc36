pub const DEFAULT_ENV_VAR_PREFIX: &str = "CLASSIFIER";

pub const DEFAULT_GRPC_PORT: u16 = 50051;
pub const DEFAULT_MODEL_PATH: &str = "flow-or-malicious.model";
pub const DEFAULT_MAX_CONCURRENT_CALLS: usize = 10;

/// Class label the model assigns to malicious flows. Every other label
/// maps to a benign verdict.
pub const MALICIOUS_LABEL: i64 = 1;
