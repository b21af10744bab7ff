use thiserror::Error;

/// Rejected scan input. Raised before any probe is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid CIDR block '{input}': {reason}")]
    InvalidCidr { input: String, reason: String },

    #[error("{network} holds {count} usable hosts, the limit per scan is {limit}")]
    TooManyHosts {
        network: String,
        count: u128,
        limit: usize,
    },
}
