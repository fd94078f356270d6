use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for CVWallet.
///
/// Library callers can match on these to decide recovery strategy; internal
/// code continues to use `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("oracle: {0}")]
    Oracle(#[from] OracleError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Attestation oracle errors ──────────────────────────────────────────────

/// Failures from the attestation service. The wizard collapses all of these
/// to one generic user-facing message; the variants exist for logging and
/// for library callers.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("no API key: set GEMINI_API_KEY or GOOGLE_API_KEY")]
    MissingCredential,

    #[error("attestation requires at least one evidence source")]
    EmptyEvidence,

    #[error("request to {model} failed: {message}")]
    Request { model: String, message: String },

    #[error("model returned non-conforming output: {0}")]
    Malformed(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_correctly() {
        let err = WalletError::Config(ConfigError::Load("bad toml".into()));
        assert!(err.to_string().contains("failed to load config"));
    }

    #[test]
    fn oracle_request_displays_model() {
        let err = WalletError::Oracle(OracleError::Request {
            model: "gemini-2.5-flash".into(),
            message: "503".into(),
        });
        assert!(err.to_string().contains("gemini-2.5-flash"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn missing_credential_names_env_vars() {
        let err = OracleError::MissingCredential;
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn anyhow_interop() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let wallet_err: WalletError = anyhow_err.into();
        assert!(wallet_err.to_string().contains("something went wrong"));
    }
}
