//! Shared `Result` alias for the api.ai client crates.
//!
//! Fallible operations return a rootcause `Report` typed by the crate's own
//! error enum, e.g. `Result<Response, ClientError>`. Lower-level failures
//! (reqwest, serde_json, url) are mapped into a variant with `map_err` and
//! converted by `?`. Callers match on the variant through
//! `Report::current_context`.

use rootcause::Report;

/// `std::result::Result` with a rootcause report typed by `C`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, PartialEq, Eq)]
    enum LookupError {
        Missing { key: String },
    }

    impl fmt::Display for LookupError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Missing { key } => write!(f, "missing key: {key}"),
            }
        }
    }

    impl std::error::Error for LookupError {}

    fn lookup(key: &str) -> Result<u32, LookupError> {
        Err(LookupError::Missing {
            key: key.to_string(),
        }
        .into())
    }

    #[test]
    fn report_exposes_typed_context() {
        let err = lookup("lang").unwrap_err();
        assert_eq!(
            err.current_context(),
            &LookupError::Missing {
                key: "lang".to_string()
            }
        );
        assert!(err.to_string().contains("missing key: lang"));
    }
}
