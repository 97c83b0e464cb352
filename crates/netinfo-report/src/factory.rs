//! Reporter selection by configuration key
//!
//! Engines pick a reporter with a config-time constant, `"weight"` or
//! `"blob"`. [`Reporter::from_kind`] is the fallible path;
//! [`get_info`] keeps the original fatal contract and panics on an unknown
//! key, since callers pass compile-time constants and an unknown key is a
//! configuration bug, not a runtime condition.

use crate::blob::BlobInfo;
use crate::weight::WeightInfo;
use netinfo_core::error::{Error, Result};
use netinfo_core::numeric::Numeric;
use netinfo_core::sink::InfoSink;
use netinfo_core::source::NetSource;
use std::str::FromStr;

/// A diagnostic reporter, selected by kind
///
/// Tagged variant over the two concrete strategies; owning a `Reporter` is
/// the only handle a caller needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reporter {
    /// Per-parameter magnitude report
    Weight(WeightInfo),
    /// Per-activation range report
    Blob(BlobInfo),
}

impl Reporter {
    /// Construct a reporter from its configuration key
    ///
    /// Recognized kinds are `"weight"` and `"blob"`; anything else is an
    /// `InvalidParameter` error naming the offending string.
    pub fn from_kind(kind: &str) -> Result<Self> {
        match kind {
            "weight" => Ok(Self::Weight(WeightInfo::new())),
            "blob" => Ok(Self::Blob(BlobInfo::new())),
            other => Err(Error::unknown_kind(other)),
        }
    }

    /// The configuration key this reporter answers to
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Weight(_) => "weight",
            Self::Blob(_) => "blob",
        }
    }

    /// Scan the net and emit formatted lines into the sink
    pub fn print<T, N, S>(&self, net: &N, sink: &mut S)
    where
        T: Numeric,
        N: NetSource<T>,
        S: InfoSink + ?Sized,
    {
        match self {
            Self::Weight(info) => info.print(net, sink),
            Self::Blob(info) => info.print(net, sink),
        }
    }
}

impl FromStr for Reporter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_kind(s)
    }
}

/// Construct a reporter, aborting on an unknown kind
///
/// The infallible counterpart of [`Reporter::from_kind`] for callers
/// passing config-time constants. Panics with a diagnostic naming the
/// unknown kind.
pub fn get_info(kind: &str) -> Reporter {
    match Reporter::from_kind(kind) {
        Ok(reporter) => reporter,
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_recognizes_both_strategies() {
        let weight = Reporter::from_kind("weight").unwrap();
        let blob = Reporter::from_kind("blob").unwrap();

        assert_eq!(weight.kind(), "weight");
        assert_eq!(blob.kind(), "blob");
        assert_ne!(weight, blob);

        // The factory key always yields the compatible (zero-seeded) blob
        // reporter, never the exact variant.
        match blob {
            Reporter::Blob(info) => assert!(!info.is_exact()),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_from_kind_rejects_unknown() {
        let err = Reporter::from_kind("bogus").unwrap_err();
        assert_eq!(err.to_string(), "Invalid parameter: Unknown info type: bogus");
    }

    #[test]
    fn test_from_str_round_trip() {
        let reporter: Reporter = "weight".parse().unwrap();
        assert_eq!(reporter.kind(), "weight");

        let err = "gradient".parse::<Reporter>().unwrap_err();
        assert!(err.to_string().contains("gradient"));
    }

    #[test]
    fn test_get_info_constructs() {
        assert_eq!(get_info("weight").kind(), "weight");
        assert_eq!(get_info("blob").kind(), "blob");
    }

    #[test]
    #[should_panic(expected = "Unknown info type: bogus")]
    fn test_get_info_panics_on_unknown_kind() {
        get_info("bogus");
    }
}
