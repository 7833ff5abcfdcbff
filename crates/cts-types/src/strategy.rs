//! Query strategy and output format selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which scanner answers a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    /// Every record, no filtering
    Full,
    /// Substring match over a full scan
    Partial,
    /// Exact or prefix lookup through the index
    #[default]
    Indexed,
}

impl ScanStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStrategy::Full => "full",
            ScanStrategy::Partial => "partial",
            ScanStrategy::Indexed => "indexed",
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(ScanStrategy::Full),
            "partial" => Ok(ScanStrategy::Partial),
            "indexed" => Ok(ScanStrategy::Indexed),
            other => Err(format!(
                "unknown strategy '{other}' (expected full, partial or indexed)"
            )),
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `name<TAB>file:line<TAB>kind`
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{other}' (expected plain or json)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!("full".parse::<ScanStrategy>().unwrap(), ScanStrategy::Full);
        assert_eq!(
            "Partial".parse::<ScanStrategy>().unwrap(),
            ScanStrategy::Partial
        );
        assert_eq!(
            "INDEXED".parse::<ScanStrategy>().unwrap(),
            ScanStrategy::Indexed
        );
        assert!("fuzzy".parse::<ScanStrategy>().is_err());
    }

    #[test]
    fn test_strategy_display_round_trips() {
        for strategy in [
            ScanStrategy::Full,
            ScanStrategy::Partial,
            ScanStrategy::Indexed,
        ] {
            assert_eq!(
                strategy.to_string().parse::<ScanStrategy>().unwrap(),
                strategy
            );
        }
    }

    #[test]
    fn test_strategy_serde_lowercase() {
        let json = serde_json::to_string(&ScanStrategy::Partial).unwrap();
        assert_eq!(json, "\"partial\"");
        let decoded: ScanStrategy = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(decoded, ScanStrategy::Full);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "plain".parse::<OutputFormat>().unwrap(),
            OutputFormat::Plain
        );
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ScanStrategy::default(), ScanStrategy::Indexed);
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }
}
