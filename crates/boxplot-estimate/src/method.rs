//! Named estimation formulas and estimation requests

use boxplot_core::{DataLevel, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named mean/SD estimation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Mean = Q2, SD = IQR / 1.35
    Simple,
    /// Three-quartile mean with large-sample SD inflation
    Wan2014,
    /// Whisker-weighted mean and blended SD, suited to skewed data
    Luo2018,
    /// Level 0 formula: three-number summary with skew correction
    Wan2014ThreeNumber,
    /// Level 1 formula: sample-size weighted five-number summary
    Wan2014FiveNumber,
    /// Level 2 formula: five-number summary with Tukey outer-fence correction
    #[serde(rename = "wan2014_five_number_with_outlier_correction")]
    Wan2014FiveNumberOutlierCorrected,
}

impl Method {
    pub const ALL: [Method; 6] = [
        Method::Simple,
        Method::Wan2014,
        Method::Luo2018,
        Method::Wan2014ThreeNumber,
        Method::Wan2014FiveNumber,
        Method::Wan2014FiveNumberOutlierCorrected,
    ];

    /// Canonical name used in reports and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Wan2014 => "wan2014",
            Self::Luo2018 => "luo2018",
            Self::Wan2014ThreeNumber => "wan2014_three_number",
            Self::Wan2014FiveNumber => "wan2014_five_number",
            Self::Wan2014FiveNumberOutlierCorrected => {
                "wan2014_five_number_with_outlier_correction"
            }
        }
    }

    /// Level this formula is designed for, if it is a level formula
    pub fn designed_level(self) -> Option<DataLevel> {
        match self {
            Self::Wan2014ThreeNumber => Some(DataLevel::QuartilesOnly),
            Self::Wan2014FiveNumber => Some(DataLevel::Whiskers),
            Self::Wan2014FiveNumberOutlierCorrected => Some(DataLevel::WhiskersAndOutliers),
            Self::Simple | Self::Wan2014 | Self::Luo2018 => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Method::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}

/// How the caller wants the formula chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodRequest {
    /// Pick by distribution shape: simple, then wan2014, then luo2018
    #[default]
    Auto,
    /// Pick the best formula the data level supports
    ByLevel,
    /// Use exactly this formula
    Explicit(Method),
}

impl MethodRequest {
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::ByLevel => "level",
            Self::Explicit(method) => method.name(),
        }
    }
}

impl fmt::Display for MethodRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MethodRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "level" | "by_level" => Ok(Self::ByLevel),
            _ => s.parse().map(Self::Explicit),
        }
    }
}

impl From<Method> for MethodRequest {
    fn from(method: Method) -> Self {
        Self::Explicit(method)
    }
}

impl Serialize for MethodRequest {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for MethodRequest {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Luo2018".parse::<Method>().unwrap(), Method::Luo2018);
        assert_eq!(" SIMPLE ".parse::<Method>().unwrap(), Method::Simple);
    }

    #[test]
    fn test_unknown_method() {
        let err = "hozo2005".parse::<Method>().unwrap_err();
        assert!(matches!(err, Error::UnknownMethod(name) if name == "hozo2005"));
    }

    #[test]
    fn test_request_parsing() {
        assert_eq!("auto".parse::<MethodRequest>().unwrap(), MethodRequest::Auto);
        assert_eq!("level".parse::<MethodRequest>().unwrap(), MethodRequest::ByLevel);
        assert_eq!(
            "wan2014".parse::<MethodRequest>().unwrap(),
            MethodRequest::Explicit(Method::Wan2014)
        );
        assert_eq!(
            "wan2014_five_number".parse::<MethodRequest>().unwrap(),
            MethodRequest::Explicit(Method::Wan2014FiveNumber)
        );
        assert!("median".parse::<MethodRequest>().is_err());
    }

    #[test]
    fn test_designed_levels() {
        assert_eq!(Method::Simple.designed_level(), None);
        assert_eq!(
            Method::Wan2014FiveNumberOutlierCorrected.designed_level(),
            Some(DataLevel::WhiskersAndOutliers)
        );
    }
}
