use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Problem identifier as typed by the user. CodeChef treats problem codes
/// case-insensitively, so equality and ordering go through `normalize`.
#[derive(Serialize, Deserialize, Debug, Clone, Eq)]
pub struct ProblemCode(String);

impl ProblemCode {
    pub fn normalize(&self) -> String {
        self.0.to_uppercase()
    }
}

impl PartialEq<ProblemCode> for ProblemCode {
    fn eq(&self, other: &ProblemCode) -> bool {
        self.normalize() == other.normalize()
    }
}

impl PartialOrd for ProblemCode {
    fn partial_cmp(&self, other: &ProblemCode) -> Option<Ordering> {
        Some(self.normalize().cmp(&other.normalize()))
    }
}

impl Ord for ProblemCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalize().cmp(&other.normalize())
    }
}

impl Hash for ProblemCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalize().hash(state);
    }
}

impl<T: Into<String>> From<T> for ProblemCode {
    fn from(code: T) -> Self {
        Self(code.into())
    }
}

impl FromStr for ProblemCode {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl AsRef<str> for ProblemCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Practice-problem difficulty listings served under `/problems/{category}`.
#[derive(
    Serialize,
    Deserialize,
    EnumString,
    EnumVariantNames,
    IntoStaticStr,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchCategory {
    School,
    Easy,
    Medium,
    Hard,
    Challenge,
    Extcontest,
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.into())
    }
}

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    EnumVariantNames,
    IntoStaticStr,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.into())
    }
}

/// Submission-result filter for the solutions listing. The numeric values are
/// the site's internal status codes for the `status` query parameter.
#[derive(
    Serialize,
    Deserialize,
    EnumString,
    EnumVariantNames,
    IntoStaticStr,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ResultFilter {
    Ac,
    Wa,
    Tle,
    Rte,
    Cte,
}

impl ResultFilter {
    pub fn to_status_code(self) -> u16 {
        match self {
            Self::Ac => 15,
            Self::Wa => 14,
            Self::Tle => 13,
            Self::Rte => 12,
            Self::Cte => 11,
        }
    }
}

impl fmt::Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.into())
    }
}

/// `result_code` values reported by the submission-status endpoint.
///
/// The endpoint is not documented, so anything we do not recognize is kept
/// verbatim in `Other`; callers must treat `Other` as terminal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResultCode {
    Wait,
    Compile,
    Runtime,
    Wrong,
    Accepted,
    Other(String),
}

impl ResultCode {
    pub fn is_wait(&self) -> bool {
        *self == Self::Wait
    }
}

impl From<&str> for ResultCode {
    fn from(code: &str) -> Self {
        match code {
            "wait" => Self::Wait,
            "compile" => Self::Compile,
            "runtime" => Self::Runtime,
            "wrong" => Self::Wrong,
            "accepted" => Self::Accepted,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Wait => f.write_str("wait"),
            Self::Compile => f.write_str("compile"),
            Self::Runtime => f.write_str("runtime"),
            Self::Wrong => f.write_str("wrong"),
            Self::Accepted => f.write_str("accepted"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_code_eq() {
        assert_eq!(ProblemCode::from("weicom"), ProblemCode::from("WEICOM"));
        assert_eq!(ProblemCode::from("FLOW001"), ProblemCode::from("flow001"));
    }

    #[test]
    fn result_filter_status_codes() {
        assert_eq!(ResultFilter::Ac.to_status_code(), 15);
        assert_eq!(ResultFilter::Cte.to_status_code(), 11);
    }

    #[test]
    fn result_code_from_str() {
        assert_eq!(ResultCode::from("wait"), ResultCode::Wait);
        assert_eq!(ResultCode::from("accepted"), ResultCode::Accepted);
        assert_eq!(
            ResultCode::from("partial"),
            ResultCode::Other("partial".to_owned())
        );
        assert!(ResultCode::from("wait").is_wait());
        assert!(!ResultCode::from("partial").is_wait());
    }
}
