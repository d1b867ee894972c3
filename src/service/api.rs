use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::model::ResultCode;

/// Explicit parse result for the site's JSON endpoints; callers map the
/// error case to a service-unavailable record instead of propagating it.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> std::result::Result<T, serde_json::Error> {
    serde_json::from_str(text)
}

/// JSON fields come back as strings or numbers depending on the endpoint's
/// mood; render both as display strings.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemInfo {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub problem_name: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date_added: String,
    #[serde(default)]
    pub max_timelimit: Value,
    #[serde(default)]
    pub source_sizelimit: Value,
    #[serde(default)]
    pub languages_supported: String,
}

impl ProblemInfo {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContestProblems {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub announcements: String,
    #[serde(default)]
    pub problems: HashMap<String, ContestProblem>,
}

impl ContestProblems {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContestProblem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub problem_url: String,
    #[serde(default)]
    pub successful_submissions: Value,
    #[serde(default)]
    pub accuracy: Value,
    #[serde(default)]
    pub category_name: String,
}

impl ContestProblem {
    /// Problems outside every scoring category do not count towards rank.
    pub fn is_scorable(&self) -> bool {
        !self.category_name.is_empty()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TagItem {
    #[serde(default)]
    pub tag: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TaggedProblems {
    #[serde(default)]
    pub all_problems: Option<HashMap<String, TaggedProblem>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TaggedProblem {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub attempted_by: u64,
    #[serde(default)]
    pub solved_by: u64,
}

impl TaggedProblem {
    pub fn accuracy(&self) -> u64 {
        if self.attempted_by == 0 {
            0
        } else {
            self.solved_by * 100 / self.attempted_by
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RatingsPage {
    #[serde(default)]
    pub list: Option<Vec<RatingEntry>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RatingEntry {
    #[serde(default)]
    pub global_rank: Value,
    #[serde(default)]
    pub country_rank: Value,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub rating: Value,
    #[serde(default)]
    pub diff: Value,
}

impl RatingEntry {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            format!(
                "{} ({})",
                display_value(&self.global_rank),
                display_value(&self.country_rank)
            ),
            self.username.clone(),
            display_value(&self.rating),
            display_value(&self.diff),
        ]
    }
}

/// Response of `get_submission_status/{token}`. A missing `result_code` is
/// treated as a malformed response by the poll loop.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SubmissionStatus {
    pub result_code: String,
    #[serde(default)]
    pub signal: String,
}

impl SubmissionStatus {
    pub fn result(&self) -> ResultCode {
        ResultCode::from(self.result_code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_json::<ProblemInfo>("{").is_err());
        assert!(parse_json::<SubmissionStatus>("{}").is_err());
    }

    #[test]
    fn problem_info_error_status() {
        let info: ProblemInfo = parse_json(r#"{"status": "error"}"#).unwrap();
        assert!(!info.is_success());
    }

    #[test]
    fn problem_info_defaults() {
        let info: ProblemInfo =
            parse_json(r#"{"status": "success", "problem_name": "a a", "body": "vbbv"}"#).unwrap();
        assert!(info.is_success());
        assert_eq!(info.problem_name, "a a");
        assert_eq!(info.author, "");
        assert_eq!(display_value(&info.max_timelimit), "");
    }

    #[test]
    fn contest_problem_scorable() {
        let contest: ContestProblems = parse_json(
            r#"{
                "status": "success",
                "name": "P1",
                "problems": {
                    "p1": {"name": "P1", "code": "p1", "category_name": "main"},
                    "p2": {"name": "P2", "code": "p2", "category_name": ""}
                }
            }"#,
        )
        .unwrap();
        assert!(contest.problems["p1"].is_scorable());
        assert!(!contest.problems["p2"].is_scorable());
    }

    #[test]
    fn tagged_problem_accuracy_is_integral() {
        let problem = TaggedProblem {
            code: "p1".to_owned(),
            name: "P1".to_owned(),
            attempted_by: 3,
            solved_by: 2,
        };
        assert_eq!(problem.accuracy(), 66);
        let unattempted = TaggedProblem {
            attempted_by: 0,
            ..problem
        };
        assert_eq!(unattempted.accuracy(), 0);
    }

    #[test]
    fn rating_entry_row() {
        let page: RatingsPage = parse_json(
            r#"{"list": [{"global_rank": 1, "country_rank": 1, "username": "u1",
                "rating": 1, "diff": 2}]}"#,
        )
        .unwrap();
        let rows: Vec<_> = page.list.unwrap().iter().map(RatingEntry::to_row).collect();
        assert_eq!(rows, vec![vec!["1 (1)", "u1", "1", "2"]]);
    }

    #[test]
    fn submission_status_result() {
        let status: SubmissionStatus =
            parse_json(r#"{"result_code": "runtime", "signal": "SIGSEGV"}"#).unwrap();
        assert_eq!(status.result(), ResultCode::Runtime);
        assert_eq!(status.signal, "SIGSEGV");
    }
}
