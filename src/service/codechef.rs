use std::collections::HashMap;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;
use maplit::hashmap;
use reqwest::blocking::{multipart, Response};
use reqwest::StatusCode;
use scraper::Html;

use crate::config::Config;
use crate::console::Console;
use crate::macros::select;
use crate::model::{ProblemCode, ResultCode, ResultFilter, SearchCategory};
use crate::response::{ResponseRecord, Rows};
use crate::service::api;
use crate::service::page::{contests, login, solution, solutions, submit, team, user};
use crate::service::scrape::{self, ElementRefExt as _};
use crate::service::session::Session;
use crate::Result;

static EMPTY_AUTH_DATA_MSG: &str = "Username/Password field cannot be left blank.";
static SESSION_LIMIT_MSG: &str = "Session limit exceeded!";
static INCORRECT_CREDS_MSG: &str = "Incorrect Credentials!";
static LOGIN_SUCCESS_MSG: &str = "Successfully logged in!";
static LOGOUT_SUCCESS_MSG: &str = "Successfully logged out!";
static CSRF_TOKEN_MISSING_MSG: &str = "Could not find a csrf token. Please try again.";
static DISCONNECT_SUCCESS_MSG: &str = "Disconnected other sessions.\nSuccessfully logged in!";
static SOLUTION_FILE_MSG: &str = "Solution file not found. Please provide a valid path.";
static INVALID_LANGUAGE_MSG: &str = "Invalid language.";
static PROBLEM_NOT_FOUND_MSG: &str =
    "Problem not found. For problems from a contest, pass the contest code with --contest.";

static RATINGS_TABLE_HEADINGS: [&str; 4] = ["GLOBAL(COUNTRY)", "USER NAME", "RATING", "GAIN/LOSS"];
static TAGGED_TABLE_HEADINGS: [&str; 4] = ["CODE", "NAME", "SUBMISSION", "ACCURACY"];
static TAGS_PER_ROW: usize = 5;

/// Consecutive malformed status responses tolerated before the poll loop
/// gives up with a service-unavailable failure.
static MAX_MALFORMED_POLLS: usize = 5;

/// Actor for every site operation. Anticipated failures come back as
/// `ResponseRecord`s; only connectivity and filesystem problems surface as
/// errors.
pub struct CodechefService<'a> {
    session: Session,
    cnsl: &'a mut Console,
}

impl<'a> CodechefService<'a> {
    pub fn new(conf: &Config, cnsl: &'a mut Console) -> Result<Self> {
        Ok(Self {
            session: Session::open(conf)?,
            cnsl,
        })
    }

    fn parse_html(res: Response) -> Result<Html> {
        let text = res.text().context("Could not read response body")?;
        Ok(Html::parse_document(&text))
    }

    fn base_url_str(&self) -> String {
        self.session
            .base_url()
            .as_str()
            .trim_end_matches('/')
            .to_owned()
    }

    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        disconnect_sessions: bool,
    ) -> Result<Vec<ResponseRecord>> {
        if username.is_empty() || password.is_empty() {
            return Ok(vec![ResponseRecord::client_error(EMPTY_AUTH_DATA_MSG)]);
        }

        let res = self.session.get("/")?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let html = Self::parse_html(res)?;
        let token = match login::csrf_token(&html) {
            Some(token) => token,
            None => return Ok(vec![ResponseRecord::text(CSRF_TOKEN_MISSING_MSG).with_code(500)]),
        };

        let payload = hashmap! {
            "name" => username.to_owned(),
            "pass" => password.to_owned(),
            "form_id" => "new_login_form".to_owned(),
            "csrfToken" => token.clone(),
        };
        let res = self.session.post_form("/", &payload, Some(&token))?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let html = Self::parse_html(res)?;

        if login::is_session_limited(&html) {
            if disconnect_sessions {
                return self.disconnect_active_sessions(&html);
            }
            // Leave the server-side session we just created behind.
            self.session.get("/logout").ok();
            return Ok(vec![ResponseRecord::client_error(SESSION_LIMIT_MSG)]);
        }
        if login::has_logout_button(&html) {
            self.session.save_cookies()?;
            return Ok(vec![ResponseRecord::text(LOGIN_SUCCESS_MSG)]);
        }
        Ok(vec![ResponseRecord::client_error(INCORRECT_CREDS_MSG)])
    }

    fn disconnect_active_sessions(&mut self, html: &Html) -> Result<Vec<ResponseRecord>> {
        let form = match login::session_limit_form(html) {
            Some(form) => form,
            None => return Ok(vec![ResponseRecord::server_down()]),
        };
        let payload: HashMap<&str, String> = form
            .inputs
            .iter()
            .map(|(name, value)| (name.as_str(), value.clone()))
            .collect();
        let res = self.session.post_form(&form.action, &payload, None)?;
        if res.status().is_success() {
            self.session.save_cookies()?;
            Ok(vec![ResponseRecord::text(DISCONNECT_SUCCESS_MSG)])
        } else {
            Ok(vec![ResponseRecord::server_down()])
        }
    }

    pub fn logout(&mut self) -> Result<Vec<ResponseRecord>> {
        if !self.session.is_logged_in() {
            return Ok(vec![ResponseRecord::unauthorized()]);
        }
        let res = self.session.get("/logout")?;
        if res.status().is_success() {
            self.session.clear_cookies()?;
            Ok(vec![ResponseRecord::text(LOGOUT_SUCCESS_MSG)])
        } else {
            Ok(vec![ResponseRecord::server_down()])
        }
    }

    pub fn problem(&mut self, problem: &ProblemCode, contest: &str) -> Result<Vec<ResponseRecord>> {
        let path = format!(
            "/api/contests/{}/problems/{}",
            contest.to_uppercase(),
            problem.normalize()
        );
        let res = self.session.get(&path)?;
        if !res.status().is_success() && res.status() != StatusCode::NOT_FOUND {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let body = res.text().context("Could not read response body")?;
        Ok(description_records(&body))
    }

    pub fn submit(
        &mut self,
        problem: &ProblemCode,
        file: &Path,
        language: &str,
    ) -> Result<Vec<ResponseRecord>> {
        if !self.session.is_logged_in() {
            return Ok(vec![ResponseRecord::unauthorized()]);
        }
        // The source is read before anything goes over the wire, so a bad
        // path never results in a network request.
        let source = match fs::read(file) {
            Ok(source) => source,
            Err(_) => return Ok(vec![ResponseRecord::client_error(SOLUTION_FILE_MSG)]),
        };

        let code = problem.normalize();
        let submit_path = format!("/submit/{}", code);
        let res = self.session.get(&submit_path)?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let html = Self::parse_html(res)?;
        if login::has_login_form(&html) {
            return Ok(vec![ResponseRecord::unauthorized()]);
        }
        let form_token = match submit::form_token(&html) {
            Some(token) => token,
            None => return Ok(vec![ResponseRecord::server_down()]),
        };
        let language_code = match submit::language_code(&html, language) {
            Some(code) => code,
            None => return Ok(vec![ResponseRecord::client_error(INVALID_LANGUAGE_MSG)]),
        };

        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "solution".to_owned());
        let form = multipart::Form::new()
            .text("language", language_code)
            .text("problem_code", code.clone())
            .text("form_id", "problem_submission")
            .text("form_token", form_token)
            .part(
                "files[sourcefile]",
                multipart::Part::bytes(source).file_name(file_name),
            );
        let res = self.session.post_multipart(&submit_path, form)?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }

        // The submission redirects to a page whose trailing segment is the
        // status token used for polling.
        let status_token = res
            .url()
            .path_segments()
            .and_then(|segments| segments.last())
            .unwrap_or_default()
            .to_owned();

        writeln!(self.cnsl, "Problem submitted.")?;
        let pb = self.cnsl.build_spinner("Running code ...");
        let session = &mut self.session;
        let status_path = format!("/get_submission_status/{}", status_token);
        let polled = poll_submission(|| {
            let res = session.get(&status_path)?;
            res.text().context("Could not read status response")
        });
        pb.finish_and_clear();

        let status = match polled? {
            Some(status) => status,
            None => return Ok(vec![ResponseRecord::server_down()]),
        };
        let mut records = vec![self.verdict_record(&status, &status_token)?];
        if let Some(rows) = self.error_status_table(&status_token)? {
            records.push(ResponseRecord::table(rows));
        }
        Ok(records)
    }

    fn verdict_record(
        &mut self,
        status: &api::SubmissionStatus,
        token: &str,
    ) -> Result<ResponseRecord> {
        let record = match status.result() {
            ResultCode::Compile => {
                let detail = self.compilation_error(token)?;
                ResponseRecord::client_error(format!("Compilation error.\n{}", detail))
            }
            ResultCode::Runtime => {
                ResponseRecord::client_error(format!("Runtime error. {}\n", status.signal))
            }
            ResultCode::Wrong => ResponseRecord::client_error("Wrong answer\n"),
            ResultCode::Accepted => ResponseRecord::text("Correct answer\n"),
            // The poll loop only exits on non-wait codes; anything we do not
            // recognize still gets a terminal message.
            ResultCode::Wait | ResultCode::Other(_) => ResponseRecord::text(format!(
                "Submission finished with status: {}\n",
                status.result_code
            )),
        };
        Ok(record)
    }

    fn compilation_error(&mut self, token: &str) -> Result<String> {
        let res = self.session.get(&format!("/view/error/{}", token))?;
        if !res.status().is_success() {
            return Ok(String::new());
        }
        let html = Self::parse_html(res)?;
        Ok(html
            .select(select!("div.cc-error-txt"))
            .next()
            .map(|div| div.inner_text())
            .unwrap_or_default())
    }

    fn error_status_table(&mut self, token: &str) -> Result<Option<Rows>> {
        let res = self.session.get(&format!("/error_status_table/{}", token))?;
        if !res.status().is_success() {
            return Ok(None);
        }
        let html = Self::parse_html(res)?;
        Ok(scrape::tables(&html)
            .into_iter()
            .next()
            .map(scrape::table_to_rows)
            .filter(|rows| !rows.is_empty()))
    }

    pub fn search(&mut self, category: SearchCategory) -> Result<Vec<ResponseRecord>> {
        let res = self.session.get(&format!("/problems/{}", category))?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let html = Self::parse_html(res)?;
        let rows = scrape::tables(&html)
            .into_iter()
            .nth(1)
            .map(scrape::table_to_rows)
            .filter(|rows| !rows.is_empty());
        match rows {
            Some(rows) => Ok(vec![ResponseRecord::table(rows)]),
            None => Ok(vec![ResponseRecord::not_found("Problem listings not found.")]),
        }
    }

    pub fn contest(&mut self, contest: &str) -> Result<Vec<ResponseRecord>> {
        let res = self
            .session
            .get(&format!("/api/contests/{}", contest.to_uppercase()))?;
        if !res.status().is_success() && res.status() != StatusCode::NOT_FOUND {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let body = res.text().context("Could not read response body")?;
        Ok(contest_problem_records(&body, &self.base_url_str()))
    }

    pub fn contests(&mut self, show_past: bool) -> Result<Vec<ResponseRecord>> {
        let (path, labels): (&str, &[&str]) = if show_past {
            ("/contests/past", &["Past"])
        } else {
            ("/contests", &["Present", "Future"])
        };
        let res = self.session.get(path)?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let html = Self::parse_html(res)?;
        Ok(contests::contest_records(&html, labels))
    }

    pub fn tags(&mut self, tags: &[String]) -> Result<Vec<ResponseRecord>> {
        let path = if tags.is_empty() {
            "/get/tags/problems".to_owned()
        } else {
            format!("/get/tags/problems/{}", tags.join(","))
        };
        let res = self.session.get(&path)?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let body = res.text().context("Could not read response body")?;
        if tags.is_empty() {
            Ok(tag_list_records(&body))
        } else {
            Ok(tagged_problem_records(&body))
        }
    }

    pub fn solutions(
        &mut self,
        problem: &ProblemCode,
        page: u32,
        language: Option<&str>,
        result: Option<ResultFilter>,
        username: Option<&str>,
    ) -> Result<Vec<ResponseRecord>> {
        let code = problem.normalize();
        let path = format!("/status/{}", code);

        let mut params: Vec<(&str, String)> = Vec::new();
        if page > 1 {
            params.push(("page", (page - 1).to_string()));
        }
        if let Some(language) = language {
            let res = self.session.get(&path)?;
            if !res.status().is_success() {
                return Ok(vec![ResponseRecord::server_down()]);
            }
            let html = Self::parse_html(res)?;
            if let Some(value) = solutions::language_param(&html, language) {
                params.push(("language", value));
            }
        }
        if let Some(result) = result {
            params.push(("status", result.to_status_code().to_string()));
        }
        if let Some(username) = username {
            params.push(("handle", username.to_owned()));
        }

        let res = self.session.get_with_query(&path, &params)?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        // An unknown problem code redirects away from the status page.
        if !res.url().as_str().contains(&code) {
            return Ok(vec![ResponseRecord::not_found("Invalid problem code.")]);
        }
        let html = Self::parse_html(res)?;
        match solutions::solutions_table(&html) {
            Some(rows) => {
                let mut record = ResponseRecord::table(rows);
                if let Some(info) = solutions::page_info(&html) {
                    record = record.with_extra(format!("Page: {}", info));
                }
                Ok(vec![record])
            }
            None => Ok(vec![ResponseRecord::not_found("Solutions not found.")]),
        }
    }

    pub fn solution(&mut self, solution_id: &str) -> Result<Vec<ResponseRecord>> {
        let res = self
            .session
            .get(&format!("/viewsolution/{}", solution_id))?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let html = Self::parse_html(res)?;
        if solution::is_invalid(&html) {
            return Ok(vec![ResponseRecord::not_found("Invalid solution ID.")]);
        }
        let source = match solution::source_text(&html) {
            Some(source) => source,
            None => return Ok(vec![ResponseRecord::server_down()]),
        };
        let mut records = vec![ResponseRecord::text(format!(
            "\n{}\n",
            source.trim_end()
        ))];
        if let Some(rows) = solution::status_table(&html) {
            records.push(ResponseRecord::table(rows));
        }
        Ok(records)
    }

    pub fn user(&mut self, username: &str) -> Result<Vec<ResponseRecord>> {
        if username.is_empty() {
            return Ok(vec![]);
        }
        let res = self.session.get(&format!("/users/{}", username))?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(vec![ResponseRecord::not_found("User not found.")]);
        }
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        // Team handles redirect to the team page, unknown users to the home
        // page.
        if res.url().path().contains("/teams/view/") {
            return Ok(vec![ResponseRecord::client_error(format!(
                "{0} is a team handle. Use: chefcli team {0}",
                username
            ))]);
        }
        if res.url().path() == "/" {
            return Ok(vec![ResponseRecord::not_found("User not found.")]);
        }
        let base_url = self.base_url_str();
        let html = Self::parse_html(res)?;
        match user::profile_text(&html, username, &base_url) {
            Some(text) => Ok(vec![ResponseRecord::text(text)]),
            None => Ok(vec![ResponseRecord::server_down()]),
        }
    }

    pub fn team(&mut self, name: &str) -> Result<Vec<ResponseRecord>> {
        if name.is_empty() {
            return Ok(vec![]);
        }
        let res = self.session.get(&format!("/teams/view/{}", name))?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(vec![ResponseRecord::not_found("Team not found.")]);
        }
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let html = Self::parse_html(res)?;
        match team::team_page(&html) {
            Some(page) => {
                let mut records = vec![ResponseRecord::text(page.details)];
                if let Some(members) = page.members {
                    records.push(ResponseRecord::table(members));
                }
                Ok(records)
            }
            None => Ok(vec![ResponseRecord::server_down()]),
        }
    }

    pub fn ratings(
        &mut self,
        country: Option<&str>,
        institution: Option<&str>,
        institution_type: Option<&str>,
        page: u32,
        lines: usize,
    ) -> Result<Vec<ResponseRecord>> {
        let mut params: Vec<(&str, String)> = vec![("page", page.to_string())];
        if let Some(country) = country {
            params.push(("country", country.to_owned()));
        }
        if let Some(institution) = institution {
            params.push(("institution", institution.to_owned()));
        }
        if let Some(institution_type) = institution_type {
            params.push(("institutionType", institution_type.to_owned()));
        }
        let res = self.session.get_with_query("/api/ratings/all", &params)?;
        if !res.status().is_success() {
            return Ok(vec![ResponseRecord::server_down()]);
        }
        let body = res.text().context("Could not read response body")?;
        Ok(ratings_records(&body, lines))
    }
}

/// Polls the submission-status endpoint until a terminal result.
///
/// A `result_code` of "wait" keeps the loop going indefinitely; any other
/// value terminates it exactly once. Only malformed responses are bounded:
/// after `MAX_MALFORMED_POLLS` consecutive parse failures the loop gives up
/// and returns `None` (surfaced as service-unavailable).
pub fn poll_submission<F>(mut fetch_status: F) -> Result<Option<api::SubmissionStatus>>
where
    F: FnMut() -> Result<String>,
{
    let mut malformed = 0;
    loop {
        let body = fetch_status()?;
        let status: api::SubmissionStatus = match api::parse_json(&body) {
            Ok(status) => {
                malformed = 0;
                status
            }
            Err(_) => {
                malformed += 1;
                if malformed >= MAX_MALFORMED_POLLS {
                    return Ok(None);
                }
                continue;
            }
        };
        if !status.result().is_wait() {
            return Ok(Some(status));
        }
    }
}

fn description_records(body: &str) -> Vec<ResponseRecord> {
    let info: api::ProblemInfo = match api::parse_json(body) {
        Ok(info) => info,
        Err(_) => return vec![ResponseRecord::server_down()],
    };
    if !info.is_success() {
        return vec![ResponseRecord::not_found(PROBLEM_NOT_FOUND_MSG)];
    }
    let text = format!(
        "\nName: {}\nDescription:\n{}\n\nAuthor: {}\nDate Added: {}\n\
         Max Time Limit: {} secs\nSource Limit: {} Bytes\nLanguages: {}\n",
        info.problem_name,
        scrape::fragment_text(&info.body),
        info.author,
        info.date_added,
        api::display_value(&info.max_timelimit),
        api::display_value(&info.source_sizelimit),
        info.languages_supported,
    );
    vec![ResponseRecord::text(text)]
}

fn contest_problem_records(body: &str, base_url: &str) -> Vec<ResponseRecord> {
    let contest: api::ContestProblems = match api::parse_json(body) {
        Ok(contest) => contest,
        Err(_) => return vec![ResponseRecord::server_down()],
    };
    if !contest.is_success() {
        return vec![ResponseRecord::not_found("Contest not found.")];
    }

    let mut problems: Vec<&api::ContestProblem> = contest.problems.values().collect();
    problems.sort_by(|a, b| a.code.cmp(&b.code));

    let mut rows: Rows = vec![vec![
        "NAME".to_owned(),
        "CODE".to_owned(),
        "URL".to_owned(),
        "SUCCESSFUL SUBMISSIONS".to_owned(),
        "ACCURACY".to_owned(),
        "SCORABLE?".to_owned(),
    ]];
    for problem in problems {
        rows.push(vec![
            problem.name.clone(),
            problem.code.clone(),
            format!("{}{}", base_url, problem.problem_url),
            api::display_value(&problem.successful_submissions),
            format!("{} %", api::display_value(&problem.accuracy)),
            if problem.is_scorable() { "Yes" } else { "No" }.to_owned(),
        ]);
    }

    let mut records = vec![
        ResponseRecord::text(format!("\nName: {}\n", contest.name)),
        ResponseRecord::table(rows),
    ];
    if !contest.announcements.is_empty() {
        records.push(ResponseRecord::text(format!(
            "\nAnnouncements:\n{}",
            contest.announcements
        )));
    }
    records
}

fn tag_list_records(body: &str) -> Vec<ResponseRecord> {
    let items: Vec<api::TagItem> = match api::parse_json(body) {
        Ok(items) => items,
        Err(_) => return vec![ResponseRecord::server_down()],
    };
    if items.is_empty() {
        return vec![ResponseRecord::not_found("Tags not found.")];
    }
    let rows: Rows = items
        .chunks(TAGS_PER_ROW)
        .map(|chunk| chunk.iter().map(|item| item.tag.clone()).collect())
        .collect();
    vec![ResponseRecord::table(rows)]
}

fn tagged_problem_records(body: &str) -> Vec<ResponseRecord> {
    let tagged: api::TaggedProblems = match api::parse_json(body) {
        Ok(tagged) => tagged,
        Err(_) => return vec![ResponseRecord::server_down()],
    };
    let problems = match tagged.all_problems {
        Some(problems) if !problems.is_empty() => problems,
        _ => return vec![ResponseRecord::not_found("Problems not found for the given tags.")],
    };

    let mut sorted: Vec<&api::TaggedProblem> = problems.values().collect();
    sorted.sort_by(|a, b| a.code.cmp(&b.code));

    let mut rows: Rows = vec![TAGGED_TABLE_HEADINGS
        .iter()
        .map(|h| (*h).to_owned())
        .collect()];
    for problem in sorted {
        rows.push(vec![
            problem.code.clone(),
            problem.name.clone(),
            problem.attempted_by.to_string(),
            problem.accuracy().to_string(),
        ]);
    }
    vec![ResponseRecord::table(rows)]
}

fn ratings_records(body: &str, lines: usize) -> Vec<ResponseRecord> {
    let page: api::RatingsPage = match api::parse_json(body) {
        Ok(page) => page,
        Err(_) => return vec![ResponseRecord::server_down()],
    };
    let entries = match page.list {
        Some(entries) if !entries.is_empty() => entries,
        _ => return vec![ResponseRecord::not_found("Ratings not found.")],
    };

    let mut rows: Rows = vec![RATINGS_TABLE_HEADINGS
        .iter()
        .map(|h| (*h).to_owned())
        .collect()];
    rows.extend(entries.iter().take(lines).map(api::RatingEntry::to_row));
    vec![ResponseRecord::table(rows)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ResponseData;

    #[test]
    fn poll_keeps_waiting_until_terminal() {
        let responses = vec![
            r#"{"result_code": "wait"}"#,
            r#"{"result_code": "wait"}"#,
            r#"{"result_code": "accepted"}"#,
            r#"{"result_code": "never fetched"}"#,
        ];
        let mut fetched = 0;
        let status = poll_submission(|| {
            let body = responses[fetched].to_owned();
            fetched += 1;
            Ok(body)
        })
        .unwrap()
        .unwrap();
        assert_eq!(fetched, 3);
        assert_eq!(status.result(), ResultCode::Accepted);
    }

    #[test]
    fn poll_terminates_on_unrecognized_code() {
        let mut fetched = 0;
        let status = poll_submission(|| {
            fetched += 1;
            Ok(r#"{"result_code": "partial"}"#.to_owned())
        })
        .unwrap()
        .unwrap();
        assert_eq!(fetched, 1);
        assert_eq!(status.result(), ResultCode::Other("partial".to_owned()));
    }

    #[test]
    fn poll_gives_up_on_persistent_malformed_responses() {
        let mut fetched = 0;
        let polled = poll_submission(|| {
            fetched += 1;
            Ok("{".to_owned())
        })
        .unwrap();
        assert_eq!(polled, None);
        assert_eq!(fetched, MAX_MALFORMED_POLLS);
    }

    #[test]
    fn poll_recovers_from_transient_malformed_response() {
        let responses = vec!["{", r#"{"result_code": "wrong"}"#];
        let mut fetched = 0;
        let status = poll_submission(|| {
            let body = responses[fetched].to_owned();
            fetched += 1;
            Ok(body)
        })
        .unwrap()
        .unwrap();
        assert_eq!(status.result(), ResultCode::Wrong);
    }

    #[test]
    fn poll_propagates_transport_errors() {
        let polled = poll_submission(|| Err(crate::Error::msg("boom")));
        assert!(polled.is_err());
    }

    #[test]
    fn description_error_status_is_not_found() {
        let records = description_records(r#"{"status": "error"}"#);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, 404);
        match &records[0].data {
            Some(ResponseData::Text(text)) => assert!(text.contains("--contest")),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn description_malformed_json_is_server_down() {
        let records = description_records("{");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, 503);
    }

    #[test]
    fn description_success_text() {
        let records = description_records(
            r#"{"status": "success", "problem_name": "a a", "body": "<p>vbbv</p>"}"#,
        );
        match &records[0].data {
            Some(ResponseData::Text(text)) => {
                assert!(text.contains("Name: a a"));
                assert!(text.contains("Description:\nvbbv"));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn contest_problem_table() {
        let records = contest_problem_records(
            r#"{
                "status": "success",
                "name": "P1",
                "announcements": "---",
                "problems": {
                    "p1": {
                        "name": "P1", "code": "p1", "problem_url": "/p1",
                        "successful_submissions": 12, "accuracy": "11",
                        "category_name": "main"
                    },
                    "p2": {
                        "name": "P2", "code": "p2", "problem_url": "/p2",
                        "successful_submissions": 14, "accuracy": "1",
                        "category_name": ""
                    }
                }
            }"#,
            "https://www.codechef.com",
        );
        assert_eq!(records.len(), 3);
        match &records[1].data {
            Some(ResponseData::Table(rows)) => {
                assert_eq!(
                    rows[0],
                    vec!["NAME", "CODE", "URL", "SUCCESSFUL SUBMISSIONS", "ACCURACY", "SCORABLE?"]
                );
                assert_eq!(
                    rows[1],
                    vec!["P1", "p1", "https://www.codechef.com/p1", "12", "11 %", "Yes"]
                );
                assert_eq!(
                    rows[2],
                    vec!["P2", "p2", "https://www.codechef.com/p2", "14", "1 %", "No"]
                );
            }
            other => panic!("expected table, got {:?}", other),
        }
        match &records[2].data {
            Some(ResponseData::Text(text)) => assert!(text.contains("Announcements:\n---")),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn contest_error_status_is_not_found() {
        let records = contest_problem_records(r#"{"status": "error"}"#, "https://www.codechef.com");
        assert_eq!(records[0].code, 404);
    }

    #[test]
    fn tag_list_matrix() {
        let records = tag_list_records(
            r#"[{"tag": "t1"}, {"tag": "t2"}, {"tag": "t3"},
                {"tag": "t4"}, {"tag": "t5"}, {"tag": "t6"}]"#,
        );
        match &records[0].data {
            Some(ResponseData::Table(rows)) => {
                assert_eq!(rows[0], vec!["t1", "t2", "t3", "t4", "t5"]);
                assert_eq!(rows[1], vec!["t6"]);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn tagged_problems_table() {
        let records = tagged_problem_records(
            r#"{
                "all_problems": {
                    "p1": {"code": "p1", "name": "P1", "attempted_by": 3, "solved_by": 2},
                    "p2": {"code": "p2", "name": "P2", "attempted_by": 4, "solved_by": 4}
                }
            }"#,
        );
        match &records[0].data {
            Some(ResponseData::Table(rows)) => {
                assert_eq!(rows[0], vec!["CODE", "NAME", "SUBMISSION", "ACCURACY"]);
                assert_eq!(rows[1], vec!["p1", "P1", "3", "66"]);
                assert_eq!(rows[2], vec!["p2", "P2", "4", "100"]);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn tagged_problems_null_is_not_found() {
        let records = tagged_problem_records(r#"{"all_problems": null}"#);
        assert_eq!(records[0].code, 404);
    }

    #[test]
    fn ratings_table_with_line_limit() {
        let body = r#"{"list": [
            {"global_rank": 1, "country_rank": 1, "username": "u1", "rating": 1, "diff": 2},
            {"global_rank": 2, "country_rank": 2, "username": "u2", "rating": 3, "diff": 4}
        ]}"#;
        let records = ratings_records(body, 1);
        match &records[0].data {
            Some(ResponseData::Table(rows)) => {
                assert_eq!(
                    rows[0],
                    vec!["GLOBAL(COUNTRY)", "USER NAME", "RATING", "GAIN/LOSS"]
                );
                assert_eq!(rows[1], vec!["1 (1)", "u1", "1", "2"]);
                assert_eq!(rows.len(), 2);
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn ratings_null_list_is_not_found() {
        assert_eq!(ratings_records(r#"{"list": null}"#, 10)[0].code, 404);
        assert_eq!(ratings_records("{", 10)[0].code, 503);
    }
}
