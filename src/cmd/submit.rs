use std::path::PathBuf;

use structopt::StructOpt;

use crate::cmd::Run;
use crate::config::Config;
use crate::console::Console;
use crate::model::ProblemCode;
use crate::response::ResponseRecord;
use crate::service::CodechefService;
use crate::Result;

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct SubmitOpt {
    #[structopt(name = "problem")]
    problem_code: ProblemCode,
    /// Path of the solution file
    #[structopt(name = "file", parse(from_os_str))]
    file: PathBuf,
    /// Language name, case-insensitive (e.g. C++, Python3, java)
    #[structopt(name = "language")]
    language: String,
}

impl Run for SubmitOpt {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        CodechefService::new(conf, cnsl)?.submit(&self.problem_code, &self.file, &self.language)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Url;
    use tempfile::tempdir;

    use super::*;
    use crate::service::CookieStorage;

    fn fake_login(conf: &Config) -> Result<()> {
        let mut storage = CookieStorage::open(conf.session().cookies_path())?;
        storage.insert_for_test(
            "sessid=abcd; Path=/",
            &Url::parse("https://www.codechef.com/").unwrap(),
        );
        storage.save("www.codechef.com")
    }

    #[test]
    fn submit_without_login_is_unauthorized() -> Result<()> {
        let dir = tempdir()?;
        let conf = Config::test_with_cookies_path(dir.path().join("cookies.json"));
        let opt = SubmitOpt {
            problem_code: "WEICOM".into(),
            file: dir.path().join("solution.py"),
            language: "python3".to_owned(),
        };
        let records = opt.run(&conf, &mut Console::sink())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, 401);
        Ok(())
    }

    #[test]
    fn submit_missing_file_fails_before_any_request() -> Result<()> {
        let dir = tempdir()?;
        let conf = Config::test_with_cookies_path(dir.path().join("cookies.json"));
        fake_login(&conf)?;

        let opt = SubmitOpt {
            problem_code: "WEICOM".into(),
            file: dir.path().join("no-such-file.py"),
            language: "python3".to_owned(),
        };
        let records = opt.run(&conf, &mut Console::sink())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, 400);
        Ok(())
    }
}
