use structopt::StructOpt;

use crate::cmd::Run;
use crate::config::Config;
use crate::console::Console;
use crate::response::ResponseRecord;
use crate::service::CodechefService;
use crate::Result;

static USERNAME_ENV: &str = "CHEFCLI_USERNAME";
static PASSWORD_ENV: &str = "CHEFCLI_PASSWORD";

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct LoginOpt {
    /// Username to log in with; prompted for when omitted
    #[structopt(name = "username")]
    username: Option<String>,
    /// Disconnects other active sessions when the session limit is hit
    #[structopt(long)]
    disconnect_sessions: bool,
}

impl Run for LoginOpt {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        let username = match &self.username {
            Some(username) => username.clone(),
            None => cnsl.get_env_or_prompt_and_read(USERNAME_ENV, "Username: ", false)?,
        };
        let password = cnsl.get_env_or_prompt_and_read(PASSWORD_ENV, "Password: ", true)?;

        let mut chef = CodechefService::new(conf, cnsl)?;
        chef.login(
            username.trim(),
            password.trim(),
            self.disconnect_sessions,
        )
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn empty_credentials_fail_without_network() -> Result<()> {
        let dir = tempdir()?;
        let conf = Config::test_with_cookies_path(dir.path().join("cookies.json"));
        let opt = LoginOpt {
            username: Some("".to_owned()),
            disconnect_sessions: false,
        };
        let records = opt.run(&conf, &mut Console::sink())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, 400);
        Ok(())
    }
}
