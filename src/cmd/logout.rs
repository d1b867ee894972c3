use structopt::StructOpt;

use crate::cmd::Run;
use crate::config::Config;
use crate::console::Console;
use crate::response::ResponseRecord;
use crate::service::CodechefService;
use crate::Result;

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct LogoutOpt {}

impl Run for LogoutOpt {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        CodechefService::new(conf, cnsl)?.logout()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn logout_without_login_is_unauthorized() -> Result<()> {
        let dir = tempdir()?;
        let conf = Config::test_with_cookies_path(dir.path().join("cookies.json"));
        let records = LogoutOpt {}.run(&conf, &mut Console::sink())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, 401);
        Ok(())
    }
}
