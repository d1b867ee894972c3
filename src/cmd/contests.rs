use structopt::StructOpt;

use crate::cmd::Run;
use crate::config::Config;
use crate::console::Console;
use crate::response::ResponseRecord;
use crate::service::CodechefService;
use crate::Result;

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct ContestsOpt {
    /// Shows past contests instead of present and future ones
    #[structopt(long)]
    past: bool,
}

impl Run for ContestsOpt {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        CodechefService::new(conf, cnsl)?.contests(self.past)
    }
}
