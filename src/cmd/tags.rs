use structopt::StructOpt;

use crate::cmd::Run;
use crate::config::Config;
use crate::console::Console;
use crate::response::ResponseRecord;
use crate::service::CodechefService;
use crate::Result;

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct TagsOpt {
    /// With no tags, lists all of them; otherwise lists the problems
    /// carrying every given tag
    #[structopt(name = "tag")]
    tags: Vec<String>,
}

impl Run for TagsOpt {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        CodechefService::new(conf, cnsl)?.tags(&self.tags)
    }
}
