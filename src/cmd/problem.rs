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
pub struct ProblemOpt {
    #[structopt(name = "problem")]
    problem_code: ProblemCode,
    /// Contest the problem belongs to
    #[structopt(long, default_value = "PRACTICE")]
    contest: String,
}

impl Run for ProblemOpt {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        CodechefService::new(conf, cnsl)?.problem(&self.problem_code, &self.contest)
    }
}
