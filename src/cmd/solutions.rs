use structopt::StructOpt;
use strum::VariantNames;

use crate::cmd::Run;
use crate::config::Config;
use crate::console::Console;
use crate::model::{ProblemCode, ResultFilter};
use crate::response::ResponseRecord;
use crate::service::CodechefService;
use crate::Result;

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct SolutionsOpt {
    #[structopt(name = "problem")]
    problem_code: ProblemCode,
    /// Page of the listing
    #[structopt(long, short = "p", default_value = "1")]
    page: u32,
    /// Filter by language name (e.g. PYTH, ADA)
    #[structopt(long)]
    language: Option<String>,
    /// Filter by submission result
    #[structopt(long, possible_values = &ResultFilter::VARIANTS)]
    result: Option<ResultFilter>,
    /// Filter by submitting user
    #[structopt(long)]
    username: Option<String>,
}

impl Run for SolutionsOpt {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        CodechefService::new(conf, cnsl)?.solutions(
            &self.problem_code,
            self.page,
            self.language.as_deref(),
            self.result,
            self.username.as_deref(),
        )
    }
}
