use structopt::StructOpt;

use crate::cmd::Run;
use crate::config::Config;
use crate::console::Console;
use crate::response::ResponseRecord;
use crate::service::CodechefService;
use crate::Result;

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct RatingsOpt {
    /// Filter by country name
    #[structopt(long)]
    country: Option<String>,
    /// Filter by institution name
    #[structopt(long)]
    institution: Option<String>,
    /// Filter by institution type (school, college, organization)
    #[structopt(long)]
    institution_type: Option<String>,
    /// Page of the listing
    #[structopt(long, short = "p", default_value = "1")]
    page: u32,
    /// Maximum number of rating rows to show
    #[structopt(long, default_value = "20")]
    lines: usize,
}

impl Run for RatingsOpt {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        CodechefService::new(conf, cnsl)?.ratings(
            self.country.as_deref(),
            self.institution.as_deref(),
            self.institution_type.as_deref(),
            self.page,
            self.lines,
        )
    }
}
