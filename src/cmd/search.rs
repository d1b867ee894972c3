use structopt::StructOpt;
use strum::VariantNames;

use crate::cmd::Run;
use crate::config::Config;
use crate::console::Console;
use crate::model::SearchCategory;
use crate::response::ResponseRecord;
use crate::service::CodechefService;
use crate::Result;

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub struct SearchOpt {
    /// Difficulty category of the practice listing
    #[structopt(name = "category", possible_values = &SearchCategory::VARIANTS)]
    category: SearchCategory,
}

impl Run for SearchOpt {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        CodechefService::new(conf, cnsl)?.search(self.category)
    }
}
