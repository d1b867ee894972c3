#![warn(clippy::all)]

#[macro_use]
extern crate strum;

use std::io;

use anyhow::Context as _;
use structopt::StructOpt;
use strum::VariantNames;

mod cmd;
mod config;
mod console;
mod macros;
mod model;
mod response;
mod service;

use cmd::{Cmd, Run as _};
use config::Config;
use console::Console;
use model::SortOrder;

pub type Error = anyhow::Error;
pub type Result<T> = anyhow::Result<T>;

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opt {
    #[structopt(flatten)]
    global_opt: GlobalOpt,
    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobalOpt {
    /// Sorts tabular output by the column with this header
    #[structopt(name = "sort", long, global = true)]
    sort: Option<String>,
    /// Sort direction
    #[structopt(
        name = "order",
        long,
        global = true,
        default_value = SortOrder::Asc.into(),
        possible_values = &SortOrder::VARIANTS,
    )]
    order: SortOrder,
}

impl Opt {
    pub fn run(&self) -> Result<()> {
        let conf = Config::load().context("Could not load config")?;
        let mut cnsl = Console::term();

        let mut records = self.cmd.run(&conf, &mut cnsl)?;
        if let Some(sort) = &self.global_opt.sort {
            response::sort_tables(&mut records, sort, self.global_opt.order);
        }

        let stdout = io::stdout();
        response::render(&records, &mut stdout.lock())
    }
}
