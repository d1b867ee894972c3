use structopt::StructOpt;

use crate::config::Config;
use crate::console::Console;
use crate::response::ResponseRecord;
use crate::Result;

mod contest;
mod contests;
mod login;
mod logout;
mod problem;
mod ratings;
mod search;
mod solution;
mod solutions;
mod submit;
mod tags;
mod team;
mod user;

pub use contest::ContestOpt;
pub use contests::ContestsOpt;
pub use login::LoginOpt;
pub use logout::LogoutOpt;
pub use problem::ProblemOpt;
pub use ratings::RatingsOpt;
pub use search::SearchOpt;
pub use solution::SolutionOpt;
pub use solutions::SolutionsOpt;
pub use submit::SubmitOpt;
pub use tags::TagsOpt;
pub use team::TeamOpt;
pub use user::UserOpt;

/// Every operation resolves to a sequence of response records; an empty
/// sequence means there is nothing to show.
pub trait Run {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>>;
}

#[derive(StructOpt, Debug, Clone, PartialEq, Eq, Hash)]
#[structopt(rename_all = "kebab")]
pub enum Cmd {
    /// Logs in to CodeChef
    Login(LoginOpt),
    /// Logs out and deletes the stored cookies
    Logout(LogoutOpt),
    /// Shows a problem description
    Problem(ProblemOpt),
    /// Submits a solution file and polls for the judging result
    Submit(SubmitOpt),
    /// Lists practice problems of a difficulty category
    Search(SearchOpt),
    /// Lists the problems of a contest
    Contest(ContestOpt),
    /// Lists present and future contests, or past ones
    Contests(ContestsOpt),
    /// Lists tags, or the problems carrying the given tags
    Tags(TagsOpt),
    /// Lists submitted solutions of a problem
    Solutions(SolutionsOpt),
    /// Shows one submitted solution
    Solution(SolutionOpt),
    /// Shows a user profile
    User(UserOpt),
    /// Shows a team profile
    Team(TeamOpt),
    /// Shows user ratings
    Ratings(RatingsOpt),
}

impl Run for Cmd {
    fn run(&self, conf: &Config, cnsl: &mut Console) -> Result<Vec<ResponseRecord>> {
        match self {
            Self::Login(opt) => opt.run(conf, cnsl),
            Self::Logout(opt) => opt.run(conf, cnsl),
            Self::Problem(opt) => opt.run(conf, cnsl),
            Self::Submit(opt) => opt.run(conf, cnsl),
            Self::Search(opt) => opt.run(conf, cnsl),
            Self::Contest(opt) => opt.run(conf, cnsl),
            Self::Contests(opt) => opt.run(conf, cnsl),
            Self::Tags(opt) => opt.run(conf, cnsl),
            Self::Solutions(opt) => opt.run(conf, cnsl),
            Self::Solution(opt) => opt.run(conf, cnsl),
            Self::User(opt) => opt.run(conf, cnsl),
            Self::Team(opt) => opt.run(conf, cnsl),
            Self::Ratings(opt) => opt.run(conf, cnsl),
        }
    }
}
