mod relations;
mod select;

use crate::Cli;
use crate::CommandResult;
use relations::RelationsCmd;
use select::SelectCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-select")]
pub(crate) enum CommandEnum {
    /// Print how two schema types relate to each other.
    Relations(Box<RelationsCmd>),

    /// Bind a selection set against a schema and inspect the result.
    Select(Box<SelectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Relations(cmd) => (*cmd).run(cli).await,
            Self::Select(cmd) => (*cmd).run(cli).await,
        }
    }
}
