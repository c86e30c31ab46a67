use clap::Parser;

use crate::command::bump::BumpArgs;

#[derive(Parser)]
#[command(name = "manifest-bump", about)]
pub struct BumpCli {
    #[command(flatten)]
    pub args: BumpArgs,
}
