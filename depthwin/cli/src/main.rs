mod meme;
mod slidwin;
mod utils;

use clap::{Parser, Subcommand};
use eyre::Result;

use meme::MemeArgs;
use slidwin::SlidwinArgs;
use utils::UtilsArgs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Average read depth tables over chunks and sliding windows
    Slidwin {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args: SlidwinArgs,
    },

    /// Convert PWM text files to the MEME motif format
    Meme {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args: MemeArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        MainMenu::Slidwin { utils, args } => {
            utils.setup()?;
            args.run()?;
        }
        MainMenu::Meme { utils, args } => {
            utils.setup()?;
            args.run()?;
        }
    }
    Ok(())
}
