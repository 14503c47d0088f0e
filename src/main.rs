use anyhow::{Result, anyhow};
use clap::Parser;

use dir_sim_tool::classify::{compare_directories, show_report};
use dir_sim_tool::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            first_dir,
            second_dir,
            threshold,
            output,
        } => {
            if !first_dir.exists() {
                return Err(anyhow!("第一个目录不存在: {:?}", first_dir));
            }
            if !second_dir.exists() {
                return Err(anyhow!("第二个目录不存在: {:?}", second_dir));
            }
            compare_directories(&first_dir, &second_dir, threshold, output.as_deref())?;
        }
        Commands::Show { report } => {
            if !report.exists() {
                return Err(anyhow!("报告文件不存在: {:?}", report));
            }
            show_report(&report)?;
        }
    }

    Ok(())
}
