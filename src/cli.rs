use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "chatshade")]
#[command(version = "0.1.0")]
#[command(about = "Live theme preview for chat client views")]
pub struct CliArgs {
    /// Theme to start with (light, dark, black, a theme file name, or system)
    #[arg(long, short = 'T')]
    pub theme: Option<String>,

    /// Config file to use instead of the discovered one
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Print the themed view tree once instead of opening the preview
    #[arg(long)]
    pub dump: bool,

    /// Image to show in the demo attachment (path or file:// URL)
    #[arg(long)]
    pub image: Option<String>,
}

pub fn parse_args() -> Result<CliArgs, Box<dyn std::error::Error>> {
    Ok(CliArgs::parse())
}
