use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "man-link")]
#[command(version)]
#[command(about = "Make a man page link that simply includes another page")]
pub struct CliConfig {
    #[arg(help = "Name of target man page to link to")]
    pub target: String,

    #[arg(help = "Name of link alias page to create")]
    pub link: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // target 不驗證,照原樣寫入
        validation::validate_path("link", &self.link)?;
        Ok(())
    }
}
