use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "classify_lines",
    version,
    about = "テキスト行を整数/浮動小数点数/文字列に振り分けるツール"
)]
pub struct Args {
    /// Input files, processed in the order given
    pub files: Vec<PathBuf>,

    /// Directory the category files are written into
    #[arg(short = 'o', value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Prefix prepended to each output filename
    #[arg(short = 'p', value_name = "PREFIX", default_value = "")]
    pub prefix: String,

    /// Append to existing output files instead of overwriting
    #[arg(short = 'a')]
    pub append: bool,

    /// Print short statistics (category counts)
    #[arg(short = 's')]
    pub short_stats: bool,

    /// Print full statistics (counts plus min/max/sum/average)
    #[arg(short = 'f')]
    pub full_stats: bool,
}
