use clap::Parser;

/// 沒有自訂參數；clap 只提供 --help 與 --version
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "grade-tracker")]
#[command(version)]
#[command(about = "A small student grade tracker that prints sample reports")]
pub struct CliConfig {}
