use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "gluescript")]
#[command(bin_name = "gluescript")]
#[command(version, about, long_about = None)]
pub struct GluescriptArgs {
    /// Paths of the glue scripts to run, executed in order.
    pub scripts: Vec<String>,
}
