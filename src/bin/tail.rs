use clap::Parser;
use headtail::args;
use headtail::content::{self, Operation};
use headtail::file_loader::DiskSource;

#[derive(Parser)]
#[command(name = "tail")]
#[command(about = "Print the last lines or bytes of files")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Raw tokens; the flag grammar (-5, -n5, -n 5) is classified in-crate
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() {
    let cli = Args::parse();
    let request = args::parse(&cli.tokens);
    println!("{}", content::run(Operation::Tail, &request, &DiskSource));
}
