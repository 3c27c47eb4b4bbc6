//! Server-side rendering demo.
use clap::Parser;
use demo::report::SsrArgs;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = SsrArgs::parse();
    let report = args.run()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.text());
    }
    Ok(())
}
