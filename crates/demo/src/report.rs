//! Headless runs of the demo, as driven by `demo-ssr`.
use clap::Parser;
use hoist::{context::Context, ssr::Ssr};
use serde::Serialize;

use crate::{
    app::RootView, config::DemoConfig, counter::INCREMENT_ID, random_number::RANDOMIZE_ID,
    random_number::RandomNumber,
};

/// Render the demo to HTML, optionally clicking its buttons in between.
#[derive(Debug, Parser)]
#[command(name = "demo-ssr")]
pub struct SsrArgs {
    #[command(flatten)]
    pub config: DemoConfig,

    /// Number of times to click "Increment Counter".
    #[arg(long, default_value_t = 0)]
    pub increments: u32,

    /// Number of times to click "Randomize number".
    #[arg(long, default_value_t = 0)]
    pub randomizes: u32,

    /// Print a JSON report instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// The outcome of one headless run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub config: DemoConfig,
    pub count: Option<u64>,
    pub random_number: RandomNumber,
    pub initial_html: String,
    pub final_html: String,
}

impl Report {
    pub fn text(&self) -> String {
        format!("init: {}\n\nfinal: {}", self.initial_html, self.final_html)
    }
}

/// Click the element with the given id `times` times.
pub fn click_n(root: &RootView<Ssr>, id: &str, times: u32) -> anyhow::Result<()> {
    for _ in 0..times {
        anyhow::ensure!(root.click(id), "nothing is listening to clicks on '{id}'");
    }
    Ok(())
}

impl SsrArgs {
    /// Build the demo, randomize then increment, and report the result.
    pub fn run(&self) -> anyhow::Result<Report> {
        log::info!("rendering with {:?}", self.config);
        let root = RootView::<Ssr>::new(&self.config, &Context::new())?;
        let initial_html = root.html_string();
        click_n(&root, RANDOMIZE_ID, self.randomizes)?;
        click_n(&root, INCREMENT_ID, self.increments)?;
        Ok(Report {
            config: self.config.clone(),
            count: root.count(),
            random_number: root.random_number(),
            initial_html,
            final_html: root.html_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use crate::{config::Strategy, random_number::RANGE};

    use super::*;

    #[test]
    fn parses_every_flag() {
        let args = SsrArgs::try_parse_from([
            "demo-ssr",
            "--strategy",
            "value",
            "--seed",
            "1",
            "--increments",
            "2",
            "--randomizes",
            "3",
            "--json",
        ])
        .unwrap();
        assert_eq!(Strategy::Value, args.config.strategy);
        assert_eq!(Some(1), args.config.seed);
        assert_eq!(2, args.increments);
        assert_eq!(3, args.randomizes);
        assert!(args.json);
    }

    #[test]
    fn defaults_without_flags() {
        let args = SsrArgs::try_parse_from(["demo-ssr"]).unwrap();
        assert_eq!(Strategy::Wrapped, args.config.strategy);
        assert_eq!(None, args.config.seed);
        assert_eq!((0, 0, false), (args.increments, args.randomizes, args.json));
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(SsrArgs::try_parse_from(["demo-ssr", "--strategy", "shared"]).is_err());
    }

    #[test]
    fn json_report_has_config_and_count() {
        let args = SsrArgs::try_parse_from([
            "demo-ssr",
            "--strategy",
            "value",
            "--seed",
            "1",
            "--increments",
            "2",
        ])
        .unwrap();
        let report = args.run().unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""strategy":"value""#), "{json}");
        assert!(json.contains(r#""count":2"#), "{json}");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(serde_json::json!(1), value["config"]["seed"]);
        assert_eq!(serde_json::json!(0), value["random_number"]);
        assert!(value["initial_html"].as_str().unwrap().contains("Count is: 0"));
        assert!(value["final_html"].as_str().unwrap().contains("Count is: 2"));
    }

    #[test]
    fn randomized_report_stays_in_range_and_repeats() {
        let args =
            SsrArgs::try_parse_from(["demo-ssr", "--seed", "9", "--randomizes", "25"]).unwrap();
        let (a, b) = (args.run().unwrap(), args.run().unwrap());
        assert!(RANGE.contains(&a.random_number.value()));
        assert_eq!(a.random_number, b.random_number);
        assert_eq!(Some(0), a.count);
        assert!(a.text().starts_with("init: <main"));
        assert!(a.text().contains(&a.random_number.label()));
    }
}
