//! Command-line options of `mstc`.
//! `GRAPH` is the only required argument; everything else overrides `mst.toml`.

use clap::{Arg, ArgAction, Command};
use std::error::Error;
use std::path::PathBuf;

use crate::config::MstConfig;
use crate::mst::{Algorithm, Connectivity};

fn make_options_parser() -> clap::Command {
    Command::new("mstc")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Runs Prim's and Kruskal's MST algorithms on a graph and compares them")
        .arg(
            Arg::new("input")
                .value_name("GRAPH")
                .help("Graph file (.json or .ron)")
                .required(true),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Which algorithm(s) to run")
                .value_parser(["prim", "kruskal", "both"]),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Report file; the extension selects JSON or RON"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value("mst.toml"),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("NODE")
                .help("Start node for Prim's algorithm"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on disconnected graphs instead of returning a forest")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Run both algorithms concurrently")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub input: PathBuf,
    pub algorithms: Option<Vec<Algorithm>>,
    pub output: Option<String>,
    pub config: PathBuf,
    pub start_node: Option<String>,
    pub strict: bool,
    pub parallel: bool,
}

/// Shell-style word splitting, as used for `MST_FLAGS`.
pub fn split_flags(s: &str) -> Result<Vec<String>, Box<dyn Error>> {
    Ok(shellwords::split(s)?)
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = split_flags(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let algorithms = match matches.get_one::<String>("algorithm").map(String::as_str) {
            None => None,
            Some("both") => Some(Algorithm::ALL.to_vec()),
            Some(name) => Some(vec![name.parse::<Algorithm>()?]),
        };
        let input = matches
            .get_one::<String>("input")
            .map(PathBuf::from)
            .ok_or("missing GRAPH argument")?;
        let config = matches
            .get_one::<String>("config")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("mst.toml"));

        Ok(Options {
            input,
            algorithms,
            output: matches.get_one::<String>("output").cloned(),
            config,
            start_node: matches.get_one::<String>("start").cloned(),
            strict: matches.get_flag("strict"),
            parallel: matches.get_flag("parallel"),
        })
    }

    /// Command-line values win over the config file.
    pub fn apply(&self, config: &mut MstConfig) {
        if let Some(algorithms) = &self.algorithms {
            config.algorithms = algorithms.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(start) = &self.start_node {
            config.start_node = Some(start.clone());
        }
        if self.strict {
            config.connectivity = Connectivity::Strict;
        }
        config.parallel |= self.parallel;
    }
}
