use anyhow::{Context, Result, anyhow};
use log::{debug, info};

use mst_compare::config::MstConfig;
use mst_compare::mst::{self, Algorithm, MstResult, prim_from};
use mst_compare::options::{Options, split_flags};
use mst_compare::report::MstReport;
use mst_compare::{Graph, io};

fn main() -> Result<()> {
    if std::env::var("MST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MST_LOG")
            .write_style("MST_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if let Ok(flags) = std::env::var("MST_FLAGS") {
        args.extend(split_flags(&flags).map_err(|err| anyhow!("MST_FLAGS: {err}"))?);
    }

    let options = match Options::parse_from_args(&args) {
        Ok(options) => options,
        Err(err) => match err.downcast_ref::<clap::Error>() {
            Some(clap_err) => clap_err.exit(),
            None => return Err(anyhow!("{err}")),
        },
    };
    debug!("mstc options: {:?}", options);

    let mut config = MstConfig::load_from_file(&options.config)?;
    options.apply(&mut config);
    debug!("effective config: {:?}", config);

    let graph = io::read_graph(&options.input)
        .with_context(|| format!("Failed to load graph {:?}", options.input))?;
    graph.validate()?;
    info!(
        "{}: {} nodes, {} edges",
        options.input.display(),
        graph.node_count(),
        graph.edge_count()
    );

    let results = run(&graph, &config)?;
    for result in &results {
        info!(
            "{}: {} edges, total cost {}, {} ops, {:.3} ms",
            result.algorithm,
            result.edge_count(),
            result.total_cost,
            result.operations,
            result.execution_time_ms
        );
    }

    let report = MstReport::new(
        options.input.display().to_string(),
        &graph,
        config.connectivity,
        results,
    );
    if !report.costs_agree {
        log::warn!("total costs differ between algorithms");
    }
    report
        .save_to_file(&config.output)
        .with_context(|| format!("Failed to write report {:?}", config.output))?;
    info!("report written to {}", config.output);
    Ok(())
}

fn run(graph: &Graph, config: &MstConfig) -> Result<Vec<MstResult>> {
    let options = config.mst_options();
    let both = config.algorithms.contains(&Algorithm::Prim)
        && config.algorithms.contains(&Algorithm::Kruskal);
    if config.parallel && both && config.start_node.is_none() {
        let comparison = mst::compare_parallel(graph, &options)?;
        return Ok(config
            .algorithms
            .iter()
            .map(|&algorithm| comparison.result(algorithm).clone())
            .collect());
    }

    let mut results = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        let result = match (algorithm, &config.start_node) {
            (Algorithm::Prim, Some(start)) => prim_from(graph, start, &options)?,
            _ => algorithm.run(graph, &options)?,
        };
        results.push(result);
    }
    Ok(results)
}
