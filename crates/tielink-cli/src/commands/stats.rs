//! Stats command implementation.

use crate::cli::StatsArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::tables;
use tielink_graph::GraphSummary;

/// Execute the stats command.
pub fn execute_stats(args: StatsArgs, formatter: &Formatter) -> Result<()> {
    let graph = tables::load_graph(&args.graph.edges, args.graph.nodes.as_deref())?;
    let summary = GraphSummary::of(&graph);

    println!("{}", formatter.format_summary(&summary)?);

    Ok(())
}
