use prettytable::{Cell, Row, Table};

use crate::search::driver::SearchStats;

/// Renders a driver's [`SearchStats`] as a human-readable table.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Successors generated"),
        Cell::new(&stats.successors_generated.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Dead ends"),
        Cell::new(&stats.dead_ends.to_string()),
    ]));
    table.to_string()
}
