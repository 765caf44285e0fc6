//! Region adjacency datasets.
//!
//! Two regions are adjacent when they share a land border. Both tables are
//! symmetric and loop-free.

use colorforge_core::{Graph, GraphError};

/// Adjacency table: each region with the regions bordering it.
pub type AdjacencyTable = &'static [(&'static str, &'static [&'static str])];

/// The 50 US states by postal code. Alaska and Hawaii border no state.
pub const US_STATES: AdjacencyTable = &[
    ("AL", &["FL", "GA", "MS", "TN"]),
    ("AK", &[]),
    ("AZ", &["CA", "NV", "UT", "CO", "NM"]),
    ("AR", &["LA", "MS", "MO", "OK", "TN", "TX"]),
    ("CA", &["AZ", "NV", "OR"]),
    ("CO", &["AZ", "NM", "OK", "KS", "NE", "WY", "UT"]),
    ("CT", &["NY", "MA", "RI"]),
    ("DE", &["MD", "PA", "NJ"]),
    ("FL", &["AL", "GA"]),
    ("GA", &["FL", "AL", "TN", "NC", "SC"]),
    ("HI", &[]),
    ("ID", &["WA", "OR", "NV", "UT", "WY", "MT"]),
    ("IL", &["WI", "IA", "MO", "KY", "IN"]),
    ("IN", &["MI", "OH", "KY", "IL"]),
    ("IA", &["MN", "WI", "IL", "MO", "NE", "SD"]),
    ("KS", &["NE", "MO", "OK", "CO"]),
    ("KY", &["IL", "IN", "OH", "WV", "VA", "TN", "MO"]),
    ("LA", &["AR", "MS", "TX"]),
    ("ME", &["NH"]),
    ("MD", &["DE", "PA", "VA", "WV"]),
    ("MA", &["CT", "NH", "NY", "RI", "VT"]),
    ("MI", &["WI", "IN", "OH"]),
    ("MN", &["IA", "WI", "ND", "SD"]),
    ("MS", &["AL", "AR", "TN", "LA"]),
    ("MO", &["IA", "IL", "KY", "TN", "AR", "OK", "KS", "NE"]),
    ("MT", &["ID", "ND", "SD", "WY"]),
    ("NE", &["SD", "IA", "MO", "KS", "CO", "WY"]),
    ("NV", &["ID", "UT", "AZ", "CA", "OR"]),
    ("NH", &["ME", "MA", "VT"]),
    ("NJ", &["DE", "PA", "NY"]),
    ("NM", &["AZ", "UT", "CO", "OK", "TX"]),
    ("NY", &["NJ", "PA", "VT", "MA", "CT"]),
    ("NC", &["VA", "TN", "GA", "SC"]),
    ("ND", &["MN", "SD", "MT"]),
    ("OH", &["PA", "WV", "KY", "IN", "MI"]),
    ("OK", &["KS", "MO", "AR", "TX", "NM", "CO"]),
    ("OR", &["CA", "NV", "ID", "WA"]),
    ("PA", &["NY", "NJ", "DE", "MD", "WV", "OH"]),
    ("RI", &["CT", "MA"]),
    ("SC", &["GA", "NC"]),
    ("SD", &["ND", "MN", "IA", "NE", "WY", "MT"]),
    ("TN", &["KY", "VA", "NC", "GA", "AL", "MS", "AR", "MO"]),
    ("TX", &["NM", "OK", "AR", "LA"]),
    ("UT", &["ID", "WY", "CO", "NM", "AZ", "NV"]),
    ("VT", &["NY", "NH", "MA"]),
    ("VA", &["KY", "MD", "NC", "TN", "WV"]),
    ("WA", &["ID", "OR"]),
    ("WV", &["OH", "PA", "MD", "VA", "KY"]),
    ("WI", &["MI", "MN", "IA", "IL"]),
    ("WY", &["MT", "SD", "NE", "CO", "UT", "ID"]),
];

/// Australian states and territories.
pub const AU_STATES: AdjacencyTable = &[
    ("ACT", &["NSW"]),
    ("NSW", &["ACT", "QLD", "SA", "VIC"]),
    ("NT", &["QLD", "SA", "WA"]),
    ("QLD", &["NSW", "NT", "SA"]),
    ("SA", &["NSW", "NT", "QLD", "VIC", "WA"]),
    ("TAS", &[]),
    ("VIC", &["NSW", "SA"]),
    ("WA", &["NT", "SA"]),
];

/// Builds a graph from an adjacency table, in table order.
pub fn graph_from_table(table: AdjacencyTable) -> Result<Graph<&'static str>, GraphError> {
    Graph::from_adjacency(
        table
            .iter()
            .map(|&(region, neighbors)| (region, neighbors.iter().copied())),
    )
}

/// Graph of the US states.
pub fn us_states() -> Result<Graph<&'static str>, GraphError> {
    graph_from_table(US_STATES)
}

/// Graph of the Australian states and territories.
pub fn au_states() -> Result<Graph<&'static str>, GraphError> {
    graph_from_table(AU_STATES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_states() {
        let graph = us_states().unwrap();
        assert_eq!(graph.node_count(), 50);
        assert_eq!(graph.edge_count(), 107);
        assert_eq!(graph.max_degree(), 8);
        assert_eq!(graph.degree(graph.id_of(&"AK").unwrap()), 0);
    }

    #[test]
    fn test_au_states() {
        let graph = au_states().unwrap();
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(graph.keys().next(), Some(&"ACT"));
        assert!(graph.neighbors(graph.id_of(&"TAS").unwrap()).is_empty());
    }
}
