//! Textual renderings of colored graphs.

use std::fmt::{self, Display, Write as _};

use colorforge_core::{Coloring, Graph, NodeKey};

/// Renders `graph` as an undirected Graphviz document.
///
/// Each node is filled with its color from `coloring`, written through
/// `Display`, so colors should be Graphviz color names or `#rrggbb` values.
/// Uncolored nodes are left unfilled. Each edge appears once.
///
/// # Example
///
/// ```
/// use colorforge::{Coloring, Graph};
/// use colorforge::render::to_dot;
///
/// let graph = Graph::from_adjacency([("A", vec!["B"]), ("B", vec!["A"])]).unwrap();
/// let coloring = Coloring::from_entries(vec![("A", "yellow"), ("B", "green")]);
///
/// let dot = to_dot(&graph, &coloring);
/// assert!(dot.starts_with("graph {"));
/// assert!(dot.contains("\"A\" [fillcolor=\"yellow\"];"));
/// assert!(dot.contains("\"A\" -- \"B\";"));
/// ```
pub fn to_dot<N, C>(graph: &Graph<N>, coloring: &Coloring<N, C>) -> String
where
    N: NodeKey + Display,
    C: Display,
{
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = write_dot(&mut output, graph, coloring);
    output
}

fn write_dot<N, C>(output: &mut String, graph: &Graph<N>, coloring: &Coloring<N, C>) -> fmt::Result
where
    N: NodeKey + Display,
    C: Display,
{
    writeln!(output, "graph {{")?;
    writeln!(output, "    node [style=filled];")?;
    for key in graph.keys() {
        match coloring.get(key) {
            Some(color) => writeln!(
                output,
                "    {} [fillcolor={}];",
                quoted(key),
                quoted(color)
            )?,
            None => writeln!(output, "    {};", quoted(key))?,
        }
    }
    for (a, b) in graph.edges() {
        writeln!(output, "    {} -- {};", quoted(a), quoted(b))?;
    }
    writeln!(output, "}}")
}

fn quoted(value: impl Display) -> String {
    let text = value.to_string();
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Lists `node  color` pairs in coloring order, one per line, with the node
/// column padded to the widest node.
///
/// # Example
///
/// ```
/// use colorforge::Coloring;
/// use colorforge::render::to_table;
///
/// let coloring = Coloring::from_entries(vec![("NSW", "red"), ("WA", "blue")]);
/// assert_eq!(to_table(&coloring), "NSW  red\nWA   blue\n");
/// ```
pub fn to_table<N, C>(coloring: &Coloring<N, C>) -> String
where
    N: NodeKey + Display,
    C: Display,
{
    let rows: Vec<(String, String)> = coloring
        .iter()
        .map(|(node, color)| (node.to_string(), color.to_string()))
        .collect();
    let width = rows.iter().map(|(node, _)| node.len()).max().unwrap_or(0);

    let mut output = String::new();
    for (node, color) in rows {
        let _ = writeln!(output, "{node:<width$}  {color}");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorforge_test::graphs::triangle;

    #[test]
    fn test_dot_lists_every_node_and_edge_once() {
        let graph = triangle();
        let coloring = Coloring::from_entries(vec![("A", "red"), ("B", "green"), ("C", "blue")]);
        let dot = to_dot(&graph, &coloring);

        assert_eq!(dot.matches(" -- ").count(), 3);
        assert!(dot.contains("\"C\" [fillcolor=\"blue\"];"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_uncolored_node() {
        let graph = triangle();
        let coloring = Coloring::from_entries(vec![("A", "red")]);
        let dot = to_dot(&graph, &coloring);
        assert!(dot.contains("    \"B\";\n"));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        assert_eq!(quoted("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_table_empty() {
        let coloring: Coloring<&str, &str> = Coloring::from_entries(vec![]);
        assert_eq!(to_table(&coloring), "");
    }
}
