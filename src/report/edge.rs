use std::collections::BTreeSet;
use std::path::Path;

use super::{read_report, ReportError};

/// Marker of the graph edges that point at a discovered node.
pub const EDGE_MARKER: &str = "node -->";
/// Field delimiter of an edge line.
pub const EDGE_DELIMITER: &str = " --> ";
/// Node type annotation following a name.
pub const FQDN_ANNOTATION: &str = " (FQDN)";

/// Extract the subdomain named by one edge line, if the line is an edge.
///
/// `example.com (FQDN) --> node --> www.example.com (FQDN)` yields `www.example.com`.
pub fn subdomain_from_line(line: &str) -> Option<&str> {
    if !line.contains(EDGE_MARKER) {
        return None;
    }
    let target = line.trim().split(EDGE_DELIMITER).nth(2)?;
    let name = target.split(FQDN_ANNOTATION).next().unwrap_or(target).trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Parse a text report into the set of subdomains it references.
/// Iterating the returned set gives names in lexicographic order.
pub fn parse_edge_report(text_path: &Path) -> Result<BTreeSet<String>, ReportError> {
    let content = read_report(text_path)?;
    let subdomains = content
        .lines()
        .filter_map(subdomain_from_line)
        .map(str::to_string)
        .collect();
    Ok(subdomains)
}
