//! Layout engine: anchor occupancy, edge routing, and connector synthesis
//!
//! The routing pipeline for one connector: both elements expose their pole
//! (box center), their borders resolve the best free anchor near the line
//! between the poles, and [`Connector::between`] turns the two anchor points
//! into a 2-4 point orthogonal path with arrowhead triangles.

pub mod anchor;
pub mod border;
pub mod config;
pub mod connector;
pub mod element;
pub mod error;

pub use anchor::{Anchor, ConnectorId, Edge, EdgeIndex};
pub use border::Border;
pub use config::{LayoutConfig, BASELINE_HEIGHT, OPTIMAL_ROUTE_DY};
pub use connector::{Connector, ConnectorStyle, LabelBox};
pub use element::{Element, ElementKind};
pub use error::LayoutError;

/// Find declared names within a small edit distance of a misspelled one,
/// closest first, at most three
pub(crate) fn find_similar<'a, I>(names: I, target: &str, max_distance: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut candidates: Vec<(usize, String)> = names
        .into_iter()
        .filter_map(|name| {
            let distance = levenshtein_distance(name, target);
            (distance > 0 && distance <= max_distance).then(|| (distance, name.to_string()))
        })
        .collect();
    candidates.sort();
    candidates.into_iter().map(|(_, name)| name).take(3).collect()
}

/// Levenshtein edit distance, two-row dynamic programming
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
