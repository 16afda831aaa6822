/*!

Routing-tree construction and metric analysis for wireless sensor networks.

A network of sensors is deployed into a plane at a fixed communication
range, deriving a channel graph from a range query (`network`). A routing
builder runs a breadth-first level assignment over that graph and hands each
sensor's ordered candidate-parent list to a pluggable selection policy
(`routing`), producing a spanning tree rooted at sensor `0`, the base
station. Five calculators (`metrics`) score the resulting tree: structural
(degree variance, robustness) and propagation-model (channel quality, data
aggregation, latency) analyses.

The remaining modules are the collaborators that make the above reachable
from a command line: random placement, SVG rendering, metric-table writing
and the Monte-Carlo range sweep that drives them across many trials.

*/

pub mod cli;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod metrics;
pub mod mst;
pub mod network;
pub mod placement;
pub mod routing;
pub mod sweep;
pub mod svg;
pub mod table;

pub use error::{Error, Result};
