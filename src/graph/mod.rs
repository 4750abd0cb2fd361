//! Graph model and the color-change propagation rule

pub mod model;
pub mod rules;
pub mod io;

pub use model::Graph;
pub use rules::{ColorChangeRule, Force, PropagationRound};
pub use io::{
    create_example_graphs, graph_to_string, load_graph_from_file, parse_graph_from_string,
    read_graph, save_graph_to_file, GraphParseError,
};
