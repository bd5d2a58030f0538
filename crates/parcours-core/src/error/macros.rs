//! Error macros for parcours

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::ParcoursError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a vertex that is not a key of the graph
#[macro_export]
macro_rules! ensure_vertex {
    ($graph:expr, $vertex:expr) => {
        if !$graph.contains_vertex($vertex) {
            return Err($crate::error::ParcoursError::vertex_not_found($vertex));
        }
    };
}
