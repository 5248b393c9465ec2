/*!
# IO

Persistence of graphs at the collaborator boundary. The only supported
format is a small JSON document preserving exactly what the editor needs
back: vertex ids and positions, edge endpoints and weights, and the global
orientation flag. Traces are never persisted.
*/

pub mod json;

pub use json::{from_json, to_json};
