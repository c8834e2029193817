pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod schema;
pub mod transform;
pub mod writer;

pub use cli::{Cli, Commands};
pub use config::{FlattenConfig, FlattenOptions};
pub use error::FlattenError;
pub use transform::PokemonRecord;
pub use writer::{convert_to_json, FlattenSummary};
