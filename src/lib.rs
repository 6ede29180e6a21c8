pub mod config;
pub mod disjoint_set;
pub mod error;
pub mod forest;
pub mod linked;
pub mod partition;
pub mod script;

pub use config::{Config, Linking};
pub use error::{ForestError, ScriptError};
pub use forest::DisjointSetForest;
pub use linked::LinkedForest;
pub use partition::Partition;
