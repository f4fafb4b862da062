pub mod agent;
pub mod console_server;
pub mod dots_and_boxes;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::collections::{BTreeMap, BTreeSet, VecDeque};
    }
}

pub mod prelude {
    pub use super::agent::*;
    pub use super::console_server::*;
    pub use super::dots_and_boxes::prelude::*;
    pub use super::utils::prelude::*;
}
