pub use crate::base::{
    config::Config,
    error::NotifierError,
    types::{Err, Issue, Res, Void},
};
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
