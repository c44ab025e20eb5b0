//! CLI command implementations.

pub mod inspect;
pub mod normalize;
pub mod rechunk;
pub mod schema;

use brat_io::{BratIo, BratIoConfig};

use crate::cli::unescape_delimiter;

/// A `BratIo` splitting sentences on the (escaped) `delimiter` flag.
fn brat_io(delimiter: &str) -> BratIo {
    let delimiter = unescape_delimiter(delimiter);
    BratIo::with_config(BratIoConfig::default().with_sentence_delimiter(Some(delimiter)))
}
