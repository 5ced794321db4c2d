pub mod catalog;
pub mod catalogs;
pub mod chunk;
pub mod combinations;
pub mod decode;
pub mod encode;
pub mod error;
pub mod formula;
pub mod logger;
pub mod number;
pub mod roman;
pub mod value;
pub use crate::error::{Error, Result};
pub use catalog::{Catalog, CatalogEntry};
pub use chunk::{ChunkOrder, Chunks, format_chunky, to_chunks};
pub use combinations::{combinations_sum, get_combinations};
pub use decode::{label2num, label2num_fractional};
pub use encode::{EncodingMethod, num2label};
pub use formula::convert_formula;
pub use logger::{CollectingSink, SilentSink, StderrSink, WarningSink};
pub use number::Number;
pub use roman::{RomanNumeral, arab2roman, format_nice_roman, replace_all_arabs, roman2arab};
pub use value::{LabelledValue, labelled_combinations};
