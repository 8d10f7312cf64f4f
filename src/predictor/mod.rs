pub mod pipeline;

pub use pipeline::{Predictor, TOP_N};
