pub mod linear;
pub mod tfidf;
pub mod traits;
pub mod vector;

pub use linear::LinearClassifier;
pub use tfidf::TfidfVectorizer;
pub use traits::{ClassifierModel, Vectorizer};
pub use vector::SparseVector;
