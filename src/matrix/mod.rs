mod csr;
mod interaction;

pub use csr::{CsrMatrix, SparseRow};
pub use interaction::InteractionMatrix;
