use super::{CsrMatrix, SparseRow};
use crate::error::RecommendResult;

/// User x item engagement snapshot.
///
/// Keeps an item-major copy so that item columns can be scored as rows.
#[derive(Debug, Clone)]
pub struct InteractionMatrix {
    user_items: CsrMatrix,
    item_users: CsrMatrix,
}

impl InteractionMatrix {
    pub fn new(user_items: CsrMatrix) -> InteractionMatrix {
        let item_users = user_items.transpose();
        InteractionMatrix {
            user_items,
            item_users,
        }
    }

    /// A matrix without any recorded interaction for `items_count` items.
    pub fn empty(items_count: usize) -> InteractionMatrix {
        InteractionMatrix::new(CsrMatrix::zeros(0, items_count))
    }

    pub fn users_count(&self) -> usize {
        self.user_items.nrows()
    }

    pub fn items_count(&self) -> usize {
        self.user_items.ncols()
    }

    pub fn interactions_count(&self) -> usize {
        self.user_items.nnz()
    }

    pub fn user_items(&self) -> &CsrMatrix {
        &self.user_items
    }

    /// Engagement of every user with the item at `column`.
    pub fn item(&self, column: usize) -> Option<SparseRow<'_>> {
        self.item_users.row(column)
    }

    pub fn has_history(&self, column: usize) -> bool {
        self.item(column).map(|item| !item.is_zero()).unwrap_or(false)
    }

    /// Cosine similarity between item `column` and every item, in column order.
    pub fn item_similarities(&self, column: usize) -> RecommendResult<Vec<f64>> {
        self.item_users.cosine_against_all(column)
    }
}
