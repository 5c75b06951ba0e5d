//! Inventory stock counts for the dashboard bar chart.

/// Current stock of one hardware category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryStock {
    /// Category name.
    pub name: &'static str,
    /// Units in stock.
    pub count: u64,
}

impl InventoryStock {
    /// Creates a stock record.
    #[must_use]
    pub const fn new(name: &'static str, count: u64) -> Self {
        Self { name, count }
    }
}
