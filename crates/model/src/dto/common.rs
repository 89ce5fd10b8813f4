use serde::{Deserialize, Serialize};

/// Envelope wrapping every API response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// The parts of an envelope still worth reading when a request failed.
/// Error bodies may carry no `data` at all, or no envelope whatsoever.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

/// One page of a larger result set. `page` is passed through as the server
/// sent it and `items` keep the server's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub page_total: u32,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(page: u32, page_total: u32, items: Vec<T>) -> Self {
        Self {
            page,
            page_total,
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
