//! Shared repository utilities.

use crate::{config::Config, error::AppError, models::Page};

/// Validated pagination window. `page` and `page_size` are both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Applies defaults from `config` and rejects zero values. There is no upper
    /// bound on `page_size`.
    pub fn resolve(
        page: Option<u64>,
        page_size: Option<u64>,
        config: &Config,
    ) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(config.default_page_size);

        let mut errors = Vec::new();
        if page < 1 {
            errors.push("page: must be at least 1".to_string());
        }
        if page_size < 1 {
            errors.push("pageSize: must be at least 1".to_string());
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(Self { page, page_size })
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> usize {
        let offset = (self.page - 1).saturating_mul(self.page_size);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    pub fn limit(&self) -> usize {
        usize::try_from(self.page_size).unwrap_or(usize::MAX)
    }
}

/// Slices an already filtered and ordered sequence into a page envelope.
/// `total` counts every record handed in, a page past the end is empty.
pub fn paginate<T, I>(records: I, request: PageRequest) -> Page<T>
where
    I: IntoIterator<Item = T>,
{
    let mut total = 0u64;
    let mut items = Vec::new();
    let offset = request.offset();
    let limit = request.limit();

    for (index, record) in records.into_iter().enumerate() {
        total += 1;
        if index >= offset && items.len() < limit {
            items.push(record);
        }
    }

    Page {
        items,
        total,
        page: request.page,
        page_size: request.page_size,
    }
}

/// Lowercased search needle; an empty `q` means no text filter.
pub fn normalize_query(q: Option<&str>) -> Option<String> {
    q.filter(|value| !value.is_empty()).map(str::to_lowercase)
}
