use serde::Deserialize;

use crate::forms::FormError;
use crate::pagination::{PageRequest, Sort};

/// Optional paging parameters of list endpoints, e.g. `?page=1&size=20&sort=income,desc`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

impl TryFrom<PageQuery> for PageRequest {
    type Error = FormError;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        let sort = match query.sort.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse::<Sort>()?,
            _ => Sort::default(),
        };

        let request = PageRequest::new(query.page.unwrap_or(0), query.size.unwrap_or(0), sort);

        // The row offset must fit the signed 64-bit SQL OFFSET.
        let offset = request
            .page
            .checked_mul(request.size)
            .and_then(|offset| i64::try_from(offset).ok());
        if offset.is_none() {
            return Err(FormError::PageOutOfRange(request.page));
        }

        Ok(request)
    }
}

/// Required threshold of the income filter endpoint.
#[derive(Debug, Deserialize)]
pub struct IncomeQuery {
    pub income: f64,
}

impl IncomeQuery {
    /// Returns the threshold, rejecting `NaN` and infinities.
    pub fn threshold(&self) -> Result<f64, FormError> {
        if self.income.is_finite() {
            Ok(self.income)
        } else {
            Err(FormError::InvalidIncome)
        }
    }
}
