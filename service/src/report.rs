pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Whitelisted sort fields of the performance report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Billable,
    NonBillable,
    Uncategorized,
    Total,
}

impl SortField {
    /// Unrecognized values fall back to the default instead of erroring.
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "name" => Self::Name,
            "billable" => Self::Billable,
            "non_billable" => Self::NonBillable,
            "uncategorized" => Self::Uncategorized,
            "total" => Self::Total,
            _ => Self::Name,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub last_page: usize,
    /// 1-based index of the first row on the page, `None` for an empty page.
    pub from: Option<usize>,
    pub to: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_from_param() {
        assert_eq!(SortField::from_param("billable"), SortField::Billable);
        assert_eq!(SortField::from_param("non_billable"), SortField::NonBillable);
        assert_eq!(
            SortField::from_param("uncategorized"),
            SortField::Uncategorized
        );
        assert_eq!(SortField::from_param("total"), SortField::Total);
        assert_eq!(SortField::from_param("name"), SortField::Name);
    }

    #[test]
    fn test_unknown_sort_field_falls_back_to_name() {
        assert_eq!(SortField::from_param("bogus"), SortField::Name);
        assert_eq!(SortField::from_param(""), SortField::Name);
        // Whitelist matching is exact, not case-insensitive.
        assert_eq!(SortField::from_param("Billable"), SortField::Name);
    }

    #[test]
    fn test_unknown_sort_order_falls_back_to_ascending() {
        assert_eq!(SortOrder::from_param("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::from_param("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::from_param("bogus"), SortOrder::Asc);
    }
}
