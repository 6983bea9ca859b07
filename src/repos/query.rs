/*
 * Responsibility
 * - コレクション GET のクエリ (_sort / _order / _start / _end / _limit) の組み立て
 * - ページ番号 → offset slice の変換はここに閉じ込める
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: Option<&'static str>,
    pub order: Option<SortOrder>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub limit: Option<usize>,
}

impl ListQuery {
    /// `_sort=date&_order=desc`
    pub fn newest_first() -> Self {
        Self {
            sort: Some("date"),
            order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    /// Fixed-size offset slice for a 1-based page number. Page 0 is read as page 1.
    pub fn page(mut self, page: u32, per_page: usize) -> Self {
        let page = page.max(1) as usize;
        let start = (page - 1).saturating_mul(per_page);
        self.start = Some(start);
        self.end = Some(start.saturating_add(per_page));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query pairs in a stable order, ready for `RequestBuilder::query`.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(sort) = self.sort {
            pairs.push(("_sort", sort.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("_order", order.as_param().to_string()));
        }
        if let Some(start) = self.start {
            pairs.push(("_start", start.to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("_end", end.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("_limit", limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &ListQuery) -> Vec<(&'static str, String)> {
        query.to_pairs()
    }

    #[test]
    fn newest_first_only_sorts() {
        assert_eq!(
            pairs(&ListQuery::newest_first()),
            vec![("_sort", "date".to_string()), ("_order", "desc".to_string())]
        );
    }

    #[test]
    fn third_page_of_six_is_offset_twelve() {
        let query = ListQuery::newest_first().page(3, 6);
        assert_eq!(query.start, Some(12));
        assert_eq!(query.end, Some(18));
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let query = ListQuery::default().page(0, 6);
        assert_eq!(query.start, Some(0));
        assert_eq!(query.end, Some(6));
    }

    #[test]
    fn huge_pages_saturate_instead_of_overflowing() {
        let query = ListQuery::default().page(u32::MAX, usize::MAX);
        assert_eq!(query.start, Some(usize::MAX));
        assert_eq!(query.end, Some(usize::MAX));
    }

    #[test]
    fn featured_query_limits_to_one() {
        assert_eq!(
            pairs(&ListQuery::newest_first().limit(1)),
            vec![
                ("_sort", "date".to_string()),
                ("_order", "desc".to_string()),
                ("_limit", "1".to_string()),
            ]
        );
    }
}
