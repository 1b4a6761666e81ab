//! 报表端点（均接受 from / to 日期过滤）

use chrono::NaiveDate;
use gloo_net::http::Method;
use mts_purchase_shared::{DailyTrend, TopProducts, TopSellers};

use super::{ApiClient, ApiError, endpoints, with_query};

/// 报表日期区间，两端都可缺省
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportRange {
    fn apply(self, path: &str) -> String {
        with_query(
            path,
            &[
                ("from", self.from.map(|d| d.to_string())),
                ("to", self.to.map(|d| d.to_string())),
            ],
        )
    }
}

impl ApiClient {
    pub async fn daily_trend(&self, range: ReportRange) -> Result<DailyTrend, ApiError> {
        self.request_data_or_default(Method::GET, &range.apply(endpoints::REPORTS_DAILY_TREND), None)
            .await
    }

    pub async fn top_products(&self, range: ReportRange) -> Result<TopProducts, ApiError> {
        self.request_data_or_default(
            Method::GET,
            &range.apply(endpoints::REPORTS_TOP_PRODUCTS),
            None,
        )
        .await
    }

    pub async fn top_sellers(&self, range: ReportRange) -> Result<TopSellers, ApiError> {
        self.request_data_or_default(Method::GET, &range.apply(endpoints::REPORTS_TOP_SELLERS), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_appends_only_present_bounds() {
        let from = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let range = ReportRange {
            from: Some(from),
            to: None,
        };
        assert_eq!(
            range.apply("/api/reports/trends/daily-purchase"),
            "/api/reports/trends/daily-purchase?from=2026-08-01"
        );
        assert_eq!(
            ReportRange::default().apply("/x"),
            "/x"
        );
    }
}
