use anyhow::Result;
use contracts::dashboards::d410_ecommerce_overview::{OverviewRequest, OverviewResponse};

use super::aggregations::{self, TOP_LIMIT};
use crate::projections::p910_ecommerce_sales::service::{self as dataset_service, Dataset};

pub const MAX_TOP_LIMIT: usize = 50;

/// Get overview dashboard data
pub async fn get_overview(request: OverviewRequest) -> Result<OverviewResponse> {
    let limit = request.top.unwrap_or(TOP_LIMIT);
    if limit == 0 || limit > MAX_TOP_LIMIT {
        anyhow::bail!("top must be between 1 and {}, got {}", MAX_TOP_LIMIT, limit);
    }

    let dataset = dataset_service::get_dataset().await?;
    Ok(build_overview(&dataset, limit))
}

/// Build all charts from one dataset snapshot
pub fn build_overview(dataset: &Dataset, limit: usize) -> OverviewResponse {
    let sales = &dataset.sales;

    OverviewResponse {
        dataset: dataset.summary(),
        revenue_over_time: aggregations::revenue_over_time(sales),
        top_products_by_revenue: aggregations::top_products_by_revenue(sales, limit),
        top_products_by_quantity: aggregations::top_products_by_quantity(sales, limit),
        revenue_by_weekday: aggregations::revenue_by_weekday(sales),
        top_countries_by_revenue: aggregations::top_countries_by_revenue(sales, limit),
        revenue_by_hour: aggregations::revenue_by_hour(sales),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country
536365,85123A,WHITE HANGING HEART T-LIGHT HOLDER,6,12/1/2010 8:26,2.55,17850.0,United Kingdom
536365,71053,WHITE METAL LANTERN,6,12/1/2010 8:26,3.39,17850.0,United Kingdom
536370,22728,ALARM CLOCK BAKELIKE PINK,24,12/1/2010 8:45,3.75,12583.0,France
C536379,D,Discount,-1,12/1/2010 9:41,27.5,14527.0,United Kingdom
536414,22139,,56,12/1/2010 11:52,0,,United Kingdom
540001,22728,ALARM CLOCK BAKELIKE PINK,12,1/4/2011 10:00,3.75,12583.0,France
540002,21730,GLASS STAR FROSTED T-LIGHT HOLDER,2,1/5/2011 15:30,4.25,13047.0,Unspecified
";

    #[test]
    fn test_build_overview_uses_sales_subset() {
        let dataset = Dataset::build("memory".to_string(), CSV).unwrap();
        let overview = build_overview(&dataset, TOP_LIMIT);

        assert_eq!(overview.dataset.raw_rows, 7);
        assert_eq!(overview.dataset.cleaned_rows, 5);
        assert_eq!(overview.dataset.sales_rows, 4);

        let labels: Vec<&str> = overview
            .revenue_over_time
            .iter()
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(labels, vec!["December-2010", "January-2011"]);
        // 6*2.55 + 6*3.39 + 24*3.75
        assert_eq!(overview.revenue_over_time[0].revenue, 125.64);
        assert_eq!(overview.revenue_over_time[1].revenue, 45.0);

        assert_eq!(overview.top_products_by_revenue[0].stock_code, "22728");
        assert_eq!(overview.top_products_by_revenue[0].value, 135.0);
        assert_eq!(overview.top_products_by_quantity[0].value, 36.0);

        assert_eq!(overview.top_countries_by_revenue[0].country, "France");
        assert!(overview
            .top_countries_by_revenue
            .iter()
            .all(|c| c.country != "Unspecified"));

        let days: Vec<&str> = overview
            .revenue_by_weekday
            .iter()
            .map(|d| d.day.as_str())
            .collect();
        // 2010-12-01 Wednesday, 2011-01-04 Tuesday
        assert_eq!(days, vec!["Tuesday", "Wednesday"]);

        let hours: Vec<u32> = overview.revenue_by_hour.iter().map(|h| h.hour).collect();
        assert_eq!(hours, vec![8, 10]);
    }

    #[test]
    fn test_empty_sales_give_empty_charts() {
        let csv = "InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country
C1,A,A,-1,12/1/2010 8:26,1.0,1,UK
";
        let dataset = Dataset::build("memory".to_string(), csv).unwrap();
        let overview = build_overview(&dataset, TOP_LIMIT);

        assert_eq!(overview.dataset.sales_rows, 0);
        assert!(overview.revenue_over_time.is_empty());
        assert!(overview.top_products_by_revenue.is_empty());
        assert!(overview.revenue_by_weekday.is_empty());
        assert!(overview.revenue_by_hour.is_empty());
    }

    #[test]
    fn test_overview_json_field_names() {
        let dataset = Dataset::build("memory".to_string(), CSV).unwrap();
        let json = serde_json::to_value(build_overview(&dataset, 3)).unwrap();

        assert_eq!(json["dataset"]["sales_rows"], 4);
        assert_eq!(json["revenue_over_time"][0]["label"], "December-2010");
        assert_eq!(json["top_products_by_revenue"][0]["stock_code"], "22728");
        assert_eq!(json["revenue_by_weekday"][0]["day"], "Tuesday");
        assert_eq!(json["top_countries_by_revenue"].as_array().map(|a| a.len()), Some(2));
        assert_eq!(json["revenue_by_hour"][1]["hour"], 10);
    }

    #[tokio::test]
    async fn test_top_limit_is_validated() {
        let err = get_overview(OverviewRequest { top: Some(0) }).await.unwrap_err();
        assert!(err.to_string().contains("top must be between"));

        let err = get_overview(OverviewRequest { top: Some(51) }).await.unwrap_err();
        assert!(err.to_string().contains("top must be between"));
    }
}
