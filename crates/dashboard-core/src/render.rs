//! Render Engine
//!
//! A snapshot is turned into a [`RenderPlan`] (pure data) and then applied to
//! a [`RenderSurface`]. The table rows are drawn by the view layer straight
//! from the plan; charts and the Export control go through the surface.

use std::collections::BTreeSet;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{ChartSpec, DashboardSnapshot, InsightsSnapshot};

pub const EXPORT_BUTTON_ID: &str = "export-csv-button";
pub const EXPORT_PATH: &str = "/export/";

pub const STOCK_CHART_ID: &str = "stock-chart";
pub const LOCATION_CHART_ID: &str = "location-chart";
pub const SUPPLIER_CHART_ID: &str = "supplier-chart";
pub const FORECAST_CHART_ID: &str = "forecast-chart";
pub const ANOMALIES_CHART_ID: &str = "anomalies-chart";
pub const STOCK_TREND_CHART_ID: &str = "stock-trend-chart";

/// Fixed message shown in a container whose chart is absent
pub fn placeholder_for(container_id: &str) -> &'static str {
    match container_id {
        STOCK_CHART_ID => "No stock data yet! 🌟",
        LOCATION_CHART_ID => "No location data yet! 🌟",
        SUPPLIER_CHART_ID => "No supplier data yet! 🌟",
        FORECAST_CHART_ID => "No forecast data yet! Add more items. 🌟",
        ANOMALIES_CHART_ID => "No anomalies! Looking good! 🌟",
        STOCK_TREND_CHART_ID => "No trend data yet! 🌟",
        _ => "No data yet! 🌟",
    }
}

/// Where the charts, placeholders and Export control are drawn
pub trait RenderSurface {
    /// (Re)initialize `container_id` with a chart, replacing anything in it
    fn plot(&mut self, container_id: &str, spec: &ChartSpec) -> DashboardResult<()>;

    /// Replace the contents of `container_id` with a text placeholder
    fn placeholder(&mut self, container_id: &str, message: &str) -> DashboardResult<()>;

    /// Recompute the layout of a chart drawn while its container was hidden
    fn resize(&mut self, container_id: &str) -> DashboardResult<()>;

    /// Remove every Export control, returning how many were removed
    fn remove_export_controls(&mut self) -> DashboardResult<usize>;

    fn insert_export_control(&mut self, href: &str) -> DashboardResult<()>;
}

/// One inventory table row, already formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: u32,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub supplier: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartContent {
    Plot(ChartSpec),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlot {
    pub container_id: &'static str,
    pub content: ChartContent,
}

impl ChartSlot {
    fn from_spec(container_id: &'static str, spec: Option<ChartSpec>) -> Self {
        let content = match spec {
            Some(spec) => ChartContent::Plot(spec),
            None => ChartContent::Placeholder(placeholder_for(container_id)),
        };
        Self { container_id, content }
    }

    fn from_raw(container_id: &'static str, raw: Option<&str>) -> Self {
        let spec = match raw.map(ChartSpec::parse) {
            Some(Ok(spec)) => spec,
            Some(Err(err)) => {
                log::warn!("[RENDER] {} chart unreadable: {}", container_id, err);
                None
            }
            None => None,
        };
        Self::from_spec(container_id, spec)
    }
}

/// Everything a render needs, computed without touching the DOM
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPlan {
    pub rows: Vec<TableRow>,
    pub charts: Vec<ChartSlot>,
    pub total_items: u64,
    pub total_value: f64,
    /// `None` for views without an Export control
    pub export_href: Option<String>,
}

impl RenderPlan {
    /// Plan for the main dashboard. Rows keep server order; when `filter`
    /// is set, rows at other locations are dropped.
    pub fn for_dashboard(snapshot: &DashboardSnapshot, filter: Option<&str>, export_href: &str) -> Self {
        let filter = filter.map(str::trim).filter(|f| !f.is_empty());
        let rows = snapshot
            .items
            .iter()
            .filter(|item| filter.map_or(true, |f| item.location == f))
            .map(|item| TableRow {
                id: item.id,
                name: item.name.clone(),
                quantity: item.quantity.to_string(),
                price: format!("{:.2}", item.price),
                supplier: item.supplier.clone(),
                location: item.location.clone(),
            })
            .collect();

        let charts = vec![
            ChartSlot::from_raw(STOCK_CHART_ID, snapshot.stock_chart.as_deref()),
            ChartSlot::from_raw(LOCATION_CHART_ID, snapshot.location_chart.as_deref()),
            ChartSlot::from_raw(SUPPLIER_CHART_ID, snapshot.supplier_chart.as_deref()),
            ChartSlot::from_raw(FORECAST_CHART_ID, snapshot.forecast_chart.as_deref()),
            ChartSlot::from_raw(ANOMALIES_CHART_ID, snapshot.anomalies_chart.as_deref()),
        ];

        Self {
            rows,
            charts,
            total_items: snapshot.total_items,
            total_value: snapshot.total_value,
            export_href: Some(export_href.to_string()),
        }
    }

    /// Refresh the location filter choices from this plan. An unfiltered plan
    /// lists every location; a filtered one can only add to what is known.
    pub fn update_locations(&self, known: &mut BTreeSet<String>, filtered: bool) {
        if !filtered {
            known.clear();
        }
        known.extend(self.rows.iter().map(|row| row.location.clone()));
    }

    pub fn for_insights(snapshot: &InsightsSnapshot) -> Self {
        Self {
            charts: vec![
                ChartSlot::from_spec(FORECAST_CHART_ID, snapshot.forecast.clone()),
                ChartSlot::from_spec(ANOMALIES_CHART_ID, snapshot.anomalies.clone()),
                ChartSlot::from_spec(STOCK_TREND_CHART_ID, snapshot.stock_trend.clone()),
            ],
            ..Default::default()
        }
    }
}

/// Counts from one [`apply`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderReport {
    pub plotted: usize,
    pub placeholders: usize,
    pub skipped: usize,
}

/// Draw `plan` onto `surface`.
///
/// Containers are drawn independently; one that fails is logged and skipped.
/// The Export control is always removed before it is recreated.
pub fn apply<S: RenderSurface + ?Sized>(plan: &RenderPlan, surface: &mut S) -> RenderReport {
    let mut report = RenderReport::default();

    for slot in &plan.charts {
        let result = match &slot.content {
            ChartContent::Plot(spec) => surface.plot(slot.container_id, spec),
            ChartContent::Placeholder(message) => surface.placeholder(slot.container_id, message),
        };
        match (result, &slot.content) {
            (Ok(()), ChartContent::Plot(_)) => report.plotted += 1,
            (Ok(()), ChartContent::Placeholder(_)) => report.placeholders += 1,
            (Err(err), _) => {
                log_skip(slot.container_id, &err);
                report.skipped += 1;
            }
        }
    }

    if let Some(href) = &plan.export_href {
        match surface.remove_export_controls() {
            Ok(removed) if removed > 1 => log::warn!("[RENDER] removed {} duplicate export controls", removed),
            Ok(_) => {}
            Err(err) => log_skip(EXPORT_BUTTON_ID, &err),
        }
        if let Err(err) = surface.insert_export_control(href) {
            log_skip(EXPORT_BUTTON_ID, &err);
        }
    }

    report
}

fn log_skip(target: &str, err: &DashboardError) {
    if err.is_noop() {
        log::debug!("[RENDER] {} skipped: {}", target, err);
    } else {
        log::error!("[RENDER] {} failed: {}", target, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InventoryItem;
    use std::collections::{HashMap, HashSet};

    #[derive(Default)]
    struct FakeSurface {
        containers: HashMap<String, String>,
        missing: HashSet<&'static str>,
        exports: Vec<String>,
        resized: Vec<String>,
    }

    impl RenderSurface for FakeSurface {
        fn plot(&mut self, container_id: &str, spec: &ChartSpec) -> DashboardResult<()> {
            if self.missing.contains(container_id) {
                return Err(DashboardError::ElementMissing(container_id.to_string()));
            }
            self.containers
                .insert(container_id.to_string(), format!("plot:{}", spec.layout["title"]));
            Ok(())
        }

        fn placeholder(&mut self, container_id: &str, message: &str) -> DashboardResult<()> {
            if self.missing.contains(container_id) {
                return Err(DashboardError::ElementMissing(container_id.to_string()));
            }
            self.containers.insert(container_id.to_string(), message.to_string());
            Ok(())
        }

        fn resize(&mut self, container_id: &str) -> DashboardResult<()> {
            self.resized.push(container_id.to_string());
            Ok(())
        }

        fn remove_export_controls(&mut self) -> DashboardResult<usize> {
            let removed = self.exports.len();
            self.exports.clear();
            Ok(removed)
        }

        fn insert_export_control(&mut self, href: &str) -> DashboardResult<()> {
            self.exports.push(href.to_string());
            Ok(())
        }
    }

    fn item(id: u32, name: &str, location: &str) -> InventoryItem {
        InventoryItem {
            id,
            name: name.to_string(),
            quantity: 5,
            price: 2.5,
            supplier: "Acme".to_string(),
            location: location.to_string(),
        }
    }

    fn figure(title: &str) -> Option<String> {
        Some(format!(r#"{{"data":[{{"type":"bar"}}],"layout":{{"title":"{}"}}}}"#, title))
    }

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            items: vec![item(2, "Bolt", "B2"), item(1, "Widget", "A1")],
            total_items: 2,
            total_value: 5.0,
            stock_chart: figure("Stock"),
            location_chart: figure("Location"),
            supplier_chart: figure("Supplier"),
            forecast_chart: figure("Forecast"),
            anomalies_chart: figure("Anomalies"),
        }
    }

    #[test]
    fn test_render_twice_is_idempotent() {
        let snapshot = snapshot();
        let mut surface = FakeSurface::default();

        let first = RenderPlan::for_dashboard(&snapshot, None, EXPORT_PATH);
        apply(&first, &mut surface);
        let after_first = surface.containers.clone();

        let second = RenderPlan::for_dashboard(&snapshot, None, EXPORT_PATH);
        apply(&second, &mut surface);

        assert_eq!(first, second);
        assert_eq!(surface.exports, vec![EXPORT_PATH.to_string()]);
        assert_eq!(surface.containers, after_first);
    }

    #[test]
    fn test_rows_keep_server_order() {
        let plan = RenderPlan::for_dashboard(&snapshot(), None, EXPORT_PATH);
        let ids: Vec<u32> = plan.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(plan.rows[1].price, "2.50");
    }

    #[test]
    fn test_filter_drops_other_locations() {
        let plan = RenderPlan::for_dashboard(&snapshot(), Some("A1"), EXPORT_PATH);
        assert_eq!(plan.rows.len(), 1);
        assert_eq!(plan.rows[0].name, "Widget");

        let blank = RenderPlan::for_dashboard(&snapshot(), Some("  "), EXPORT_PATH);
        assert_eq!(blank.rows.len(), 2);
    }

    #[test]
    fn test_absent_forecast_renders_placeholder() {
        let mut snapshot = snapshot();
        snapshot.forecast_chart = None;
        let mut surface = FakeSurface::default();
        // Stale chart from an earlier render must be replaced
        surface.containers.insert(FORECAST_CHART_ID.into(), "plot:old".into());

        let report = apply(&RenderPlan::for_dashboard(&snapshot, None, EXPORT_PATH), &mut surface);

        assert_eq!(surface.containers[FORECAST_CHART_ID], "No forecast data yet! Add more items. 🌟");
        assert_eq!(report.plotted, 4);
        assert_eq!(report.placeholders, 1);
    }

    #[test]
    fn test_unreadable_chart_falls_back_to_placeholder() {
        let mut snapshot = snapshot();
        snapshot.anomalies_chart = Some("{broken".into());
        let plan = RenderPlan::for_dashboard(&snapshot, None, EXPORT_PATH);
        let slot = plan.charts.iter().find(|s| s.container_id == ANOMALIES_CHART_ID).unwrap();
        assert_eq!(slot.content, ChartContent::Placeholder("No anomalies! Looking good! 🌟"));
    }

    #[test]
    fn test_missing_container_is_skipped() {
        let mut surface = FakeSurface::default();
        surface.missing.insert(SUPPLIER_CHART_ID);

        let report = apply(&RenderPlan::for_dashboard(&snapshot(), None, EXPORT_PATH), &mut surface);

        assert_eq!(report.skipped, 1);
        assert_eq!(report.plotted, 4);
        assert!(!surface.containers.contains_key(SUPPLIER_CHART_ID));
        assert_eq!(surface.exports.len(), 1);
    }

    #[test]
    fn test_duplicate_export_controls_collapse_to_one() {
        let mut surface = FakeSurface::default();
        surface.exports = vec!["/export/".into(), "/export/".into(), "/export/".into()];
        apply(&RenderPlan::for_dashboard(&snapshot(), None, EXPORT_PATH), &mut surface);
        assert_eq!(surface.exports.len(), 1);
    }

    #[test]
    fn test_unfiltered_plan_forgets_removed_locations() {
        let snap = snapshot();
        let mut known = BTreeSet::new();
        RenderPlan::for_dashboard(&snap, None, EXPORT_PATH).update_locations(&mut known, false);
        assert_eq!(known.len(), 2);

        // The only B2 item was deleted
        let snap = DashboardSnapshot { items: vec![item(1, "Widget", "A1")], ..snapshot() };
        RenderPlan::for_dashboard(&snap, None, EXPORT_PATH).update_locations(&mut known, false);
        assert_eq!(known.into_iter().collect::<Vec<_>>(), vec!["A1".to_string()]);
    }

    #[test]
    fn test_filtered_plan_keeps_other_locations() {
        let mut known: BTreeSet<String> = ["A1".to_string(), "B2".to_string()].into();
        let snap = DashboardSnapshot { items: vec![item(2, "Bolt", "B2"), item(3, "Crate", "C3")], ..snapshot() };
        RenderPlan::for_dashboard(&snap, Some("C3"), EXPORT_PATH).update_locations(&mut known, true);
        assert_eq!(known.len(), 3);
    }

    #[test]
    fn test_insights_plan_has_no_export() {
        let insights = InsightsSnapshot {
            forecast: ChartSpec::parse(&figure("Forecast").unwrap()).unwrap(),
            ..Default::default()
        };
        let mut surface = FakeSurface::default();
        let report = apply(&RenderPlan::for_insights(&insights), &mut surface);

        assert_eq!(report.plotted, 1);
        assert_eq!(report.placeholders, 2);
        assert_eq!(surface.containers[STOCK_TREND_CHART_ID], "No trend data yet! 🌟");
        assert!(surface.exports.is_empty());
    }
}
