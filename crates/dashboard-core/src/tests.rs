//! End-to-End Tests
//!
//! Poll loop, API and render plan together, against an in-memory server.

use std::cell::RefCell;

use crate::{
    DashboardError, DashboardResult, DashboardSnapshot, FetchPolicy, InsightsSnapshot, InventoryApi,
    InventoryItem, ItemFields, PollLoop, RenderPlan, Resolution, Ticket, Trigger, EXPORT_PATH,
};

#[derive(Default)]
struct MemoryApi {
    items: RefCell<Vec<InventoryItem>>,
    next_id: RefCell<u32>,
}

impl MemoryApi {
    fn with_items(ids: &[u32]) -> Self {
        let api = Self::default();
        for id in ids {
            api.items.borrow_mut().push(InventoryItem {
                id: *id,
                name: format!("Item {}", id),
                quantity: 1,
                price: 1.0,
                supplier: "Acme".into(),
                location: "A1".into(),
            });
        }
        *api.next_id.borrow_mut() = ids.iter().copied().max().unwrap_or(0);
        api
    }
}

impl InventoryApi for MemoryApi {
    async fn dashboard(&self, location: Option<&str>) -> DashboardResult<DashboardSnapshot> {
        let items: Vec<InventoryItem> = self
            .items
            .borrow()
            .iter()
            .filter(|item| location.map_or(true, |l| item.location == l))
            .cloned()
            .collect();
        Ok(DashboardSnapshot {
            total_items: items.len() as u64,
            total_value: items.iter().map(|i| i.price).sum(),
            items,
            ..Default::default()
        })
    }

    async fn item(&self, id: u32) -> DashboardResult<ItemFields> {
        self.items
            .borrow()
            .iter()
            .find(|item| item.id == id)
            .map(InventoryItem::fields)
            .ok_or(DashboardError::HttpStatus { status: 404, message: "Not Found".into() })
    }

    async fn add_item(&self, fields: &ItemFields) -> DashboardResult<()> {
        let mut next_id = self.next_id.borrow_mut();
        *next_id += 1;
        self.items.borrow_mut().push(InventoryItem {
            id: *next_id,
            name: fields.name.clone(),
            quantity: fields.quantity,
            price: fields.price,
            supplier: fields.supplier.clone(),
            location: fields.location.clone(),
        });
        Ok(())
    }

    async fn edit_item(&self, id: u32, fields: &ItemFields) -> DashboardResult<()> {
        let mut items = self.items.borrow_mut();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(DashboardError::HttpStatus { status: 500, message: "DoesNotExist".into() })?;
        item.name = fields.name.clone();
        item.quantity = fields.quantity;
        item.price = fields.price;
        item.supplier = fields.supplier.clone();
        item.location = fields.location.clone();
        Ok(())
    }

    async fn delete_item(&self, id: u32) -> DashboardResult<()> {
        self.items.borrow_mut().retain(|item| item.id != id);
        Ok(())
    }

    async fn insights(&self) -> DashboardResult<InsightsSnapshot> {
        Ok(InsightsSnapshot::default())
    }
}

/// Rendered table ids
type Screen = Vec<u32>;

/// Apply one fetched snapshot, recording every drawn table in `screens`.
/// Returns the follow-up ticket if any.
fn land(poll: &mut PollLoop, ticket: Ticket, snapshot: &DashboardSnapshot, screens: &mut Vec<Screen>) -> Option<Ticket> {
    match poll.resolve(ticket, true) {
        Resolution::Render => {
            let plan = RenderPlan::for_dashboard(snapshot, None, EXPORT_PATH);
            screens.push(plan.rows.iter().map(|r| r.id).collect());
            poll.rendered()
        }
        Resolution::Superseded { follow_up } => follow_up,
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn test_add_then_fetch_shows_one_row() {
    let api = MemoryApi::default();
    let fields = ItemFields::from_form("Widget", "5", "2.50", "Acme", "A1").unwrap();
    api.add_item(&fields).await.expect("add failed");

    let snapshot = api.dashboard(None).await.expect("fetch failed");
    let plan = RenderPlan::for_dashboard(&snapshot, None, EXPORT_PATH);

    let matching: Vec<_> = plan
        .rows
        .iter()
        .filter(|r| r.name == "Widget" && r.quantity == "5" && r.price == "2.50" && r.supplier == "Acme" && r.location == "A1")
        .collect();
    assert_eq!(matching.len(), 1);
    assert!(matching[0].id > 0);
}

#[tokio::test]
async fn test_delete_then_tick_does_not_resurrect() {
    for policy in [FetchPolicy::Coalesce, FetchPolicy::Concurrent] {
        let api = MemoryApi::with_items(&[5, 7]);
        let mut poll = PollLoop::new(policy);
        let mut screens: Vec<Screen> = Vec::new();

        // A tick is in flight and its response was produced before the delete
        let tick = poll.trigger(Trigger::Tick).unwrap();
        let stale = api.dashboard(None).await.unwrap();

        api.delete_item(7).await.unwrap();
        let refresh = poll.trigger(Trigger::Mutation);

        // Post-delete refresh (if it went out) lands before the stale tick
        if let Some(refresh) = refresh {
            let fresh = api.dashboard(None).await.unwrap();
            assert!(land(&mut poll, refresh, &fresh, &mut screens).is_none());
        }
        let mut next = land(&mut poll, tick, &stale, &mut screens);

        // A scheduled tick right after
        if let Some(t) = poll.trigger(Trigger::Tick) {
            let fresh = api.dashboard(None).await.unwrap();
            next = land(&mut poll, t, &fresh, &mut screens).or(next);
        }
        while let Some(ticket) = next {
            let fresh = api.dashboard(None).await.unwrap();
            next = land(&mut poll, ticket, &fresh, &mut screens);
        }

        assert!(!screens.is_empty(), "policy {:?}", policy);
        assert!(
            screens.iter().all(|ids| !ids.contains(&7)),
            "policy {:?} drew {:?}",
            policy,
            screens
        );
    }
}

#[tokio::test]
async fn test_edit_round_trip() {
    let api = MemoryApi::with_items(&[1]);
    let mut fields = api.item(1).await.unwrap();
    fields.quantity = 42;
    api.edit_item(1, &fields).await.unwrap();

    let snapshot = api.dashboard(None).await.unwrap();
    let plan = RenderPlan::for_dashboard(&snapshot, None, EXPORT_PATH);
    assert_eq!(plan.rows[0].quantity, "42");
    assert!(api.item(99).await.is_err());
}

#[tokio::test]
async fn test_filtered_fetch_and_render_agree() {
    let api = MemoryApi::with_items(&[1, 2]);
    api.add_item(&ItemFields::from_form("Crate", "3", "9", "Acme", "B2").unwrap())
        .await
        .unwrap();

    let snapshot = api.dashboard(Some("B2")).await.unwrap();
    let plan = RenderPlan::for_dashboard(&snapshot, Some("B2"), EXPORT_PATH);
    assert_eq!(plan.rows.len(), 1);
    assert_eq!(plan.total_items, 1);
}
