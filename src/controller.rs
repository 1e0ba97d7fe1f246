//! Dashboard Controller
//!
//! One owned object per mounted view. Holds the poll loop and the repeating
//! timer, and exposes explicit start/stop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dashboard_core::{
    apply, DashboardConfig, DashboardResult, DashboardSnapshot, InventoryApi, Origin, PollLoop, RenderPlan,
    Resolution, Ticket, Trigger,
};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{export_url, HttpClient};
use crate::plotly::DomSurface;
use crate::store::{store_report, store_set_plan, AppStore, DashboardStateStoreFields};

/// Data source the controller keeps on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// `/api/get_dashboard_data/`: table and five charts
    Dashboard,
    /// `/insights/`: three charts, no table
    Insights,
}

impl ViewKind {
    fn label(self) -> &'static str {
        match self {
            ViewKind::Dashboard => "dashboard",
            ViewKind::Insights => "insights",
        }
    }
}

struct Inner {
    kind: ViewKind,
    client: HttpClient,
    store: AppStore,
    interval_ms: u32,
    poll: RefCell<PollLoop>,
    timer: RefCell<Option<Interval>>,
}

/// What one fetch produced
enum Fetched {
    Dashboard(DashboardSnapshot),
    Insights(RenderPlan),
}

#[derive(Clone)]
pub struct DashboardController {
    inner: Rc<Inner>,
}

impl DashboardController {
    pub fn new(kind: ViewKind, client: HttpClient, config: &DashboardConfig, store: AppStore) -> Self {
        Self {
            inner: Rc::new(Inner {
                kind,
                client,
                store,
                interval_ms: config.poll_interval_ms,
                poll: RefCell::new(PollLoop::new(config.fetch_policy)),
                timer: RefCell::new(None),
            }),
        }
    }

    /// Initial fetch plus the repeating timer
    pub fn start(&self) {
        if self.inner.timer.borrow().is_some() {
            return;
        }
        log::info!("[CTRL] {} polling every {} ms", self.inner.kind.label(), self.inner.interval_ms);
        self.inner.poll.borrow_mut().start();

        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let interval = Interval::new(self.inner.interval_ms, move || {
            if let Some(inner) = weak.upgrade() {
                DashboardController { inner }.refresh(Trigger::Tick);
            }
        });
        *self.inner.timer.borrow_mut() = Some(interval);

        self.refresh(Trigger::Startup);
    }

    /// Cancel the timer; responses still in flight are dropped
    pub fn stop(&self) {
        if self.inner.timer.borrow_mut().take().is_some() {
            log::info!("[CTRL] {} polling stopped", self.inner.kind.label());
        }
        self.inner.poll.borrow_mut().stop();
    }

    pub fn refresh(&self, trigger: Trigger) {
        let ticket = self.inner.poll.borrow_mut().trigger(trigger);
        if let Some(ticket) = ticket {
            self.fetch(ticket);
        }
    }

    fn fetch(&self, ticket: Ticket) {
        let this = self.clone();
        let filter = self.inner.store.location_filter().get_untracked();
        spawn_local(async move {
            let result = match this.inner.kind {
                ViewKind::Dashboard => this
                    .inner
                    .client
                    .dashboard(filter.as_deref())
                    .await
                    .map(Fetched::Dashboard),
                ViewKind::Insights => this
                    .inner
                    .client
                    .insights()
                    .await
                    .map(|insights| Fetched::Insights(RenderPlan::for_insights(&insights))),
            };
            this.land(ticket, filter, result);
        });
    }

    fn land(&self, ticket: Ticket, filter: Option<String>, result: DashboardResult<Fetched>) {
        let resolution = self.inner.poll.borrow_mut().resolve(ticket, result.is_ok());
        let follow_up = match (resolution, result) {
            (Resolution::Render, Ok(fetched)) => {
                self.render(fetched, filter.as_deref());
                self.inner.poll.borrow_mut().rendered()
            }
            (Resolution::Failed { follow_up }, Err(err)) => {
                let origin = if ticket.trigger.is_user_initiated() { Origin::User } else { Origin::Background };
                let notice = format!("Error refreshing {}", self.inner.kind.label());
                store_report(&self.inner.store, origin, notice, &err);
                follow_up
            }
            (Resolution::Superseded { follow_up }, _) => {
                log::debug!("[CTRL] response #{} superseded", ticket.seq);
                follow_up
            }
            (Resolution::Ignored, _) => {
                log::debug!("[CTRL] response #{} ignored", ticket.seq);
                None
            }
            // resolve() mirrors the ok flag it was given
            _ => None,
        };
        if let Some(next) = follow_up {
            self.fetch(next);
        }
    }

    fn render(&self, fetched: Fetched, filter: Option<&str>) {
        let mut surface = DomSurface;
        match fetched {
            Fetched::Dashboard(snapshot) => {
                let plan = RenderPlan::for_dashboard(&snapshot, filter, &export_url(&self.inner.client));
                let report = apply(&plan, &mut surface);
                log::debug!("[CTRL] dashboard rendered: {} rows, {:?}", plan.rows.len(), report);
                store_set_plan(&self.inner.store, plan, filter.is_some());
            }
            Fetched::Insights(plan) => {
                let report = apply(&plan, &mut surface);
                log::debug!("[CTRL] insights rendered: {:?}", report);
                self.inner.store.insights_loaded().set(true);
            }
        }
    }
}
