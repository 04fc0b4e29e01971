//! Dashboard screen state: location, weather, and exchange rates.
//!
//! One background thread loads all three panels. Weather depends on the
//! geolocation result, so the chain runs sequentially inside the worker
//! rather than as three racing threads.

use std::thread::{self, JoinHandle};

use crate::api::geo::{self, GeoFix};
use crate::api::rates::{self, RateTable};
use crate::api::weather::{self, WeatherReport};
use crate::api::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Location,
    Weather,
    Rates,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Location,
        DashboardTab::Weather,
        DashboardTab::Rates,
    ];

    pub fn next(&self) -> Self {
        match self {
            DashboardTab::Location => DashboardTab::Weather,
            DashboardTab::Weather => DashboardTab::Rates,
            DashboardTab::Rates => DashboardTab::Location,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            DashboardTab::Location => DashboardTab::Rates,
            DashboardTab::Weather => DashboardTab::Location,
            DashboardTab::Rates => DashboardTab::Weather,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Location => "Location",
            DashboardTab::Weather => "Weather",
            DashboardTab::Rates => "Rates",
        }
    }
}

/// Everything the three tabs show, with per-panel source labels.
pub struct DashboardData {
    pub geo: (GeoFix, DataSource),
    pub weather: (WeatherReport, DataSource),
    pub rates: (RateTable, DataSource),
}

fn load_all(offline: bool, force_refresh: bool) -> DashboardData {
    let (fix, geo_source) = geo::load_geo(offline, force_refresh);
    let (report, weather_source) = weather::load_weather(fix.lat, fix.lon, offline, force_refresh);
    let (table, rates_source) = rates::load_rates(offline, force_refresh);
    DashboardData {
        geo: (fix, geo_source),
        weather: (report, weather_source),
        rates: (table, rates_source),
    }
}

pub struct DashboardScreen {
    pub tab: DashboardTab,
    handle: Option<JoinHandle<DashboardData>>,
    pub data: Option<DashboardData>,
}

impl DashboardScreen {
    pub fn open(offline: bool) -> Self {
        let mut screen = Self {
            tab: DashboardTab::Location,
            handle: None,
            data: None,
        };
        screen.spawn(offline, false);
        screen
    }

    fn spawn(&mut self, offline: bool, force_refresh: bool) {
        self.handle = Some(thread::spawn(move || load_all(offline, force_refresh)));
    }

    /// Collect a finished load, if any. Never blocks.
    pub fn poll(&mut self) {
        let finished = self
            .handle
            .as_ref()
            .map(|handle| handle.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok(data) => self.data = Some(data),
                // A panicked worker degrades to the offline chain, which
                // stays on cache and samples and cannot panic on I/O
                Err(_) => self.data = Some(load_all(true, false)),
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.handle.is_some()
    }

    pub fn refresh(&mut self, offline: bool) {
        if self.is_loading() {
            return;
        }
        self.spawn(offline, true);
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }
}
