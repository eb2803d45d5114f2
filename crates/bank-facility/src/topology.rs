//! Facility topology: station definitions plus the ordered stage lists, and a
//! CSV loader for it.
//!
//! # CSV format
//!
//! One row per station.  Stage indices must be contiguous from 0; within a
//! stage, rows keep file order (the stage re-sorts by weight when built).
//!
//! ```csv
//! stage,station_id,weight,service_ticks,server_count
//! 0,A,4,3,2
//! 1,B,4,10,2
//! 1,C,6,15,3
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::{FacilityError, FacilityResult};

// ── Topology types ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationConfig {
    pub id:            String,
    pub weight:        u32,
    pub service_ticks: u64,
    pub server_count:  usize,
}

impl StationConfig {
    pub fn new(id: impl Into<String>, weight: u32, service_ticks: u64, server_count: usize) -> Self {
        Self {
            id: id.into(),
            weight,
            service_ticks,
            server_count,
        }
    }
}

/// Station definitions plus the stages that reference them by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    pub stations: Vec<StationConfig>,
    /// Ordered station ids per stage.
    pub stages:   Vec<Vec<String>>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bank's reference layout:
    ///
    /// | Stage | Station | Weight | Duration | Servers |
    /// |-------|---------|--------|----------|---------|
    /// | 0     | A       | 4      | 3        | 2       |
    /// | 1     | B       | 4      | 10       | 2       |
    /// | 1     | C       | 6      | 15       | 3       |
    pub fn reference() -> Self {
        Self::new()
            .with_stage(vec![StationConfig::new("A", 4, 3, 2)])
            .with_stage(vec![
                StationConfig::new("B", 4, 10, 2),
                StationConfig::new("C", 6, 15, 3),
            ])
    }

    /// Define `stations` and append a stage made of exactly those stations.
    pub fn with_stage(mut self, stations: Vec<StationConfig>) -> Self {
        self.stages.push(stations.iter().map(|s| s.id.clone()).collect());
        self.stations.extend(stations);
        self
    }

    /// Check the construction-time invariants.
    ///
    /// Every weight, duration and server count is positive and ids are unique.
    /// There is at least one stage, every stage is non-empty, every
    /// referenced station exists and is used by at most one stage, and each
    /// stage's summed weight fits in a `u32`.
    pub fn validate(&self) -> FacilityResult<()> {
        if self.stages.is_empty() {
            return Err(FacilityError::NoStages);
        }

        let mut defined: HashSet<&str> = HashSet::with_capacity(self.stations.len());
        for station in &self.stations {
            let non_positive = |what| FacilityError::NonPositive { id: station.id.clone(), what };
            if station.weight == 0 {
                return Err(non_positive("weight"));
            }
            if station.service_ticks == 0 {
                return Err(non_positive("service duration"));
            }
            if station.server_count == 0 {
                return Err(non_positive("server count"));
            }
            if !defined.insert(&station.id) {
                return Err(FacilityError::DuplicateStation(station.id.clone()));
            }
        }

        let mut used: HashSet<&str> = HashSet::with_capacity(self.stations.len());
        for (stage, ids) in self.stages.iter().enumerate() {
            if ids.is_empty() {
                return Err(FacilityError::EmptyStage(stage));
            }
            let mut total: u32 = 0;
            for id in ids {
                let Some(def) = self.station(id) else {
                    return Err(FacilityError::UnknownStation { stage, id: id.clone() });
                };
                if !used.insert(id) {
                    return Err(FacilityError::StationReused(id.clone()));
                }
                total = total
                    .checked_add(def.weight)
                    .ok_or(FacilityError::WeightOverflow(stage))?;
            }
        }

        for id in defined.difference(&used) {
            warn!(station = *id, "station is defined but not part of any stage");
        }

        Ok(())
    }

    /// Look up a station definition by id.
    pub fn station(&self, id: &str) -> Option<&StationConfig> {
        self.stations.iter().find(|s| s.id == id)
    }
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TopologyRecord {
    stage:         usize,
    station_id:    String,
    weight:        u32,
    service_ticks: u64,
    server_count:  usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Topology`] from a CSV file.
pub fn load_topology_csv(path: &Path) -> FacilityResult<Topology> {
    let file = std::fs::File::open(path)?;
    load_topology_reader(file)
}

/// Like [`load_topology_csv`] but accepts any `Read` source.
///
/// The result is not validated; [`FacilityBuilder::build`](crate::FacilityBuilder::build)
/// does that.
pub fn load_topology_reader<R: Read>(reader: R) -> FacilityResult<Topology> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut by_stage: BTreeMap<usize, Vec<StationConfig>> = BTreeMap::new();

    for result in csv_reader.deserialize::<TopologyRecord>() {
        let row = result.map_err(|e| FacilityError::Parse(e.to_string()))?;
        by_stage.entry(row.stage).or_default().push(StationConfig {
            id:            row.station_id,
            weight:        row.weight,
            service_ticks: row.service_ticks,
            server_count:  row.server_count,
        });
    }

    let mut topology = Topology::new();
    for (expected, (stage, stations)) in by_stage.into_iter().enumerate() {
        if stage != expected {
            return Err(FacilityError::Parse(format!(
                "stage indices must be contiguous from 0: expected {expected}, found {stage}"
            )));
        }
        topology = topology.with_stage(stations);
    }

    Ok(topology)
}

/// Index station configs by id.  Assumes a validated topology.
pub(crate) fn stations_by_id(topology: &Topology) -> HashMap<&str, &StationConfig> {
    topology.stations.iter().map(|s| (s.id.as_str(), s)).collect()
}
