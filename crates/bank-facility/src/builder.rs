//! Fluent builder for constructing a [`Facility`].

use bank_core::{RunConfig, StageId, Tick, UniformSource};

use crate::customer::CustomerIds;
use crate::facility::FacilityCounts;
use crate::topology::stations_by_id;
use crate::{Facility, FacilityError, FacilityResult, Stage, Station, Topology};

/// Fluent builder for [`Facility<R>`].
///
/// # Required inputs
///
/// - [`RunConfig`]: tick bound, seed, snapshot interval
/// - `R: UniformSource`: the random source (e.g. [`bank_core::SimRng`])
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                  |
/// |----------------|--------------------------|
/// | `.topology(t)` | [`Topology::reference`]  |
///
/// # Example
///
/// ```rust
/// use bank_core::{RunConfig, SimRng};
/// use bank_facility::{FacilityBuilder, NoopObserver, Topology};
///
/// let config = RunConfig::new(50, 42);
/// let mut facility = FacilityBuilder::new(config, SimRng::new(42))
///     .topology(Topology::reference())
///     .build()
///     .unwrap();
/// facility.run(&mut NoopObserver);
/// assert_eq!(facility.clock().0, 49);
/// ```
pub struct FacilityBuilder<R: UniformSource> {
    config:   RunConfig,
    rng:      R,
    topology: Option<Topology>,
}

impl<R: UniformSource> FacilityBuilder<R> {
    pub fn new(config: RunConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            topology: None,
        }
    }

    /// Supply the stage/station layout.  If not called, the reference
    /// topology is used.
    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = Some(topology);
        self
    }

    /// Validate the topology, build every stage, and return a ready-to-run
    /// [`Facility`].
    pub fn build(self) -> FacilityResult<Facility<R>> {
        let topology = self.topology.unwrap_or_else(Topology::reference);
        topology.validate()?;

        let defs = stations_by_id(&topology);
        let stages = topology
            .stages
            .iter()
            .enumerate()
            .map(|(index, ids)| {
                let stage_id = StageId::try_from(index).map_err(|_| {
                    FacilityError::Config(format!("too many stages: {}", topology.stages.len()))
                })?;
                let stations = ids
                    .iter()
                    .map(|id| {
                        let def = defs[id.as_str()];
                        Station::new(def.id.clone(), def.weight, def.service_ticks, def.server_count)
                    })
                    .collect();
                Ok(Stage::new(stage_id, stations))
            })
            .collect::<FacilityResult<Vec<Stage>>>()?;

        Ok(Facility {
            config: self.config,
            stages,
            clock:  Tick::ZERO,
            ids:    CustomerIds::new(),
            counts: FacilityCounts::default(),
            rng:    self.rng,
        })
    }
}
