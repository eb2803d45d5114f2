//! Integration tests for bank-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, EVENTS_FILE, OCCUPANCY_FILE};
    use crate::row::{CustomerEvent, CustomerEventRow, OccupancyRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn occupancy_row(tick: u64, station_id: &str) -> OccupancyRow {
        OccupancyRow {
            tick,
            stage:        1,
            station_id:   station_id.to_string(),
            queue_len:    4,
            idle_servers: 0,
            busy_servers: 2,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(OCCUPANCY_FILE).exists());
        assert!(dir.path().join(EVENTS_FILE).exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("run").join("1");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(OCCUPANCY_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(OCCUPANCY_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "stage", "station_id", "queue_len", "idle_servers", "busy_servers"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "customer_id", "event", "stage"]);
    }

    #[test]
    fn occupancy_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_occupancy(&[occupancy_row(3, "B"), occupancy_row(3, "C")]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(OCCUPANCY_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][2], "B");
        assert_eq!(&rows[1][2], "C");
        assert_eq!(&rows[1][3], "4");
        assert_eq!(&rows[1][5], "2");
    }

    #[test]
    fn event_stage_blank_unless_dropped() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&CustomerEventRow { tick: 1, customer_id: 0, event: CustomerEvent::Entered, stage: None })
            .unwrap();
        w.write_event(&CustomerEventRow { tick: 4, customer_id: 0, event: CustomerEvent::Dropped, stage: Some(1) })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][2], "entered");
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[1][2], "dropped");
        assert_eq!(&rows[1][3], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod console_tests {
    use std::io::{self, Write};

    use bank_core::{ConstantSource, CustomerId, RunConfig, ScriptedSource, StageId, Tick};
    use bank_facility::{FacilityBuilder, FacilityObserver, StationConfig, StationSnapshot, Topology};

    use crate::console::{ConsoleRenderer, render_station};

    #[test]
    fn station_group_is_padded() {
        let snap = StationSnapshot {
            station_id:   "A".into(),
            queue_len:    3,
            idle_servers: 12,
            busy_servers: 0,
        };
        assert_eq!(render_station(&snap), "{A [_3][12]} ");
    }

    #[test]
    fn customer_lines() {
        let mut r = ConsoleRenderer::new(Vec::new());
        r.on_customer_entered(CustomerId(0), Tick(1));
        r.on_customer_exited(CustomerId(0), Tick(29));
        r.on_customer_dropped(CustomerId(1), StageId(1), Tick(30));
        let text = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(
            text,
            "+ Customer [0] entered at: 1\n\n\
             - Customer [0] exited at: 29\n\n\
             x Customer [1] dropped at: 30\n\n"
        );
    }

    #[test]
    fn idle_reference_grid() {
        let mut f = FacilityBuilder::new(RunConfig::new(2, 0), ConstantSource(0.0))
            .build()
            .unwrap();
        let mut r = ConsoleRenderer::new(Vec::new());
        f.run(&mut r);
        assert!(r.take_error().is_none());
        let text = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(text, "{A [_0][_2]} \n{B [_0][_2]} {C [_0][_3]} \n\n");
    }

    #[test]
    fn single_customer_transcript() {
        let topology = Topology::new().with_stage(vec![StationConfig::new("S", 1, 1, 1)]);
        let rng = ScriptedSource::new([0.0, 0.5, 0.0], 0.0);
        let mut f = FacilityBuilder::new(RunConfig::new(3, 0), rng)
            .topology(topology)
            .build()
            .unwrap();
        let mut r = ConsoleRenderer::new(Vec::new());
        f.run(&mut r);
        let text = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(
            text,
            "+ Customer [0] entered at: 1\n\n\
             {S [_0][_0]} \n\n\
             - Customer [0] exited at: 2\n\n\
             {S [_0][_1]} \n\n"
        );
    }

    /// Accepts writes, fails every flush.
    struct FlushFails;

    impl Write for FlushFails {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("flush refused"))
        }
    }

    #[test]
    fn flush_failure_is_stored() {
        let mut r = ConsoleRenderer::new(FlushFails);
        r.on_customer_entered(CustomerId(0), Tick(1));
        assert!(r.take_error().is_none());
        r.on_run_end(Tick(1));
        let err = r.take_error().unwrap();
        assert_eq!(err.to_string(), "flush refused");
    }
}

#[cfg(test)]
mod observer_tests {
    use bank_core::{RunConfig, SimRng};
    use bank_facility::FacilityBuilder;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, EVENTS_FILE, OCCUPANCY_FILE};
    use crate::observer::FacilityOutputObserver;

    #[test]
    fn run_writes_rows_per_station_per_tick() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = FacilityOutputObserver::new(writer);

        let mut f = FacilityBuilder::new(RunConfig::new(21, 3), SimRng::new(3))
            .build()
            .unwrap();
        f.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(OCCUPANCY_FILE)).unwrap();
        // 20 ticks × 3 stations in the reference layout.
        assert_eq!(rdr.records().count(), 60);

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let entered = rdr
            .records()
            .filter(|r| r.as_ref().map(|r| &r[2] == "entered").unwrap_or(false))
            .count();
        assert_eq!(entered as u64, f.counts().admitted);
    }
}
