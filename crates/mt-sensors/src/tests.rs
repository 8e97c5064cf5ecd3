//! Unit tests for mt-sensors.

#[cfg(test)]
mod mode_tests {
    use crate::OperatingMode;

    #[test]
    fn parse_and_display() {
        assert_eq!("idle".parse::<OperatingMode>().unwrap(), OperatingMode::Idle);
        assert_eq!(" Stressed ".parse::<OperatingMode>().unwrap(), OperatingMode::Stressed);
        assert_eq!(OperatingMode::Active.to_string(), "active");
    }

    #[test]
    fn unknown_mode_errors() {
        assert!("overdrive".parse::<OperatingMode>().is_err());
    }
}

#[cfg(test)]
mod profile_tests {
    use mt_core::Tick;

    use crate::{ModeMix, ModeProfile, OperatingMode};

    #[test]
    fn idle_baseline_is_below_every_stress_threshold() {
        let r = ModeProfile::baseline(OperatingMode::Idle, Tick(3));
        assert_eq!(r.tick, Tick(3));
        assert_eq!(r.load, 25.0);
        assert_eq!(r.motor_temp, 27.0);
        assert_eq!(r.noise, 40.0);
        assert_eq!(r.vibration, 0.1);
        assert!((r.current - 1.95).abs() < 1e-12);
        assert!((r.rpm - 1275.0).abs() < 1e-12);
    }

    #[test]
    fn stressed_profile_is_hotter_and_louder() {
        let idle = ModeProfile::for_mode(OperatingMode::Idle);
        let stressed = ModeProfile::for_mode(OperatingMode::Stressed);
        assert!(stressed.temp_rise > idle.temp_rise);
        assert!(stressed.noise_base > idle.noise_base);
        assert!(stressed.load_range.0 >= idle.load_range.1);
    }

    #[test]
    fn mix_validation() {
        assert!(ModeMix::new(0.2, 0.6, 0.2).is_ok());
        assert!(ModeMix::new(-1.0, 1.0, 1.0).is_err());
        assert!(ModeMix::new(0.0, 0.0, 0.0).is_err());
        assert!(ModeMix::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(ModeMix::new(1.0, f64::INFINITY, 1.0).is_err());
        assert_eq!(ModeMix::only(OperatingMode::Stressed).weights(), &[0.0, 0.0, 1.0]);
    }
}

#[cfg(test)]
mod synthetic_tests {
    use mt_core::Tick;

    use crate::{ModeMix, ModeProfile, OperatingMode, SensorRecord, SyntheticSensors};

    #[test]
    fn yields_exactly_the_horizon() {
        let stream = SyntheticSensors::new(42, 24);
        assert_eq!(stream.len(), 24);
        let records: Vec<SensorRecord> = stream.collect();
        assert_eq!(records.len(), 24);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.tick, Tick(i as u64));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<_> = SyntheticSensors::new(7, 200).collect();
        let b: Vec<_> = SyntheticSensors::new(7, 200).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_stream() {
        let a: Vec<_> = SyntheticSensors::new(1, 50).collect();
        let b: Vec<_> = SyntheticSensors::new(2, 50).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn readings_respect_mode_ranges() {
        for r in SyntheticSensors::new(42, 2_000) {
            let p = ModeProfile::for_mode(r.mode);
            assert!(r.load >= p.load_range.0 && r.load <= p.load_range.1, "{r:?}");
            assert!((25.0..=40.0).contains(&r.ambient_temp), "{r:?}");
        }
    }

    #[test]
    fn mode_mix_is_honoured() {
        let stream = SyntheticSensors::new(5, 500).with_mix(ModeMix::only(OperatingMode::Idle));
        assert!(stream.map(|r| r.mode).all(|m| m == OperatingMode::Idle));
    }

    #[test]
    fn default_mix_visits_every_mode() {
        let records: Vec<_> = SyntheticSensors::new(42, 1_000).collect();
        for mode in OperatingMode::ALL {
            let n = records.iter().filter(|r| r.mode == mode).count();
            assert!(n > 100, "{mode} only drawn {n} times");
        }
        let active = records.iter().filter(|r| r.mode == OperatingMode::Active).count();
        assert!(active > 500, "active should dominate the 20/60/20 mix, got {active}");
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use mt_core::Tick;

    use crate::{OperatingMode, SensorError, load_records_reader};

    const HEADER: &str = "time,mode,load,ambient_temp,motor_temp,rpm,current,noise,vibration\n";

    #[test]
    fn parses_rows_in_order() {
        let csv = format!(
            "{HEADER}0,idle,25,25,27,1275,1.95,40,0.1\n1,stressed,85,30,38.5,1575,3.75,50.2,0.93\n"
        );
        let records = load_records_reader(Cursor::new(csv)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tick, Tick(0));
        assert_eq!(records[0].mode, OperatingMode::Idle);
        assert_eq!(records[1].mode, OperatingMode::Stressed);
        assert_eq!(records[1].current, 3.75);
    }

    #[test]
    fn empty_body_is_empty_stream() {
        let records = load_records_reader(Cursor::new(HEADER)).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn bad_mode_is_parse_error() {
        let csv = format!("{HEADER}0,turbo,25,25,27,1275,1.95,40,0.1\n");
        let err = load_records_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, SensorError::Parse(_)));
    }

    #[test]
    fn non_numeric_field_is_parse_error() {
        let csv = format!("{HEADER}0,idle,lots,25,27,1275,1.95,40,0.1\n");
        assert!(matches!(
            load_records_reader(Cursor::new(csv)),
            Err(SensorError::Parse(_))
        ));
    }

    #[test]
    fn out_of_order_time_rejected() {
        let csv = format!(
            "{HEADER}1,idle,25,25,27,1275,1.95,40,0.1\n1,idle,25,25,27,1275,1.95,40,0.1\n"
        );
        let err = load_records_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("does not follow"), "{err}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_records_csv(std::path::Path::new("/nonexistent/sensors.csv"))
            .unwrap_err();
        assert!(matches!(err, SensorError::Io(_)));
    }
}
