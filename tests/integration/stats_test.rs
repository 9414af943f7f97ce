use super::support::RecordingBackend;
use nicmon::core::monitor::{
    BackendKind, BackendRegistry, DmaRegion, MonitorType, Nic, StatId, StatState, StatValue,
    StatValues,
};
use nicmon::{MonError, NicConfig};

fn active_nic(mon_type: MonitorType, registry: BackendRegistry) -> Nic {
    let mut nic = Nic::with_registry(NicConfig::new("nic0", mon_type), registry);
    nic.probe();
    nic.mon_init().unwrap();
    nic
}

#[test]
fn test_null_monitor_scenario() {
    let mut nic = active_nic(MonitorType::Null, BackendRegistry::builtin());
    assert_eq!(nic.mon_name(), "nullmon");

    let mut region = DmaRegion::new(256);
    let mut values = StatValues::new();
    values.set(StatId::Fan1, 900, StatState::Ok);

    nic.mon_read_stats(&mut region, &mut values).unwrap();
    assert!(values.iter().all(|(_, v)| *v == StatValue::NOT_PRESENT));
    assert!(values.snapshot().is_empty());

    nic.mon_fini();
    assert!(!nic.mod_flags().is_mon_active());
}

#[test]
fn test_partial_backend_marks_rest_not_present() {
    let (backend, calls) = RecordingBackend::new(BackendKind::Lm87);
    let backend = backend.with_readings(&[
        (StatId::Value2_5v, 2510),
        (StatId::ValueExtTemp, 47),
        (StatId::Fan0, 3200),
    ]);
    let mut nic = active_nic(
        MonitorType::Lm87,
        BackendRegistry::empty().with_backend(backend.boxed()),
    );

    let mut region = DmaRegion::new(16);
    let mut values = StatValues::new();
    // stale readings from a previous board must not survive
    values.set(StatId::NicPower, 12, StatState::Warning);

    nic.mon_read_stats(&mut region, &mut values).unwrap();

    assert_eq!(calls.read_stats(), 1);
    assert_eq!(values.present_count(), 3);
    assert_eq!(values[StatId::Value2_5v], StatValue::new(2510, StatState::Ok));
    assert_eq!(values[StatId::Fan0].value, 3200);
    assert_eq!(values[StatId::NicPower], StatValue::NOT_PRESENT);

    let names: Vec<String> = values.snapshot().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["value_2_5v", "value_ext_temp", "fan0"]);
}

#[test]
fn test_region_forwarded_to_backend() {
    let (backend, _calls) = RecordingBackend::new(BackendKind::Mcdi);
    let backend = backend.without_reset().without_reconfigure();
    let mut nic = active_nic(
        MonitorType::Sfx91x0,
        BackendRegistry::empty().with_backend(backend.boxed()),
    );

    let mut region = DmaRegion::new(8);
    let mut values = StatValues::new();
    nic.mon_read_stats(&mut region, &mut values).unwrap();

    assert_eq!(region.as_slice()[0], 0xa5);
}

#[test]
fn test_read_failure_propagates_without_retry() {
    let (backend, calls) = RecordingBackend::new(BackendKind::Max6647);
    let backend = backend.failing_read(71);
    let mut nic = active_nic(
        MonitorType::Max6647,
        BackendRegistry::empty().with_backend(backend.boxed()),
    );

    let mut region = DmaRegion::default();
    let mut values = StatValues::new();
    let err = nic.mon_read_stats(&mut region, &mut values).unwrap_err();

    assert_eq!(err, MonError::backend(71));
    assert_eq!(err.code(), 71);
    assert_eq!(calls.read_stats(), 1);
    // a failed read does not tear the monitor down
    assert!(nic.monitor().is_active());
}

#[test]
#[should_panic(expected = "without init")]
fn test_read_before_init_panics() {
    let mut nic = Nic::new(NicConfig::new("nic0", MonitorType::Null));
    nic.probe();

    let mut region = DmaRegion::default();
    let mut values = StatValues::new();
    let _ = nic.mon_read_stats(&mut region, &mut values);
}

#[test]
#[should_panic(expected = "without init")]
fn test_read_after_fini_panics() {
    let mut nic = active_nic(MonitorType::Null, BackendRegistry::builtin());
    nic.mon_fini();

    let mut region = DmaRegion::default();
    let mut values = StatValues::new();
    let _ = nic.mon_read_stats(&mut region, &mut values);
}
