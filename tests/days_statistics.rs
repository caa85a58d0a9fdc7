use std::{cmp::Ordering, path::PathBuf};

use mesonet::{
    parse_file, Config, DayStatistics, DaysStatistics, Error, Extremes, Parameter, StatType,
    TimeComparable,
};
use time::macros::datetime;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn fixtures() -> Vec<PathBuf> {
    ["20180102okcn.mts", "20180102stil.mts", "20180102okce.mts"]
        .into_iter()
        .map(fixture)
        .collect()
}

fn collected() -> DaysStatistics {
    let mut days = DaysStatistics::new(fixtures());
    days.find_statistics().unwrap();
    days
}

#[test]
fn single_day() {
    let records = parse_file(fixture("20180102stil.mts")).unwrap();
    let day = DayStatistics::from_records(&records).unwrap();

    let max = day.get("srad", StatType::Max).unwrap();
    assert_eq!(max.value(), 447.0);
    assert_eq!(max.timestamp(), datetime!(2018-01-02 18:50 UTC));

    let min = day.minimum_day("TAIR").unwrap();
    assert_eq!(min.value(), -11.1);
    assert_eq!(min.timestamp_string(), "2018-01-02T08:05:00 UTC");

    assert_eq!(
        day.to_string(),
        "2018-01-02, STIL:\n \
         Air Temperature[1.5m] = [-11.1000, -8.3714, -5.3000],\n \
         Air Temperature[9m] = [-10.9000, -8.2571, -5.6000],\n \
         Solar Radiation = [0.0000, 71.8571, 447.0000, 503.0000]"
    );
}

#[test]
fn extremes_across_stations() {
    let days = collected();
    assert_eq!(days.days(), 3);

    let max = days.maximum_day("tair").unwrap();
    assert_eq!((max.value(), max.station_id()), (-5.3, "STIL"));
    assert_eq!(max.timestamp(), datetime!(2018-01-02 21:40 UTC));

    let min = days.minimum_day("tair").unwrap();
    assert_eq!((min.value(), min.station_id()), (-13.3, "OKCE"));
    assert_eq!(min.timestamp(), datetime!(2018-01-02 8:05 UTC));

    let min = days.minimum_day("ta9m").unwrap();
    assert_eq!((min.value(), min.station_id()), (-12.4, "OKCE"));
    assert_eq!(min.timestamp(), datetime!(2018-01-02 8:20 UTC));

    let max = days.maximum_day("Srad").unwrap();
    assert_eq!((max.value(), max.station_id()), (447.0, "STIL"));
    assert_eq!(max.timestamp(), datetime!(2018-01-02 18:50 UTC));
}

#[test]
fn ties_go_to_the_first_file() {
    let min = collected().minimum_day("srad").unwrap().clone();
    assert_eq!(min.value(), 0.0);
    assert_eq!(min.station_id(), "OKCN");
    assert_eq!(min.timestamp(), datetime!(2018-01-02 0:00 UTC));
}

#[test]
fn combine_min_max() {
    let days = collected();
    assert_eq!(days.combine_min_max_statistics("tair").unwrap(), "-5.3\n-13.3\n");
    assert_eq!(days.combine_min_max_statistics("SRAD").unwrap(), "447.0\n0.0\n");
}

#[test]
fn summary() {
    assert_eq!(
        collected().to_string(),
        "TAIR MAX -5.3000 STIL 2018-01-02T21:40:00 UTC\n\
         TAIR MIN -13.3000 OKCE 2018-01-02T08:05:00 UTC\n\
         TA9M MAX -5.6000 STIL 2018-01-02T21:40:00 UTC\n\
         TA9M MIN -12.4000 OKCE 2018-01-02T08:20:00 UTC\n\
         SRAD MAX 447.0000 STIL 2018-01-02T18:50:00 UTC\n\
         SRAD MIN 0.0000 OKCN 2018-01-02T00:00:00 UTC"
    );
}

#[test]
fn rendered_timestamps_compare_equal() {
    let days = collected();
    for param in Parameter::ALL {
        for stat in [days.maximum(param).unwrap(), days.minimum(param).unwrap()] {
            let rendered = stat.to_string();
            let (_, timestamp) = rendered.split_at(rendered.len() - "2018-01-02T00:00:00 UTC".len());
            assert_eq!(
                stat.compare_with_time_string(timestamp).unwrap(),
                Ordering::Equal,
                "{rendered}"
            );
        }
    }
}

#[test]
fn sequences_grow_one_entry_per_file() {
    let days = collected();
    for param in Parameter::ALL {
        for kind in StatType::ALL {
            assert_eq!(days.sequence(param, kind).len(), 3, "{param} {kind}");
        }
    }
    let totals: Vec<f64> = days
        .sequence(Parameter::Srad, StatType::Tot)
        .iter()
        .map(|stat| stat.value())
        .collect();
    assert_eq!(totals, [458.0, 503.0, 438.0]);
}

#[test]
fn legacy_srad_layout() {
    let config = Config::default().with_srad_total_in_avg(true);
    let mut days = DaysStatistics::with_config(fixtures(), config);
    days.find_statistics().unwrap();

    assert_eq!(days.sequence(Parameter::Srad, StatType::Avg).len(), 6);
    assert_eq!(days.sequence(Parameter::Tair, StatType::Avg).len(), 3);
    assert_eq!(days.maximum_day("srad").unwrap().value(), 447.0);
}

#[test]
fn first_failing_file_aborts_the_run() {
    let mut files = fixtures();
    files.insert(1, fixture("19991231nope.mts"));

    let mut days = DaysStatistics::new(files);
    assert!(matches!(
        days.find_statistics(),
        Err(Error::FileNotFound { .. })
    ));
    assert_eq!(days.days(), 1);
    assert_eq!(days.maximum_day("tair").unwrap().station_id(), "OKCN");
}

#[test]
fn unknown_parameter() {
    let days = collected();
    match days.maximum_day("stuff") {
        Err(Error::InvalidParameterId(name)) => assert_eq!(name, "stuff"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn merge_keeps_fold_order() {
    let files = fixtures();
    let mut first = DaysStatistics::new(files[..1].to_vec());
    first.find_statistics().unwrap();
    let mut rest = DaysStatistics::new(files[1..].to_vec());
    rest.find_statistics().unwrap();

    first.merge(rest);
    assert_eq!(first.to_string(), collected().to_string());
    assert_eq!(first.files(), fixtures().as_slice());
}
