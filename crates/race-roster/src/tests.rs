//! Unit tests for race-roster.

#[cfg(test)]
mod loader_tests {
    use std::io::{Cursor, Write};

    use race_core::{CompetitorId, Surface};

    use crate::{RosterError, load_roster_csv, load_roster_reader};

    const CSV: &str = "\
id,name,top_speed,acceleration,stamina,consistency,surface,weather_sensitivity\n\
0,Night Ledger,82,75,90,70,firm,1.0\n\
1,Copper Tide,78,88,65,85,Soft,\n\
2,,70,70,70,70,heavy,1.2\n\
";

    #[test]
    fn loads_in_field_order() {
        let roster = load_roster_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(roster.len(), 3);
        let ids: Vec<CompetitorId> = roster.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CompetitorId(0), CompetitorId(1), CompetitorId(2)]);
    }

    #[test]
    fn attributes_and_surface_parsed() {
        let roster = load_roster_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(roster[0].name, "Night Ledger");
        assert_eq!(roster[0].attributes.top_speed, 82.0);
        assert_eq!(roster[0].attributes.consistency, 70.0);
        assert_eq!(roster[0].preferred_surface, Surface::Firm);
        assert_eq!(roster[1].preferred_surface, Surface::Soft);
        assert_eq!(roster[2].preferred_surface, Surface::Heavy);
    }

    #[test]
    fn optional_columns_default() {
        let roster = load_roster_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(roster[1].weather_sensitivity, 1.0);
        assert_eq!(roster[2].weather_sensitivity, 1.2);
        assert!(roster[2].name.is_empty());
        assert_eq!(roster[2].label(), "#2");
    }

    #[test]
    fn unknown_surface_names_value() {
        let csv = "id,name,top_speed,acceleration,stamina,consistency,surface,weather_sensitivity\n\
                   0,A,80,80,80,80,sand,1.0\n";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        match err {
            RosterError::Parse(msg) => {
                assert!(msg.contains("sand"), "{msg}");
                assert!(msg.contains("line 2"), "{msg}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_id_rejected() {
        let csv = "id,name,top_speed,acceleration,stamina,consistency,surface,weather_sensitivity\n\
                   4,A,80,80,80,80,firm,\n\
                   4,B,80,80,80,80,firm,\n";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RosterError::Parse(ref m) if m.contains("duplicate id 4")));
    }

    #[test]
    fn malformed_number_is_parse_error() {
        let csv = "id,name,top_speed,acceleration,stamina,consistency,surface,weather_sensitivity\n\
                   0,A,fast,80,80,80,firm,\n";
        assert!(matches!(load_roster_reader(Cursor::new(csv)), Err(RosterError::Parse(_))));
    }

    #[test]
    fn empty_roster_ok() {
        let csv = "id,name,top_speed,acceleration,stamina,consistency,surface,weather_sensitivity\n";
        assert!(load_roster_reader(Cursor::new(csv)).unwrap().is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let roster = load_roster_csv(file.path()).unwrap();
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_roster_csv(std::path::Path::new("/nonexistent/roster.csv")).unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }
}

#[cfg(test)]
mod generator_tests {
    use race_core::{CompetitorId, RaceRng};

    use crate::generate_roster;
    use crate::generator::{ATTRIBUTE_RANGE, SENSITIVITY_RANGE};

    #[test]
    fn generates_requested_count_with_sequential_ids() {
        let roster = generate_roster(8, &mut RaceRng::new(1));
        assert_eq!(roster.len(), 8);
        for (i, c) in roster.iter().enumerate() {
            assert_eq!(c.id, CompetitorId(i as u32));
            assert!(!c.name.is_empty());
        }
    }

    #[test]
    fn values_within_ranges() {
        for c in generate_roster(50, &mut RaceRng::new(2)) {
            let a = c.attributes;
            for v in [a.top_speed, a.acceleration, a.stamina, a.consistency] {
                assert!(ATTRIBUTE_RANGE.contains(&v));
            }
            assert!(SENSITIVITY_RANGE.contains(&c.weather_sensitivity));
        }
    }

    #[test]
    fn same_seed_same_roster() {
        let a = generate_roster(6, &mut RaceRng::new(77));
        let b = generate_roster(6, &mut RaceRng::new(77));
        let c = generate_roster(6, &mut RaceRng::new(78));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate_roster(0, &mut RaceRng::new(0)).is_empty());
    }
}
