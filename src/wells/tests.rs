use super::*;

#[test]
fn test_known_offsets_on_96_well_plate() {
    assert_eq!(name_to_offset("A1", 8).unwrap(), 0);
    assert_eq!(name_to_offset("B1", 8).unwrap(), 1);
    assert_eq!(name_to_offset("H1", 8).unwrap(), 7);
    assert_eq!(name_to_offset("A2", 8).unwrap(), 8);
    assert_eq!(name_to_offset("H12", 8).unwrap(), 95);
    assert_eq!(offset_to_name(95, 8).unwrap(), "H12");
    assert_eq!(offset_to_name(8, 8).unwrap(), "A2");
}

#[test]
fn test_names_are_normalized() {
    assert_eq!(name_to_offset("a1", 8).unwrap(), 0);
    assert_eq!(name_to_offset(" c3 ", 8).unwrap(), 18);
    assert_eq!(name_to_offset("A01", 8).unwrap(), 0);
}

#[test]
fn test_384_well_plate() {
    assert_eq!(name_to_offset("P1", 16).unwrap(), 15);
    assert_eq!(name_to_offset("A2", 16).unwrap(), 16);
    assert_eq!(offset_to_name(383, 16).unwrap(), "P24");
}

#[test]
fn test_malformed_names_are_rejected() {
    for bad in ["", "1A", "A", "AA1", "A-1", "A+1", "A 1", "A0", "A1.5", "?3"] {
        let err = name_to_offset(bad, 8).unwrap_err();
        assert!(
            matches!(err, WellError::InvalidWellName { .. }),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn test_row_outside_plate_is_rejected() {
    let err = name_to_offset("I1", 8).unwrap_err();
    assert!(matches!(err, WellError::InvalidWellName { .. }));
    assert!(name_to_offset("I1", 16).is_ok());
}

#[test]
fn test_negative_offset_is_rejected() {
    let err = offset_to_name(-1, 8).unwrap_err();
    assert_eq!(
        err,
        WellError::InvalidWellOffset {
            offset: -1,
            reason: "offsets are non-negative".to_string()
        }
    );
}

#[test]
fn test_zero_rows_is_a_layout_error() {
    assert!(matches!(
        name_to_offset("A1", 0),
        Err(WellError::InvalidLayout { .. })
    ));
    assert!(matches!(
        offset_to_name(3, 27),
        Err(WellError::InvalidLayout { .. })
    ));
}

#[test]
fn test_huge_column_does_not_overflow() {
    let err = name_to_offset("B4294967295", 8).unwrap_err();
    assert!(matches!(err, WellError::InvalidWellName { .. }));
}

#[test]
fn test_huge_offset_does_not_overflow() {
    assert!(matches!(
        offset_to_name(i64::MAX, 1),
        Err(WellError::InvalidWellOffset { .. })
    ));
    assert!(matches!(
        offset_to_name(i64::from(u32::MAX), 1),
        Err(WellError::InvalidWellOffset { .. })
    ));
    assert_eq!(offset_to_name(i64::from(u32::MAX) - 1, 1).unwrap(), "A4294967295");
}

#[test]
fn test_layout_bounds_columns() {
    let plate = PlateLayout::plate_96();
    assert_eq!(plate.offset_of("H12").unwrap(), 95);
    assert!(plate.offset_of("A13").is_err());
    assert!(plate.name_of(96).is_err());
    assert_eq!(plate.name_of(0).unwrap(), "A1");
}

#[test]
fn test_positions_are_one_based() {
    let plate = PlateLayout::default();
    assert_eq!(plate.position_of(&WellRef::from("A1")).unwrap(), 1);
    assert_eq!(plate.position_of(&WellRef::from("A2")).unwrap(), 9);
    assert_eq!(plate.position_of(&WellRef::Offset(95)).unwrap(), 96);
    assert!(plate.position_of(&WellRef::Offset(96)).is_err());
}

#[test]
fn test_well_names_iterate_column_major() {
    let plate = PlateLayout::new(2, 3).unwrap();
    let names: Vec<String> = plate.well_names().collect();
    assert_eq!(names, ["A1", "B1", "A2", "B2", "A3", "B3"]);
    assert_eq!(PlateLayout::plate_96().well_names().count(), 96);
}

#[test]
fn test_invalid_layouts() {
    assert!(PlateLayout::new(0, 12).is_err());
    assert!(PlateLayout::new(8, 0).is_err());
    assert!(PlateLayout::new(27, 1).is_err());
    assert!(PlateLayout::new(26, 1).is_ok());
}

#[test]
fn test_well_ref_from_json() {
    let refs: Vec<WellRef> = serde_json::from_str(r#"["B3", 17]"#).unwrap();
    assert_eq!(refs, vec![WellRef::Name("B3".to_string()), WellRef::Offset(17)]);
}

#[test]
fn test_bijection_on_every_96_well() {
    for offset in 0..96 {
        let name = offset_to_name(offset, 8).unwrap();
        assert_eq!(i64::from(name_to_offset(&name, 8).unwrap()), offset);
    }
}
