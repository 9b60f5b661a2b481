use galileo_referencing::axis::{self, AxisDirection, DirectionAlongMeridian};
use galileo_referencing::standard::{create_ellipsoid, create_geodetic_datum};

#[test]
fn opposite_is_an_involution() {
    for direction in AxisDirection::values() {
        assert_eq!(&axis::opposite(&axis::opposite(direction)), direction);
    }
}

#[test]
fn absolute_directions() {
    assert_eq!(axis::opposite(&AxisDirection::North), AxisDirection::South);
    assert_eq!(axis::absolute(&AxisDirection::South), AxisDirection::North);
    assert!(axis::is_opposite(&AxisDirection::South));
    assert!(!axis::is_opposite(&AxisDirection::North));
    assert_eq!(
        axis::absolute(&AxisDirection::GeocentricX),
        AxisDirection::GeocentricX
    );
}

#[test]
fn names_resolve_to_directions() {
    assert_eq!(axis::value_of("north_east"), Some(AxisDirection::NorthEast));
    assert_eq!(axis::value_of("SSW"), Some(AxisDirection::SouthSouthWest));
    assert_eq!(
        axis::value_of("Geocentre > north pole"),
        Some(AxisDirection::GeocentricZ)
    );
    assert_eq!(axis::value_of("North along 90°E"), None);
}

#[test]
fn polar_axis_names() {
    let south = DirectionAlongMeridian::parse("South along 90 deg East").unwrap();
    assert_eq!(south.base_direction(), &AxisDirection::South);
    assert_eq!(south.meridian(), 90.0);
    assert_eq!(
        south.direction(),
        &AxisDirection::custom("South along 90°E")
    );

    assert!(DirectionAlongMeridian::parse("North").is_none());
}

#[test]
fn reparsing_canonical_names_is_stable() {
    let names = [
        "South along 90 deg East",
        "north along 45 deg west",
        "N along 0°E",
        "North along -30.5 deg",
        "South along 180 deg West",
        "S along 179.999°W",
    ];

    for name in names {
        let parsed = DirectionAlongMeridian::parse(name).unwrap();
        let reparsed = DirectionAlongMeridian::parse(&parsed.to_string()).unwrap();
        assert_eq!(reparsed, parsed, "{name} -> {parsed}");
    }
}

#[test]
fn wgs84_ellipsoid() {
    let e = create_ellipsoid(7030);
    assert_eq!(e.name(), "WGS 84");
    assert_eq!(e.semi_major_axis(), 6_378_137.0);
    assert_eq!(e.inverse_flattening(), 298.257_223_563);
    assert!(e.is_ivf_definitive());

    let datum = create_geodetic_datum(6326);
    assert_eq!(datum.ellipsoid(), &e);
    assert_eq!(datum.prime_meridian().greenwich_longitude(), 0.0);
}
