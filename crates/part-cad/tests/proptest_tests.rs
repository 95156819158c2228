//! Property-based tests for unit-aware placement using the `proptest` crate.

use proptest::prelude::*;

use part_cad::{location_position, make_box, translate, CadUnits, Location};
use part_units::{get_registry, EngineeringSystem, UnitRegistry};
use truck_modeling::Point3;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_offset() -> impl Strategy<Value = f64> {
    -1.0e3f64..1.0e3
}

fn arb_length_unit() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["millimeter", "centimeter", "meter", "inch", "foot", "mil"])
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ---------------------------------------------------------------------------
// 1. A translation's position reads back as the normalized offsets
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn translation_position_round_trip(
        x in arb_offset(),
        y in arb_offset(),
        z in arb_offset(),
        unit in arb_length_unit(),
    ) {
        let reg = get_registry(Some(EngineeringSystem::SiEngineering));
        let units = CadUnits::new(&reg);
        let loc = Location::translation(
            &units,
            reg.wrap(x, unit).unwrap(),
            reg.wrap(y, unit).unwrap(),
            reg.wrap(z, unit).unwrap(),
        )
        .unwrap();
        let (px, py, pz) = location_position(&loc);
        let to_mm = |v: f64| reg.strip_to_unit(reg.wrap(v, unit).unwrap(), "millimeter").unwrap();
        prop_assert!(close(px, to_mm(x)));
        prop_assert!(close(py, to_mm(y)));
        prop_assert!(close(pz, to_mm(z)));
    }
}

// ---------------------------------------------------------------------------
// 2. Composing translations adds their offsets
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn composed_translations_add(
        a in (arb_offset(), arb_offset(), arb_offset()),
        b in (arb_offset(), arb_offset(), arb_offset()),
    ) {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        let la = Location::translation(&units, a.0, a.1, a.2).unwrap();
        let lb = Location::translation(&units, b.0, b.1, b.2).unwrap();
        let (x, y, z) = location_position(&(la * lb));
        prop_assert!(close(x, a.0 + b.0));
        prop_assert!(close(y, a.1 + b.1));
        prop_assert!(close(z, a.2 + b.2));
    }
}

// ---------------------------------------------------------------------------
// 3. Translating a point moves it by exactly the offset
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn translated_point_moves_by_offset(
        p in (arb_offset(), arb_offset(), arb_offset()),
        d in (arb_offset(), arb_offset(), arb_offset()),
    ) {
        let reg = UnitRegistry::new();
        let units = CadUnits::new(&reg);
        let moved = translate(&units, &Point3::new(p.0, p.1, p.2), d.0, d.1, d.2).unwrap();
        prop_assert!(close(moved.x, p.0 + d.0));
        prop_assert!(close(moved.y, p.1 + d.1));
        prop_assert!(close(moved.z, p.2 + d.2));
    }
}

// ---------------------------------------------------------------------------
// 4. Box edges given in any length unit land at the same native size
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn box_extent_is_unit_independent(size in 0.1f64..100.0, unit in arb_length_unit()) {
        let reg = get_registry(Some(EngineeringSystem::SiEngineering));
        let units = CadUnits::new(&reg);
        let solid = make_box(&units, reg.wrap(size, unit).unwrap(), 1.0, 1.0).unwrap();
        let expected = reg.strip_to_unit(reg.wrap(size, unit).unwrap(), "millimeter").unwrap();

        let max_x = solid.boundaries()[0]
            .vertex_iter()
            .map(|v| v.point().x)
            .fold(f64::MIN, f64::max);
        prop_assert!(close(max_x, expected), "{} vs {}", max_x, expected);
    }
}
