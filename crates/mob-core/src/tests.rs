//! Unit tests for mob-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EntityId, GroupId};

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(EntityId::INVALID.0, u32::MAX);
        assert_eq!(GroupId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "entity#7");
        assert_eq!(GroupId(0).to_string(), "group#0");
    }
}

#[cfg(test)]
mod geo {
    use approx::assert_abs_diff_eq;

    use crate::Position;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_abs_diff_eq!(a.distance(b), 5.0);
        assert_abs_diff_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn random_offset_stays_within_radius() {
        let c = Position::new(50.0, 50.0);
        for i in 0..100 {
            let u = i as f64 / 100.0;
            let p = c.random_offset(2.5, u, 1.0 - u);
            assert!(c.distance(p) <= 2.5 + 1e-12);
        }
    }

    #[test]
    fn random_offset_extremes() {
        let c = Position::new(10.0, 10.0);
        // zero radius draw stays on the centre
        assert_eq!(c.random_offset(5.0, 0.0, 0.3), c);
        // direction 0 points along +x
        let p = c.random_offset(4.0, 0.5, 0.0);
        assert_abs_diff_eq!(p.x, 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn lerp_and_clamp() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(10.0, -20.0);
        assert_eq!(a.lerp(b, 0.5), Position::new(5.0, -10.0));
        assert_eq!(b.clamp_to(8.0, 8.0), Position::new(8.0, 0.0));
        assert!(Position::new(8.0, 0.0).within(8.0, 8.0, 0.0));
        assert!(!Position::new(8.1, 0.0).within(8.0, 8.0, 0.0));
    }
}

#[cfg(test)]
mod timeline {
    use approx::assert_abs_diff_eq;

    use crate::{CoreError, Position, Timeline};

    fn line() -> Timeline {
        let mut t = Timeline::new();
        t.append(0.0, Position::new(0.0, 0.0)).unwrap();
        t.append(10.0, Position::new(10.0, 0.0)).unwrap();
        t.append(20.0, Position::new(10.0, 10.0)).unwrap();
        t
    }

    #[test]
    fn position_at_interpolates() {
        let t = line();
        assert_eq!(t.position_at(5.0).unwrap(), Position::new(5.0, 0.0));
        assert_eq!(t.position_at(10.0).unwrap(), Position::new(10.0, 0.0));
        let p = t.position_at(17.5).unwrap();
        assert_abs_diff_eq!(p.x, 10.0);
        assert_abs_diff_eq!(p.y, 7.5);
    }

    #[test]
    fn position_at_outside_span_holds_endpoints() {
        let t = line();
        assert_eq!(t.position_at(-3.0).unwrap(), Position::new(0.0, 0.0));
        assert_eq!(t.position_at(99.0).unwrap(), Position::new(10.0, 10.0));
    }

    #[test]
    fn empty_timeline_position_errors() {
        let t = Timeline::new();
        assert!(matches!(t.position_at(0.0), Err(CoreError::EmptyTimeline)));
    }

    #[test]
    fn append_rejects_time_going_backwards() {
        let mut t = line();
        let err = t.append(19.0, Position::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, CoreError::NonMonotonicTime { last, got } if last == 20.0 && got == 19.0));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn append_rejects_non_finite_time() {
        let mut t = line();
        assert!(matches!(t.append(f64::NAN, Position::ORIGIN), Err(CoreError::NonFiniteTime(_))));
        assert!(matches!(t.append(f64::INFINITY, Position::ORIGIN), Err(CoreError::NonFiniteTime(_))));
    }

    #[test]
    fn append_at_same_time_coalesces() {
        let mut t = line();
        t.append(20.0, Position::new(10.0, 10.0)).unwrap();
        assert_eq!(t.len(), 3);

        t.append(20.0, Position::new(4.0, 4.0)).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.last_waypoint().unwrap().pos, Position::new(4.0, 4.0));
    }

    #[test]
    fn change_times_strictly_increasing() {
        let mut t = line();
        t.append(20.0, Position::new(10.0, 10.0)).unwrap();
        t.append(25.0, Position::new(10.0, 10.0)).unwrap();
        let times = t.change_times();
        assert_eq!(times, vec![0.0, 10.0, 20.0, 25.0]);
        assert!(times.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn next_change_after() {
        let t = line();
        assert_eq!(t.next_change_after(0.0), Some(10.0));
        assert_eq!(t.next_change_after(9.9), Some(10.0));
        assert_eq!(t.next_change_after(10.0), Some(20.0));
        assert_eq!(t.next_change_after(20.0), None);
    }

    #[test]
    fn remove_last() {
        let mut t = line();
        let w = t.remove_last().unwrap();
        assert_eq!(w.time, 20.0);
        assert_eq!(t.last_waypoint().unwrap().time, 10.0);
    }

    #[test]
    fn duration_covered() {
        assert_eq!(Timeline::new().duration_covered(), 0.0);
        assert_eq!(line().duration_covered(), 20.0);
        assert_eq!(line().cut(5.0, 15.0).unwrap().duration_covered(), 10.0);
    }

    #[test]
    fn cut_rebases_and_clips() {
        let t = line();
        let c = t.cut(5.0, 15.0).unwrap();
        let w = c.waypoints();
        assert_eq!(w.len(), 3);
        assert_eq!(w[0].time, 0.0);
        assert_eq!(w[0].pos, Position::new(5.0, 0.0));
        assert_eq!(w[1].time, 5.0);
        assert_eq!(w[1].pos, Position::new(10.0, 0.0));
        assert_eq!(w[2].time, 10.0);
        assert_eq!(w[2].pos, Position::new(10.0, 5.0));
    }

    #[test]
    fn cut_without_overshoot_keeps_last_waypoint() {
        let t = line();
        let c = t.cut(0.0, 50.0).unwrap();
        assert_eq!(c, t);
    }

    #[test]
    fn cut_at_exact_waypoint_end() {
        let t = line();
        let c = t.cut(0.0, 20.0).unwrap();
        assert_eq!(c.len(), 3);
        assert_eq!(c.last_waypoint().unwrap().time, 20.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::UnitRng;

    #[test]
    fn same_unit_same_stream() {
        let mut a = UnitRng::for_unit(42, 3);
        let mut b = UnitRng::for_unit(42, 3);
        for _ in 0..50 {
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
        }
    }

    #[test]
    fn different_units_diverge() {
        let mut a = UnitRng::for_unit(42, 0);
        let mut b = UnitRng::for_unit(42, 1);
        let xs: Vec<f64> = (0..8).map(|_| a.uniform()).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.uniform()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn uniform_between_bounds() {
        let mut r = UnitRng::for_unit(7, 0);
        for _ in 0..1000 {
            let v = r.uniform_between(0.5, 1.5);
            assert!((0.5..1.5).contains(&v));
        }
        assert_eq!(r.uniform_between(2.0, 2.0), 2.0);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, ScenarioConfig};

    #[test]
    fn default_is_valid() {
        let cfg = ScenarioConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.horizon(), 4200.0);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            ScenarioConfig { width: 0.0, ..Default::default() },
            ScenarioConfig { height: f64::NAN, ..Default::default() },
            ScenarioConfig { duration: -1.0, ..Default::default() },
            ScenarioConfig { ignore: -5.0, ..Default::default() },
            ScenarioConfig { min_speed: 2.0, max_speed: 1.0, ..Default::default() },
            ScenarioConfig { min_speed: 0.0, max_speed: 0.0, ..Default::default() },
            ScenarioConfig { max_pause: -1.0, ..Default::default() },
            ScenarioConfig { num_threads: Some(0), ..Default::default() },
        ];
        for cfg in bad {
            let err = cfg.validate().unwrap_err();
            assert!(matches!(err, CoreError::Config(_)), "{cfg:?}");
            assert!(err.is_config());
        }
    }
}

#[cfg(test)]
mod geodesy {
    use approx::assert_abs_diff_eq;

    use crate::{CoreError, GeoPosition};

    fn dms(d: f64, m: f64, s: f64) -> f64 {
        d.signum() * (d.abs() + m / 60.0 + s / 3600.0)
    }

    #[test]
    fn flinders_peak_to_buninyong() {
        // The classic test geodesic from Vincenty (1975).
        let flinders = GeoPosition::new(dms(144.0, 25.0, 29.52440), dms(-37.0, 57.0, 3.72030));
        let buninyong = GeoPosition::new(dms(143.0, 55.0, 35.38390), dms(-37.0, 39.0, 10.15610));
        let d = flinders.distance_m(buninyong);
        assert_abs_diff_eq!(d, 54_972.271, epsilon = 0.01);
    }

    #[test]
    fn one_degree_of_latitude_at_equator() {
        let a = GeoPosition::new(0.0, 0.0);
        let b = GeoPosition::new(0.0, 1.0);
        assert_abs_diff_eq!(a.distance_m(b), 110_574.4, epsilon = 1.0);
    }

    #[test]
    fn coincident_points() {
        let p = GeoPosition::new(7.1, 50.7);
        assert_abs_diff_eq!(p.distance_m(p), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn shift_then_measure() {
        let start = GeoPosition::new(7.1, 50.7);
        let end = start.shift(45.0, 1_000.0);
        assert_abs_diff_eq!(start.distance_m(end), 1_000.0, epsilon = 1e-4);
        assert!(end.lat > start.lat && end.lon > start.lon);
    }

    #[test]
    fn phantom_point_halfway() {
        let a = GeoPosition::new(7.0, 50.0);
        let b = GeoPosition::new(8.0, 51.0);
        let mid = a.phantom_point(b, 0.5).unwrap();
        let total = a.distance_m(b);
        assert_abs_diff_eq!(a.distance_m(mid), total / 2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(mid.distance_m(b), total / 2.0, epsilon = 1e-4);

        let same = a.phantom_point(b, 0.0).unwrap();
        assert_abs_diff_eq!(same.lon, a.lon, epsilon = 1e-12);
        assert_abs_diff_eq!(same.lat, a.lat, epsilon = 1e-12);
    }

    #[test]
    fn phantom_point_rejects_bad_fraction() {
        let a = GeoPosition::new(7.0, 50.0);
        assert!(matches!(a.phantom_point(a, 1.5), Err(CoreError::Config(_))));
    }

    #[test]
    fn near_antipodal_points_have_a_distance() {
        let a = GeoPosition::new(0.0, 0.0);
        let near = a.distance_m(GeoPosition::new(179.7, 0.2));
        let farther_off = a.distance_m(GeoPosition::new(179.5, 0.5));
        assert!(near.is_finite());
        assert!(near > farther_off);
        assert!(near < 20_003_931.46);

        // Exactly antipodal on the equator: the geodesic runs over a pole.
        let antipode = a.distance_m(GeoPosition::new(180.0, 0.0));
        assert_abs_diff_eq!(antipode, 20_003_931.4586, epsilon = 1e-3);
    }

    #[test]
    fn phantom_point_between_near_antipodal_points() {
        let a = GeoPosition::new(0.0, 0.0);
        let b = GeoPosition::new(179.7, 0.2);
        let mid = a.phantom_point(b, 0.5).unwrap();
        let total = a.distance_m(b);
        assert_abs_diff_eq!(a.distance_m(mid), total / 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(mid.distance_m(b), total / 2.0, epsilon = 1e-3);
    }

    #[test]
    fn parse_decimal_degrees() {
        let p: GeoPosition = "+50.2+007.05".parse().unwrap();
        assert_abs_diff_eq!(p.lat, 50.2, epsilon = 1e-12);
        assert_abs_diff_eq!(p.lon, 7.05, epsilon = 1e-12);
    }

    #[test]
    fn parse_degrees_minutes_with_solidus() {
        let p: GeoPosition = "+5012-00705/".parse().unwrap();
        assert_abs_diff_eq!(p.lat, 50.2, epsilon = 1e-12);
        assert_abs_diff_eq!(p.lon, -(7.0 + 5.0 / 60.0), epsilon = 1e-12);
    }

    #[test]
    fn parse_degrees_minutes_seconds_fraction() {
        let p: GeoPosition = "-501230.5+0070515".parse().unwrap();
        assert_abs_diff_eq!(p.lat, -(50.0 + 12.0 / 60.0 + 30.5 / 3600.0), epsilon = 1e-12);
        assert_abs_diff_eq!(p.lon, 7.0 + 5.0 / 60.0 + 15.0 / 3600.0, epsilon = 1e-12);
    }

    #[test]
    fn parse_fraction_keeps_leading_zeros() {
        let p: GeoPosition = "+50.05+007.005".parse().unwrap();
        assert_abs_diff_eq!(p.lat, 50.05, epsilon = 1e-12);
        assert_abs_diff_eq!(p.lon, 7.005, epsilon = 1e-12);
    }

    #[test]
    fn parse_errors() {
        for bad in ["", "50+007", "+50", "+95+000", "+50+181", "+5075+00000", "+5+007", "+50.+007", "+50x+007"] {
            let err = bad.parse::<GeoPosition>().unwrap_err();
            assert!(matches!(err, CoreError::Coordinate(_)), "{bad}");
        }
    }
}
