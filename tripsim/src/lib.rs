pub mod core {
    pub mod course;
    pub mod driver;
    pub mod element;
    pub mod handle_trip;
    pub mod road_surface;
    pub mod trip;
    pub mod trip_sim;
    pub mod vehicle;
}

pub mod interfaces {
    pub mod frontend_interface;
}

pub mod post {
    pub mod trip_result;
}

pub mod pre {
    pub mod check_sim_opts_pars;
    pub mod read_elements;
    pub mod read_sim_pars;
    pub mod sim_opts;
}





#[cfg(test)]
mod course_tests {
    use crate::core::course::{Course, CoursePars, SurfaceSection};
    use crate::core::element::ElementPars;
    use crate::core::road_surface::RoadSurface;
    use approx::assert_ulps_eq;

    fn get_course_pars() -> CoursePars {
        CoursePars {
            surface_sections: vec![
                SurfaceSection {
                    start: 200.0,
                    surface: RoadSurface::Road,
                },
                SurfaceSection {
                    start: 100.0,
                    surface: RoadSurface::Grass,
                },
            ],
            elements: vec![
                ElementPars {
                    distance: 50.0,
                    size: 64.0,
                    sprite_src: "tree.png".to_owned(),
                    horizontal_position: -0.8,
                },
                ElementPars {
                    distance: 20.0,
                    size: 32.0,
                    sprite_src: "sign.png".to_owned(),
                    horizontal_position: 0.0,
                },
            ],
        }
    }

    #[test]
    fn test_surface_at() {
        let course = Course::new(&get_course_pars());
        assert_eq!(course.surface_at(0.0), RoadSurface::Road);
        assert_eq!(course.surface_at(100.0), RoadSurface::Grass);
        assert_eq!(course.surface_at(199.9), RoadSurface::Grass);
        assert_eq!(course.surface_at(200.0), RoadSurface::Road);
        assert_eq!(course.surface_at(1e6), RoadSurface::Road);
    }
    #[test]
    fn test_surface_at_without_sections() {
        let course = Course::new(&CoursePars::default());
        assert_eq!(course.surface_at(42.0), RoadSurface::Road);
    }
    #[test]
    fn test_elements_and_sprites_linked_by_id() {
        let course = Course::new(&get_course_pars());
        let elements = course.get_elements();
        assert_eq!(elements.len(), 2);

        let sprite = course.get_sprite(elements[1].get_id()).unwrap();
        assert_eq!(sprite.sprite_src, "sign.png");
        assert_ulps_eq!(sprite.size, 32.0);
        assert_ulps_eq!(elements[0].get_horizontal_position(), -0.8);
        assert!(course.get_sprite(2).is_none());
    }
    #[test]
    fn test_element_pars_default_horizontal_position() {
        let element_pars: ElementPars =
            serde_json::from_str(r#"{"distance": 10.0, "size": 16.0, "sprite_src": "rock.png"}"#)
                .unwrap();
        assert_ulps_eq!(element_pars.horizontal_position, 0.0);
    }
}

#[cfg(test)]
mod driver_tests {
    use crate::core::driver::{Driver, DriverPars};

    #[test]
    fn test_full_throttle_without_zones() {
        let driver = Driver::new(&DriverPars::default());
        assert!(driver.wants_throttle(0.0));
        assert!(driver.wants_throttle(12345.0));
    }
    #[test]
    fn test_throttle_zones() {
        let driver = Driver::new(&DriverPars {
            throttle_zones: vec![[0.0, 100.0], [200.0, 300.0]],
        });
        assert!(driver.wants_throttle(0.0));
        assert!(driver.wants_throttle(50.0));
        assert!(!driver.wants_throttle(100.0));
        assert!(!driver.wants_throttle(150.0));
        assert!(driver.wants_throttle(250.0));
        assert!(!driver.wants_throttle(300.0));
    }
    #[test]
    fn test_throttle_ahead() {
        let driver = Driver::new(&DriverPars {
            throttle_zones: vec![[0.0, 100.0], [200.0, 300.0]],
        });
        assert!(driver.throttle_ahead(50.0));
        assert!(driver.throttle_ahead(150.0));
        assert!(!driver.wants_throttle(150.0));
        assert!(driver.throttle_ahead(299.0));
        assert!(!driver.throttle_ahead(300.0));
        assert!(!driver.throttle_ahead(1000.0));

        let driver = Driver::new(&DriverPars::default());
        assert!(driver.throttle_ahead(1.0e6));
    }
}


#[cfg(test)]
mod handle_trip_tests {
    use crate::core::handle_trip::handle_trip;
    use crate::interfaces::frontend_interface::TripState;
    use crate::post::trip_result::TripOutcome;
    use crate::pre::check_sim_opts_pars::check_sim_pars;
    use crate::pre::read_sim_pars::read_sim_pars;
    use crate::test_pars::{get_input_path, get_sim_pars};
    use approx::assert_ulps_eq;

    #[test]
    fn test_handle_trip() {
        let trip_result = handle_trip(&get_sim_pars(), 1.0, true, None, 1.0).unwrap();
        assert_eq!(trip_result.outcome, TripOutcome::GoalReached);
        assert_ulps_eq!(trip_result.t_trip, 6.0);
    }
    #[test]
    fn test_handle_trip_realtime() {
        let (tx, rx) = flume::unbounded();
        let trip_result = handle_trip(&get_sim_pars(), 1.0, false, Some(&tx), 100.0).unwrap();

        let trip_states: Vec<TripState> = rx.try_iter().collect();
        assert_eq!(trip_states.len(), 6);
        assert!(trip_states.last().unwrap().goal_reached);
        assert!(!trip_states[0].goal_reached);
        assert_ulps_eq!(trip_states.last().unwrap().distance, trip_result.distance);
    }
    #[test]
    fn test_handle_trip_demo() {
        let sim_pars = read_sim_pars(&get_input_path("parameters/pars_demo.json")).unwrap();
        check_sim_pars(&sim_pars).unwrap();

        let trip_result = handle_trip(&sim_pars, 0.05, false, None, 1.0).unwrap();
        assert_eq!(trip_result.outcome, TripOutcome::GoalReached);
        assert!(trip_result.fuel_level > 0.0);
        assert!(trip_result.no_elements_seen > 0);
    }
}


#[cfg(test)]
mod trip_result_tests {
    use crate::core::handle_trip::handle_trip;
    use crate::test_pars::get_sim_pars;

    #[test]
    fn test_summary_string() {
        let trip_result = handle_trip(&get_sim_pars(), 1.0, false, None, 1.0).unwrap();
        let summary = trip_result.get_summary_string();
        assert!(summary.contains("outcome:        goal reached"));
        assert!(summary.contains("distance:       105.0m of 100.0m"));
        assert!(summary.contains("average speed:  17.50m/s"));
        assert_eq!(summary.lines().filter(|line| line.ends_with("road")).count(), 7);
    }
}

#[cfg(test)]
mod property_tests {
    use crate::core::element::Element;
    use crate::core::trip::Trip;
    use crate::core::vehicle::{Vehicle, VehiclePars};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_tick_keeps_speed_and_fuel_bounded(
            initial_speed in 0.0..30.0f64,
            initial_fuel in 0.0..=100.0f64,
            acceleration in 0.0..20.0f64,
            drag in 0.0..10.0f64,
            steps in proptest::collection::vec((0.0..5.0f64, any::<bool>()), 1..50),
        ) {
            let mut vehicle = Vehicle::new(
                &VehiclePars::new(initial_speed, initial_fuel, 30.0, acceleration, drag),
            ).unwrap();

            for (delta_time, throttle) in steps {
                if throttle {
                    vehicle.accelerate();
                } else {
                    vehicle.stop_accelerating();
                }
                vehicle.on_tick(delta_time).unwrap();

                prop_assert!(0.0 <= vehicle.get_speed() && vehicle.get_speed() <= 30.0);
                prop_assert!(0.0 <= vehicle.get_fuel_level() && vehicle.get_fuel_level() <= 100.0);
                prop_assert!(!vehicle.is_accelerating() || vehicle.get_fuel_level() > 0.0);
            }
        }

        #[test]
        fn prop_zero_tick_changes_nothing(
            initial_speed in 0.0..30.0f64,
            initial_fuel in 0.0..=100.0f64,
            throttle in any::<bool>(),
        ) {
            let mut vehicle = Vehicle::new(
                &VehiclePars::new(initial_speed, initial_fuel, 30.0, 5.0, 2.0),
            ).unwrap();
            if throttle {
                vehicle.accelerate();
            }

            for _ in 0..5 {
                vehicle.on_tick(0.0).unwrap();
                prop_assert_eq!(vehicle.get_speed(), initial_speed);
                prop_assert_eq!(vehicle.get_fuel_level(), initial_fuel);
            }
        }

        #[test]
        fn prop_no_fuel_never_speeds_up(
            initial_speed in 0.0..30.0f64,
            delta_time in 0.0..5.0f64,
        ) {
            let mut vehicle = Vehicle::new(
                &VehiclePars::new(initial_speed, 0.0, 30.0, 5.0, 2.0),
            ).unwrap();
            vehicle.accelerate();
            vehicle.on_tick(delta_time).unwrap();

            let expected = (initial_speed - 2.0 * delta_time).max(0.0);
            prop_assert!((vehicle.get_speed() - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_goal_reached_stays_reached(
            goal in 1.0..1000.0f64,
            deltas in proptest::collection::vec(0.0..100.0f64, 1..40),
        ) {
            let mut trip = Trip::new(0.0, goal);
            let mut reached = false;

            for delta in deltas {
                let distance_prev = trip.get_distance();
                trip.update_distance(delta).unwrap();

                prop_assert!(trip.get_distance() >= distance_prev);
                prop_assert_eq!(trip.is_goal_reached(), trip.get_distance() >= goal);
                prop_assert!(!reached || trip.is_goal_reached());
                reached = trip.is_goal_reached();
            }
        }

        #[test]
        fn prop_visible_elements_match_window(
            distances in proptest::collection::vec(0.0..1000.0f64, 0..40),
            distance in 0.0..1000.0f64,
            view_distance in 0.0..300.0f64,
        ) {
            let mut trip = Trip::new(distance, 2000.0);
            for (id, &el_distance) in distances.iter().enumerate() {
                trip.add_element(Element::new(id, el_distance, 0.0)).unwrap();
            }

            let expected: Vec<Element> = trip
                .get_elements()
                .iter()
                .filter(|el| {
                    distance - view_distance <= el.get_distance()
                        && el.get_distance() <= distance + view_distance
                })
                .copied()
                .collect();

            prop_assert_eq!(trip.get_visible_elements(view_distance).unwrap(), expected);
        }
    }
}
