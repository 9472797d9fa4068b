use flume::Receiver;
use helpers::buffer::RingBuffer;
use std::fmt::Write;
use std::time::Instant;
use tripsim::interfaces::frontend_interface::TripState;

/// ConsoleFrontend draws the trip states received from the simulation thread to the console.
#[derive(Debug)]
pub struct ConsoleFrontend {
    rx: Receiver<TripState>,
    trip_state: TripState,
    prev_update: Instant,
    prev_update_durations: RingBuffer<u32>,
}

impl ConsoleFrontend {
    pub fn new(rx: Receiver<TripState>) -> ConsoleFrontend {
        ConsoleFrontend {
            rx,
            trip_state: Default::default(),
            prev_update: Instant::now(),
            prev_update_durations: RingBuffer::new(10),
        }
    }

    /// run blocks until the simulation thread drops its sender and draws every received state.
    pub fn run(&mut self) {
        while let Ok(trip_state) = self.rx.recv() {
            self.update(trip_state);
            println!("{}", self.get_status_line());
        }
    }

    /// update stores the latest trip state in the channel (older ones are skipped) and measures
    /// the update interval.
    fn update(&mut self, trip_state: TripState) {
        self.trip_state = trip_state;

        while let Ok(trip_state) = self.rx.try_recv() {
            self.trip_state = trip_state;
        }

        self.prev_update_durations
            .push(self.prev_update.elapsed().as_millis() as u32);
        self.prev_update = Instant::now();
    }

    fn get_status_line(&self) -> String {
        let mut tmp_string_elements = String::new();

        for (i, element) in self.trip_state.visible_elements.iter().enumerate() {
            if i > 0 {
                tmp_string_elements.push_str(", ");
            }
            write!(
                &mut tmp_string_elements,
                "#{}@{:.0}m({:+.1})",
                element.get_id(),
                element.get_distance(),
                element.get_horizontal_position()
            )
            .unwrap();
        }

        format!(
            "{:7.2}s | {:7.1}m ({:5.1}%) | {:5.2}m/s | fuel {:7.3}% | {:5} | {:4.0}ms | [{}]",
            self.trip_state.t_trip,
            self.trip_state.distance,
            self.trip_state.get_trip_prog() * 100.0,
            self.trip_state.speed,
            self.trip_state.fuel_level,
            self.trip_state.surface.to_string(),
            self.prev_update_durations.get_avg().unwrap_or(0.0),
            tmp_string_elements
        )
    }
}
