use anyhow::Context;
use helpers::general::{is_non_negative, InputValueError};
use serde::Deserialize;

/// Fuel level of a full tank in percent.
pub const FUEL_FULL: f64 = 100.0;

fn default_fuel_consumption_rate() -> f64 {
    0.005
}

/// * `initial_speed` - (m/s) Speed at the start of the trip
/// * `initial_fuel` - (%) Fuel level at the start of the trip, within [0.0, 100.0]
/// * `max_speed` - (m/s) Maximum speed of the vehicle
/// * `acceleration` - (m/s^2) Acceleration while the driver holds the throttle
/// * `drag` - (m/s^2) Base deceleration when coasting on a road surface
/// * `fuel_consumption_rate` - (%/s) Fuel burned per second while accelerating
#[derive(Debug, Deserialize, Clone)]
pub struct VehiclePars {
    pub initial_speed: f64,
    pub initial_fuel: f64,
    pub max_speed: f64,
    pub acceleration: f64,
    pub drag: f64,
    #[serde(default = "default_fuel_consumption_rate")]
    pub fuel_consumption_rate: f64,
}

impl VehiclePars {
    pub fn new(
        initial_speed: f64,
        initial_fuel: f64,
        max_speed: f64,
        acceleration: f64,
        drag: f64,
    ) -> VehiclePars {
        VehiclePars {
            initial_speed,
            initial_fuel,
            max_speed,
            acceleration,
            drag,
            fuel_consumption_rate: default_fuel_consumption_rate(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    speed: f64,
    fuel: f64,
    max_speed: f64,
    acceleration: f64,
    drag: f64,
    fuel_consumption_rate: f64,
    is_accelerating: bool,
}

impl Vehicle {
    /// The method creates a vehicle without accelerate intent. Initial speed and fuel are clamped
    /// into their valid ranges. Negative or non-finite tuning parameters are rejected.
    pub fn new(vehicle_pars: &VehiclePars) -> anyhow::Result<Vehicle> {
        if [
            vehicle_pars.max_speed,
            vehicle_pars.acceleration,
            vehicle_pars.drag,
            vehicle_pars.fuel_consumption_rate,
        ]
        .iter()
        .any(|&x| !(is_non_negative(x) && x.is_finite()))
        {
            return Err(InputValueError).context(format!(
                "max_speed, acceleration, drag, and fuel_consumption_rate must be finite and \
                non-negative, but are {}m/s, {}m/s^2, {}m/s^2, and {}%/s!",
                vehicle_pars.max_speed,
                vehicle_pars.acceleration,
                vehicle_pars.drag,
                vehicle_pars.fuel_consumption_rate
            ));
        }

        let max_speed = vehicle_pars.max_speed;

        Ok(Vehicle {
            speed: vehicle_pars.initial_speed.max(0.0).min(max_speed),
            fuel: vehicle_pars.initial_fuel.max(0.0).min(FUEL_FULL),
            max_speed,
            acceleration: vehicle_pars.acceleration,
            drag: vehicle_pars.drag,
            fuel_consumption_rate: vehicle_pars.fuel_consumption_rate,
            is_accelerating: false,
        })
    }

    /// The method sets the accelerate intent. Without fuel the intent is ignored.
    pub fn accelerate(&mut self) {
        if self.fuel > 0.0 {
            self.is_accelerating = true;
        }
    }

    pub fn stop_accelerating(&mut self) {
        self.is_accelerating = false;
    }

    /// The method advances the vehicle by one time step using its base drag, i.e. as if it was
    /// driving on a road surface.
    pub fn on_tick(&mut self, delta_time: f64) -> anyhow::Result<()> {
        self.on_tick_with_drag(delta_time, self.drag)
    }

    /// The method advances the vehicle by one time step. While accelerating with fuel left, the
    /// speed increases up to the maximum speed and fuel is burned. Otherwise the vehicle coasts
    /// and loses speed according to the inserted (effective) drag. The state is left untouched
    /// if an argument is invalid.
    pub fn on_tick_with_drag(&mut self, delta_time: f64, drag: f64) -> anyhow::Result<()> {
        if !(is_non_negative(delta_time) && delta_time.is_finite()) {
            return Err(InputValueError).context(format!(
                "delta_time must be finite and non-negative, but is {}s!",
                delta_time
            ));
        }
        if !(is_non_negative(drag) && drag.is_finite()) {
            return Err(InputValueError)
                .context(format!("drag must be finite and non-negative, but is {}!", drag));
        }

        if self.is_accelerating && self.fuel > 0.0 {
            self.speed = (self.speed + self.acceleration * delta_time).min(self.max_speed);
            self.drain_fuel(self.fuel_consumption_rate * delta_time);
        } else {
            self.speed = (self.speed - drag * delta_time).max(0.0);
        }

        Ok(())
    }

    /// The method removes the inserted amount of fuel (e.g. idle consumption). The fuel level
    /// does not drop below zero.
    pub fn consume_fuel(&mut self, amount: f64) -> anyhow::Result<()> {
        if !is_non_negative(amount) {
            return Err(InputValueError).context(format!(
                "Fuel amount must be non-negative, but is {}!",
                amount
            ));
        }

        self.drain_fuel(amount);
        Ok(())
    }

    fn drain_fuel(&mut self, amount: f64) {
        self.fuel = (self.fuel - amount).max(0.0);

        // an empty tank ends the accelerate intent
        if self.fuel <= 0.0 && self.is_accelerating {
            tracing::warn!("Vehicle ran out of fuel at a speed of {:.2}m/s!", self.speed);
            self.is_accelerating = false;
        }
    }

    pub fn get_speed(&self) -> f64 {
        self.speed
    }

    pub fn get_fuel_level(&self) -> f64 {
        self.fuel
    }

    pub fn get_max_speed(&self) -> f64 {
        self.max_speed
    }

    /// get_drag returns the base drag of the vehicle, i.e. without any surface effect.
    pub fn get_drag(&self) -> f64 {
        self.drag
    }

    pub fn is_accelerating(&self) -> bool {
        self.is_accelerating
    }
}
