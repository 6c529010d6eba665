use log::{debug, info};
use ratio_units::{electrical::*, force::*, math, motion::*, *};

fn main() {
  env_logger::builder().filter_level(log::LevelFilter::Info).target(env_logger::Target::Stdout).parse_default_env().init();

  let distance = 5 * kilometer;
  let elapsed = 20 * minute;
  let speed: Velocity = distance / elapsed;
  info!("{} in {} is {}", distance.in_unit::<kilometer>(), elapsed.in_unit::<minute>(), speed.in_unit::<kilometers_per_hour>());
  debug!("speed dimension: {}", speed.dimension());

  let mass = 80.0 * kilogram;
  let weight: Force = mass * (9.81 * meters_per_second2);
  info!("{} weighs {}", mass.in_canonical(), weight.in_canonical());

  let arm = 30.0 * centimeter;
  let torque: Torque = weight * arm;
  info!("at {} that is {}", arm.in_unit::<centimeter>(), torque.in_canonical());

  let power: Power = (12.0 * volt) * (15.0 * ampere);
  info!("a 12 V motor drawing 15 A uses {}", power.in_canonical());

  let heading = math::atan2(3.0 * meter, 4.0 * meter);
  info!("heading {} (sin = {})", heading.in_unit::<degree>(), heading.sin().value());

  let side = math::sqrt(2.0 * square_meter);
  let half_power = math::sqrt(side);
  info!("side of a 2 m2 square is {}; its square root carries {}", side.in_canonical(), half_power.dimension());

  let snapped = math::round(1.3 * meter, 1 * tile);
  info!("1.3 m snaps to {} ({})", snapped.in_unit::<tile>(), snapped);
}
