use typenum::{N1, N2, N3, P1, Z0};

use super::{Quantity, ISQ};
use crate::{base::*, unit};

pub type Velocity             = Quantity<ISQ<Z0, P1, N1, Z0, Z0>>;
pub type Acceleration         = Quantity<ISQ<Z0, P1, N2, Z0, Z0>>;
pub type Jerk                 = Quantity<ISQ<Z0, P1, N3, Z0, Z0>>;

pub type AngularVelocity      = Quantity<ISQ<Z0, Z0, N1, Z0, P1>>;
pub type AngularAcceleration  = Quantity<ISQ<Z0, Z0, N2, Z0, P1>>;
pub type AngularJerk          = Quantity<ISQ<Z0, Z0, N3, Z0, P1>>;

pub type Curvature            = Quantity<ISQ<Z0, N1, Z0, Z0, Z0>>;

unit!(Velocity, meters_per_second, "mps");
unit!(Velocity, centimeters_per_second, "cmps", centimeter::ONE.per(second::ONE));
unit!(Velocity, inches_per_second, "inps", inch::ONE.per(second::ONE));
unit!(Velocity, feet_per_second, "ftps", foot::ONE.per(second::ONE));
unit!(Velocity, miles_per_hour, "miph", mile::ONE.per(hour::ONE));
unit!(Velocity, kilometers_per_hour, "kmph", kilometer::ONE.per(hour::ONE));

unit!(Acceleration, meters_per_second2, "mps2");
unit!(Acceleration, centimeters_per_second2, "cmps2", centimeter::ONE.per(second::ONE).per(second::ONE));
unit!(Acceleration, inches_per_second2, "inps2", inch::ONE.per(second::ONE).per(second::ONE));
unit!(Acceleration, miles_per_hour2, "miph2", mile::ONE.per(hour::ONE).per(hour::ONE));
unit!(Acceleration, kilometers_per_hour2, "kmph2", kilometer::ONE.per(hour::ONE).per(hour::ONE));

unit!(Jerk, meters_per_second3, "mps3");
unit!(Jerk, centimeters_per_second3, "cmps3", centimeter::ONE.per(second::ONE.times(second::ONE).times(second::ONE)));
unit!(Jerk, inches_per_second3, "inps3", inch::ONE.per(second::ONE.times(second::ONE).times(second::ONE)));
unit!(Jerk, miles_per_hour3, "miph3", mile::ONE.per(hour::ONE.times(hour::ONE).times(hour::ONE)));
unit!(Jerk, kilometers_per_hour3, "kmph3", kilometer::ONE.per(hour::ONE.times(hour::ONE).times(hour::ONE)));

unit!(AngularVelocity, radians_per_second, "radps");
unit!(AngularVelocity, degrees_per_second, "degps", degree::ONE.per(second::ONE));
unit!(AngularVelocity, rotations_per_second, "rps", rotation::ONE.per(second::ONE));
unit!(AngularVelocity, rotations_per_minute, "rpm", rotation::ONE.per(minute::ONE));

unit!(AngularAcceleration, radians_per_second2, "radps2");
unit!(AngularAcceleration, degrees_per_second2, "degps2", degree::ONE.per(second::ONE).per(second::ONE));
unit!(AngularAcceleration, rotations_per_second2, "rps2", rotation::ONE.per(second::ONE).per(second::ONE));
unit!(AngularAcceleration, rotations_per_minute2, "rpm2", rotation::ONE.per(minute::ONE).per(minute::ONE));

unit!(AngularJerk, radians_per_second3, "radps3");
unit!(AngularJerk, degrees_per_second3, "degps3", degree::ONE.per(second::ONE).per(second::ONE).per(second::ONE));
unit!(AngularJerk, rotations_per_second3, "rps3", rotation::ONE.per(second::ONE).per(second::ONE).per(second::ONE));
unit!(AngularJerk, rotations_per_minute3, "rpm3", rotation::ONE.per(minute::ONE).per(minute::ONE).per(minute::ONE));

unit!(Curvature, radians_per_meter, "radpm");

#[allow(non_camel_case_types)]
pub type rpm = rotations_per_minute;
