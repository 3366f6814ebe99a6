//! Print head movement types.

/// A printer axis that can be homed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// All three axes.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The lowercase axis name used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// A print head jog.
///
/// Distances are in millimetres. Relative unless `absolute` is set.
///
/// # Example
///
/// ```
/// use octoapi::Jog;
///
/// // Lift the nozzle 10mm at 600mm/min
/// let jog = Jog::new().z(10.0).speed(600);
/// assert_eq!(jog.x, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Jog {
    /// Movement on the X axis.
    pub x: f64,
    /// Movement on the Y axis.
    pub y: f64,
    /// Movement on the Z axis.
    pub z: f64,
    /// Treat the values as absolute coordinates.
    pub absolute: bool,
    /// Feed rate in mm/min; the printer default when unset.
    pub speed: Option<u32>,
}

impl Jog {
    /// A zero-distance relative jog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the X distance.
    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Set the Y distance.
    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Set the Z distance.
    pub fn z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Interpret the coordinates as absolute positions.
    pub fn absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    /// Set the movement speed.
    pub fn speed(mut self, speed: u32) -> Self {
        self.speed = Some(speed);
        self
    }
}
